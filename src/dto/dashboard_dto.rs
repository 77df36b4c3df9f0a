use chrono::NaiveDate;
use serde::Serialize;

// Resumo do peso estimado do dia. Só entram apontamentos com ao menos
// uma amostra.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PesoDiaResumo {
    pub peso_total: f64,
    pub apontamentos_com_amostras: usize,
    pub total_amostras: i64,
    pub total_containers_com_amostras: i64,
}

// Linha da tabela recebido/usado/restante de uma cor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentoresPorCor {
    pub cor: String,
    pub recebido: i64,
    pub usado: i64,
    pub restante: i64,
    pub sobra_anterior: i64,
}

// Um intervalo de 1 hora dos gráficos, com rótulo "06h-07h"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervaloQuantidade {
    pub intervalo: String,
    pub quantidade: i64,
}

// Painel principal do recebimento
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPrimario {
    pub data: NaiveDate,
    pub peso: PesoDiaResumo,
    pub total_contentores: i64,
    pub contentores_por_cor: Vec<ContentoresPorCor>,
    pub contentores_por_hora: Vec<IntervaloQuantidade>,
}

// Totais de valores distintos do dia vigente
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotaisDia {
    pub carrocas: usize,
    pub pallets: usize,
    pub cabecais: usize,
    pub valvulas: usize,
    pub contentores: i64,
}

// Painel secundário: séries por hora de grandezas distintas
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSecundario {
    pub data: NaiveDate,
    pub carrocas_por_hora: Vec<IntervaloQuantidade>,
    pub pallets_por_hora: Vec<IntervaloQuantidade>,
    pub cabecais_por_hora: Vec<IntervaloQuantidade>,
    pub valvulas_por_hora: Vec<IntervaloQuantidade>,
    pub contentores_por_hora: Vec<IntervaloQuantidade>,
    pub totais_do_dia: TotaisDia,
}
