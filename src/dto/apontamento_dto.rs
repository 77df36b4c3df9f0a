use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::cor::CorContentor;

// Request para criar um apontamento. Os campos obrigatórios chegam
// como Option para que a falta vire 400 com a mensagem do formulário,
// não um erro de desserialização.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriarApontamentoRequest {
    pub numero_carroca: Option<i32>,
    pub numero_pallet: Option<i32>,
    pub cabecal_id: Option<Uuid>,
    pub valvula_id: Option<Uuid>,
    pub variedade_id: Option<Uuid>,
    // Omitido = um pallet completo
    pub quantidade_containers: Option<i32>,
    // Aceita mas ignora: a cor gravada é sempre a da válvula
    pub cor: Option<CorContentor>,
}

// Request para atualizar um apontamento existente (mesma forma)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtualizarApontamentoRequest {
    pub numero_carroca: Option<i32>,
    pub numero_pallet: Option<i32>,
    pub cabecal_id: Option<Uuid>,
    pub valvula_id: Option<Uuid>,
    pub variedade_id: Option<Uuid>,
    pub quantidade_containers: Option<i32>,
    pub cor: Option<CorContentor>,
}

// Filtros da listagem de apontamentos
#[derive(Debug, Default, Deserialize)]
pub struct ApontamentoFiltro {
    pub data: Option<NaiveDate>,
    pub cor: Option<CorContentor>,
    pub cabecal: Option<Uuid>,
    pub limite: Option<i64>,
}
