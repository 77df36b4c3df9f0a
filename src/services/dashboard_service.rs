//! Cálculos dos painéis de recebimento
//!
//! Concentra a aritmética de reconciliação do pátio: peso estimado do
//! dia, tabela recebido/usado/restante por cor com a sobra do dia
//! anterior e as séries por intervalo de 1 hora. As funções são puras
//! e operam sobre linhas já buscadas; as consultas ficam no
//! repositório.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::dto::dashboard_dto::{ContentoresPorCor, IntervaloQuantidade, PesoDiaResumo, TotaisDia};
use crate::models::cor::CorContentor;

/// Um apontamento do dia com o resumo das amostras e do uso simulado,
/// como entra no cálculo de peso
#[derive(Debug, Clone)]
pub struct PesoApontamento {
    pub quantidade_containers: i32,
    pub quantidade_usada: i32,
    pub num_amostras: i64,
    pub soma_pesos: f64,
}

/// Totais de contentores por cor, como saem das consultas agrupadas
pub type TotaisPorCor = HashMap<CorContentor, i64>;

/// Apontamento projetado para as séries do painel secundário
#[derive(Debug, Clone)]
pub struct ApontamentoAgrupavel {
    pub hora_local: u32,
    pub numero_carroca: i32,
    pub numero_pallet: i32,
    pub cabecal_nome: String,
    pub valvula_nome: String,
    pub quantidade_containers: i32,
}

/// Séries por hora do painel secundário
#[derive(Debug)]
pub struct SeriesPorHora {
    pub carrocas: Vec<IntervaloQuantidade>,
    pub pallets: Vec<IntervaloQuantidade>,
    pub cabecais: Vec<IntervaloQuantidade>,
    pub valvulas: Vec<IntervaloQuantidade>,
    pub contentores: Vec<IntervaloQuantidade>,
}

/// Peso total estimado do dia.
///
/// Para cada apontamento com amostras: média das amostras vezes os
/// contentores ainda não usados. Apontamentos sem amostra ficam fora
/// da soma e de todas as contagens do resumo.
pub fn peso_total_do_dia(apontamentos: &[PesoApontamento]) -> PesoDiaResumo {
    let mut peso_total = 0.0;
    let mut total_amostras: i64 = 0;
    let mut com_amostras = 0usize;
    let mut containers_com_amostras: i64 = 0;

    for apontamento in apontamentos {
        if apontamento.num_amostras == 0 {
            continue;
        }

        let peso_medio = apontamento.soma_pesos / apontamento.num_amostras as f64;
        let restantes = apontamento.quantidade_containers - apontamento.quantidade_usada;
        peso_total += peso_medio * restantes as f64;

        total_amostras += apontamento.num_amostras;
        com_amostras += 1;
        containers_com_amostras += apontamento.quantidade_containers as i64;
    }

    PesoDiaResumo {
        peso_total,
        apontamentos_com_amostras: com_amostras,
        total_amostras,
        total_containers_com_amostras: containers_com_amostras,
    }
}

/// Sobra do dia anterior por cor: recebido menos usado, nunca negativa.
/// Cores sem sobra positiva ficam fora do mapa.
pub fn sobra_do_dia_anterior(
    recebido_ontem: &TotaisPorCor,
    usado_ontem: &TotaisPorCor,
) -> TotaisPorCor {
    let mut sobras = TotaisPorCor::new();
    for cor in CorContentor::TODAS {
        let recebido = recebido_ontem.get(&cor).copied().unwrap_or(0);
        let usado = usado_ontem.get(&cor).copied().unwrap_or(0);
        let sobra = recebido - usado;
        if sobra > 0 {
            sobras.insert(cor, sobra);
        }
    }
    sobras
}

/// Tabela recebido/usado/restante por cor do dia vigente, carregando a
/// sobra do dia anterior. Cores sem nenhum movimento não entram.
pub fn tabela_por_cor(
    recebido_hoje: &TotaisPorCor,
    usado_hoje: &TotaisPorCor,
    recebido_ontem: &TotaisPorCor,
    usado_ontem: &TotaisPorCor,
) -> Vec<ContentoresPorCor> {
    let sobras = sobra_do_dia_anterior(recebido_ontem, usado_ontem);

    CorContentor::TODAS
        .iter()
        .filter_map(|&cor| {
            let recebido = recebido_hoje.get(&cor).copied().unwrap_or(0);
            let usado = usado_hoje.get(&cor).copied().unwrap_or(0);
            let sobra_anterior = sobras.get(&cor).copied().unwrap_or(0);
            let restante = (sobra_anterior + recebido - usado).max(0);

            if recebido == 0 && usado == 0 && restante == 0 && sobra_anterior == 0 {
                return None;
            }

            Some(ContentoresPorCor {
                cor: cor.nome().to_string(),
                recebido,
                usado,
                restante,
                sobra_anterior,
            })
        })
        .collect()
}

/// Rótulo de um intervalo de 1 hora, no formato "06h-07h"
pub fn rotulo_intervalo(hora: u32) -> String {
    format!("{:02}h-{:02}h", hora, hora + 1)
}

/// Horas do expediente já decorridas, incluindo a hora corrente. Antes
/// do expediente a lista sai vazia; depois do fim, sai completa.
pub fn intervalos_decorridos(hora_atual: u32, inicio: u32, fim: u32) -> Vec<u32> {
    (inicio..=hora_atual.min(fim)).collect()
}

/// Contentores recebidos por intervalo de 1 hora do expediente.
/// Intervalos já decorridos sem volume aparecem com quantidade zero;
/// registros fora da janela são descartados.
pub fn contentores_por_hora(
    registros: &[(u32, i64)],
    hora_atual: u32,
    inicio: u32,
    fim: u32,
) -> Vec<IntervaloQuantidade> {
    let mut por_hora: BTreeMap<u32, i64> = intervalos_decorridos(hora_atual, inicio, fim)
        .into_iter()
        .map(|hora| (hora, 0))
        .collect();

    for &(hora, quantidade) in registros {
        if hora >= inicio && hora <= fim {
            *por_hora.entry(hora).or_insert(0) += quantidade;
        }
    }

    por_hora
        .into_iter()
        .map(|(hora, quantidade)| IntervaloQuantidade {
            intervalo: rotulo_intervalo(hora),
            quantidade,
        })
        .collect()
}

#[derive(Default)]
struct AcumuladorHora {
    carrocas: HashSet<i32>,
    pallets: HashSet<i32>,
    cabecais: HashSet<String>,
    valvulas: HashSet<String>,
    contentores: i64,
}

/// Séries por hora do painel secundário: valores distintos de carroça,
/// pallet, cabeçal e válvula, mais a soma de contentores. Só os
/// intervalos já decorridos recebem registros.
pub fn series_por_hora(
    registros: &[ApontamentoAgrupavel],
    hora_atual: u32,
    inicio: u32,
    fim: u32,
) -> SeriesPorHora {
    let mut acumuladores: BTreeMap<u32, AcumuladorHora> =
        intervalos_decorridos(hora_atual, inicio, fim)
            .into_iter()
            .map(|hora| (hora, AcumuladorHora::default()))
            .collect();

    for registro in registros {
        if let Some(acumulador) = acumuladores.get_mut(&registro.hora_local) {
            acumulador.carrocas.insert(registro.numero_carroca);
            acumulador.pallets.insert(registro.numero_pallet);
            acumulador.cabecais.insert(registro.cabecal_nome.clone());
            acumulador.valvulas.insert(registro.valvula_nome.clone());
            acumulador.contentores += registro.quantidade_containers as i64;
        }
    }

    let serie = |valor: fn(&AcumuladorHora) -> i64| -> Vec<IntervaloQuantidade> {
        acumuladores
            .iter()
            .map(|(&hora, acumulador)| IntervaloQuantidade {
                intervalo: rotulo_intervalo(hora),
                quantidade: valor(acumulador),
            })
            .collect()
    };

    SeriesPorHora {
        carrocas: serie(|a| a.carrocas.len() as i64),
        pallets: serie(|a| a.pallets.len() as i64),
        cabecais: serie(|a| a.cabecais.len() as i64),
        valvulas: serie(|a| a.valvulas.len() as i64),
        contentores: serie(|a| a.contentores),
    }
}

/// Totais de valores distintos do dia inteiro, sem recorte de janela.
/// Cabeçais e válvulas contam por nome; carroças e pallets por número.
pub fn totais_do_dia(registros: &[ApontamentoAgrupavel]) -> TotaisDia {
    let mut carrocas = HashSet::new();
    let mut pallets = HashSet::new();
    let mut cabecais = HashSet::new();
    let mut valvulas = HashSet::new();
    let mut contentores: i64 = 0;

    for registro in registros {
        carrocas.insert(registro.numero_carroca);
        pallets.insert(registro.numero_pallet);
        cabecais.insert(registro.cabecal_nome.as_str());
        valvulas.insert(registro.valvula_nome.as_str());
        contentores += registro.quantidade_containers as i64;
    }

    TotaisDia {
        carrocas: carrocas.len(),
        pallets: pallets.len(),
        cabecais: cabecais.len(),
        valvulas: valvulas.len(),
        contentores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peso(containers: i32, usados: i32, amostras: &[f64]) -> PesoApontamento {
        PesoApontamento {
            quantidade_containers: containers,
            quantidade_usada: usados,
            num_amostras: amostras.len() as i64,
            soma_pesos: amostras.iter().sum(),
        }
    }

    #[test]
    fn peso_usa_media_vezes_contentores_restantes() {
        // Média 15.0, 150 recebidos e 30 usados: 15 * 120
        let resumo = peso_total_do_dia(&[peso(150, 30, &[10.0, 20.0])]);
        assert_eq!(resumo.peso_total, 15.0 * 120.0);
        assert_eq!(resumo.apontamentos_com_amostras, 1);
        assert_eq!(resumo.total_amostras, 2);
        assert_eq!(resumo.total_containers_com_amostras, 150);
    }

    #[test]
    fn apontamento_sem_amostras_fica_fora_do_peso() {
        let resumo = peso_total_do_dia(&[peso(168, 0, &[12.0]), peso(168, 0, &[])]);
        assert_eq!(resumo.peso_total, 12.0 * 168.0);
        assert_eq!(resumo.apontamentos_com_amostras, 1);
        assert_eq!(resumo.total_amostras, 1);
        assert_eq!(resumo.total_containers_com_amostras, 168);
    }

    #[test]
    fn peso_soma_varios_apontamentos() {
        let resumo = peso_total_do_dia(&[
            peso(100, 0, &[8.0, 12.0]),
            peso(50, 20, &[5.0]),
        ]);
        assert_eq!(resumo.peso_total, 10.0 * 100.0 + 5.0 * 30.0);
        assert_eq!(resumo.apontamentos_com_amostras, 2);
        assert_eq!(resumo.total_amostras, 3);
        assert_eq!(resumo.total_containers_com_amostras, 150);
    }

    fn totais(pares: &[(CorContentor, i64)]) -> TotaisPorCor {
        pares.iter().copied().collect()
    }

    #[test]
    fn sobra_anterior_nunca_fica_negativa() {
        let recebido = totais(&[
            (CorContentor::Vermelho, 100),
            (CorContentor::Verde, 50),
        ]);
        let usado = totais(&[
            (CorContentor::Vermelho, 40),
            (CorContentor::Verde, 80),
        ]);

        let sobras = sobra_do_dia_anterior(&recebido, &usado);
        assert_eq!(sobras.get(&CorContentor::Vermelho), Some(&60));
        // Uso acima do recebido não gera sobra negativa
        assert_eq!(sobras.get(&CorContentor::Verde), None);
    }

    #[test]
    fn tabela_por_cor_soma_sobra_e_clampa_restante() {
        let recebido_hoje = totais(&[(CorContentor::Vermelho, 100)]);
        let usado_hoje = totais(&[(CorContentor::Vermelho, 30)]);
        let recebido_ontem = totais(&[(CorContentor::Vermelho, 50)]);
        let usado_ontem = totais(&[(CorContentor::Vermelho, 20)]);

        let tabela = tabela_por_cor(&recebido_hoje, &usado_hoje, &recebido_ontem, &usado_ontem);
        assert_eq!(tabela.len(), 1);

        let linha = &tabela[0];
        assert_eq!(linha.cor, "Vermelho");
        assert_eq!(linha.recebido, 100);
        assert_eq!(linha.usado, 30);
        assert_eq!(linha.sobra_anterior, 30);
        assert_eq!(linha.restante, 30 + 100 - 30);
    }

    #[test]
    fn tabela_por_cor_descarta_cores_sem_movimento() {
        let recebido_hoje = totais(&[(CorContentor::Amarelo, 10)]);
        let vazio = TotaisPorCor::new();

        let tabela = tabela_por_cor(&recebido_hoje, &vazio, &vazio, &vazio);
        assert_eq!(tabela.len(), 1);
        assert_eq!(tabela[0].cor, "Amarelo");
    }

    #[test]
    fn restante_clampa_em_zero() {
        // Uso registrado maior que o recebido do dia, sem sobra anterior
        let recebido_hoje = totais(&[(CorContentor::Branco, 10)]);
        let usado_hoje = totais(&[(CorContentor::Branco, 25)]);
        let vazio = TotaisPorCor::new();

        let tabela = tabela_por_cor(&recebido_hoje, &usado_hoje, &vazio, &vazio);
        assert_eq!(tabela[0].restante, 0);
    }

    #[test]
    fn cores_saem_na_ordem_fixa() {
        let recebido_hoje = totais(&[
            (CorContentor::Laranja, 5),
            (CorContentor::Vermelho, 5),
        ]);
        let vazio = TotaisPorCor::new();

        let tabela = tabela_por_cor(&recebido_hoje, &vazio, &vazio, &vazio);
        let nomes: Vec<&str> = tabela.iter().map(|linha| linha.cor.as_str()).collect();
        assert_eq!(nomes, vec!["Vermelho", "Laranja"]);
    }

    #[test]
    fn rotulos_tem_dois_digitos() {
        assert_eq!(rotulo_intervalo(6), "06h-07h");
        assert_eq!(rotulo_intervalo(17), "17h-18h");
    }

    #[test]
    fn intervalos_param_na_hora_corrente() {
        assert_eq!(intervalos_decorridos(9, 6, 18), vec![6, 7, 8, 9]);
        // Depois do expediente a janela sai inteira
        assert_eq!(intervalos_decorridos(22, 6, 18).len(), 13);
        // Antes do expediente não há intervalos
        assert!(intervalos_decorridos(4, 6, 18).is_empty());
    }

    #[test]
    fn horas_sem_volume_saem_zeradas() {
        let registros = [(6u32, 100i64), (6, 68), (8, 40)];
        let serie = contentores_por_hora(&registros, 9, 6, 18);

        let esperado = vec![
            IntervaloQuantidade { intervalo: "06h-07h".into(), quantidade: 168 },
            IntervaloQuantidade { intervalo: "07h-08h".into(), quantidade: 0 },
            IntervaloQuantidade { intervalo: "08h-09h".into(), quantidade: 40 },
            IntervaloQuantidade { intervalo: "09h-10h".into(), quantidade: 0 },
        ];
        assert_eq!(serie, esperado);
    }

    #[test]
    fn registros_fora_da_janela_sao_descartados() {
        let registros = [(3u32, 50i64), (20, 70), (10, 30)];
        let serie = contentores_por_hora(&registros, 12, 6, 18);

        let total: i64 = serie.iter().map(|i| i.quantidade).sum();
        assert_eq!(total, 30);
    }

    fn registro(
        hora: u32,
        carroca: i32,
        pallet: i32,
        cabecal: &str,
        valvula: &str,
        quantidade: i32,
    ) -> ApontamentoAgrupavel {
        ApontamentoAgrupavel {
            hora_local: hora,
            numero_carroca: carroca,
            numero_pallet: pallet,
            cabecal_nome: cabecal.to_string(),
            valvula_nome: valvula.to_string(),
            quantidade_containers: quantidade,
        }
    }

    #[test]
    fn series_contam_valores_distintos_por_hora() {
        let registros = [
            registro(7, 1, 10, "Cabeçal 1", "Válvula 1", 168),
            registro(7, 1, 11, "Cabeçal 1", "Válvula 2", 168),
            registro(8, 2, 12, "Cabeçal 2", "Válvula 1", 100),
        ];
        let series = series_por_hora(&registros, 8, 6, 18);

        // 06h vazio, 07h com duas entradas da mesma carroça, 08h com uma
        assert_eq!(series.carrocas[0].quantidade, 0);
        assert_eq!(series.carrocas[1].quantidade, 1);
        assert_eq!(series.carrocas[2].quantidade, 1);

        assert_eq!(series.pallets[1].quantidade, 2);
        assert_eq!(series.cabecais[1].quantidade, 1);
        assert_eq!(series.valvulas[1].quantidade, 2);
        assert_eq!(series.contentores[1].quantidade, 336);
        assert_eq!(series.contentores[2].quantidade, 100);
    }

    #[test]
    fn totais_do_dia_contam_por_nome_e_numero() {
        let registros = [
            registro(7, 1, 10, "Cabeçal 1", "Válvula 1", 168),
            registro(9, 1, 10, "Cabeçal 1", "Válvula 1", 168),
            registro(21, 3, 12, "Cabeçal 2", "Válvula 2", 50),
        ];
        let totais = totais_do_dia(&registros);

        assert_eq!(totais.carrocas, 2);
        assert_eq!(totais.pallets, 2);
        assert_eq!(totais.cabecais, 2);
        assert_eq!(totais.valvulas, 2);
        // Registro fora do expediente ainda conta nos totais do dia
        assert_eq!(totais.contentores, 386);
    }
}
