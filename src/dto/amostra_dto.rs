use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::amostra_peso::AmostraPeso;

// Request para registrar um lote de pesagens
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriarAmostrasRequest {
    pub pesos: Option<Vec<f64>>,
    pub apontamento_id: Option<Uuid>,
}

// Response do lote criado, com a média já calculada
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmostrasCriadasResponse {
    pub amostras: Vec<AmostraPeso>,
    pub peso_medio: f64,
    pub quantidade_amostras: usize,
}

// Filtro da listagem de amostras
#[derive(Debug, Default, Deserialize)]
pub struct AmostraFiltro {
    pub data: Option<NaiveDate>,
}
