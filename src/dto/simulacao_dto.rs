use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Request para somar uso de contentores de um apontamento
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarUsoRequest {
    pub apontamento_id: Option<Uuid>,
    pub quantidade_usada: Option<i32>,
}

// Response do registro de uso; ecoa a quantidade pedida, mesmo quando
// o acumulado foi limitado pelo teto do apontamento
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistroUsoResponse {
    pub success: bool,
    pub message: String,
    pub apontamento_id: Uuid,
    pub quantidade_usada: i32,
}
