//! Modelo de simulação de packing
//!
//! Uso acumulado de contentores por apontamento. Uma linha por
//! apontamento; o acumulado nunca passa da quantidade recebida.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Simulação de packing - mapeia exatamente a tabela packing_simulacoes
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PackingSimulacao {
    pub id: Uuid,
    pub apontamento_id: Uuid,
    pub quantidade_usada: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
