//! Modelo de amostra de peso
//!
//! Pesagens individuais de contentores. Uma amostra pode estar
//! vinculada a um apontamento ou ser avulsa.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::cor::CorContentor;

/// Amostra de peso - mapeia exatamente a tabela amostras_peso
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AmostraPeso {
    pub id: Uuid,
    pub peso_amostra: f64,
    pub apontamento_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Amostra com o contexto do apontamento, como sai nas listagens.
/// Os campos do apontamento ficam ausentes em amostras avulsas.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AmostraPesoDetalhe {
    pub id: Uuid,
    pub peso_amostra: f64,
    pub apontamento_id: Option<Uuid>,
    pub numero_pallet: Option<i32>,
    pub cabecal_nome: Option<String>,
    pub valvula_nome: Option<String>,
    pub cor: Option<CorContentor>,
    pub created_at: DateTime<Utc>,
}
