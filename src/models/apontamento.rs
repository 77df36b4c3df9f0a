//! Modelo de apontamento
//!
//! O apontamento é o registro central do recebimento: uma carroça
//! descarrega um pallet de contentores de uma válvula, numa cor e
//! variedade. A cor é sempre a da válvula no momento do registro.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::cor::CorContentor;

/// Apontamento - mapeia exatamente a tabela apontamentos
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Apontamento {
    pub id: Uuid,
    pub numero_carroca: i32,
    pub numero_pallet: i32,
    pub cabecal_id: Uuid,
    pub valvula_id: Uuid,
    pub variedade_id: Uuid,
    pub quantidade_containers: i32,
    pub cor: CorContentor,
    pub created_at: DateTime<Utc>,
}

/// Apontamento com os nomes das referências e os campos derivados que
/// as listagens devolvem
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ApontamentoDetalhe {
    pub id: Uuid,
    pub numero_carroca: i32,
    pub numero_pallet: i32,
    pub cabecal_id: Uuid,
    pub cabecal_nome: String,
    pub valvula_id: Uuid,
    pub valvula_nome: String,
    pub variedade_id: Uuid,
    pub variedade_nome: String,
    pub quantidade_containers: i32,
    /// Uso acumulado registrado pelo packing (0 sem registro)
    pub quantidade_usada: i32,
    pub cor: CorContentor,
    /// Peso estimado do pallet inteiro: média das amostras vezes a
    /// quantidade de contentores. Ausente sem amostras.
    pub peso_kg: Option<f64>,
    pub created_at: DateTime<Utc>,
}
