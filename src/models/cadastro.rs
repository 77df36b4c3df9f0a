//! Modelos de cadastro
//!
//! As entidades de apoio que o apontamento referencia: cabeçais e suas
//! válvulas, variedades de fruta, linhas de produção, posições e
//! embaladeiras. Mapeiam exatamente as tabelas homônimas.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::cor::CorContentor;

/// Cabeçal (zona de origem no campo)
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Cabecal {
    pub id: Uuid,
    pub nome: String,
    pub descricao: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Válvula de um cabeçal; carrega a cor dos contentores que saem dela
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Valvula {
    pub id: Uuid,
    pub nome: String,
    pub descricao: Option<String>,
    pub cor: CorContentor,
    pub cabecal_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Variedade de fruta
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Variedade {
    pub id: Uuid,
    pub nome: String,
    pub descricao: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Linha de produção do packing, identificada por uma letra
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LinhaProducao {
    pub id: Uuid,
    pub letra: String,
    pub descricao: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Posição de trabalho numa linha
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Posicao {
    pub id: Uuid,
    pub posicao: String,
    pub descricao: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Embaladeira (operadora de embalagem)
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Embaladeira {
    pub id: Uuid,
    pub nome: String,
    pub created_at: DateTime<Utc>,
}
