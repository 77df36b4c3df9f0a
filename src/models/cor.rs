//! Cor dos contentores
//!
//! Conjunto fechado de seis cores que identifica os lotes de
//! contentores do pátio até o packing. Mapeia o ENUM cor_contentor
//! do banco.

use serde::{Deserialize, Serialize};
use sqlx::Type;

/// Cor do contentor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "cor_contentor", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CorContentor {
    Vermelho,
    AzulMarinho,
    Verde,
    Amarelo,
    Branco,
    Laranja,
}

impl CorContentor {
    /// Todas as cores, na ordem fixa em que os painéis as exibem
    pub const TODAS: [CorContentor; 6] = [
        CorContentor::Vermelho,
        CorContentor::AzulMarinho,
        CorContentor::Verde,
        CorContentor::Amarelo,
        CorContentor::Branco,
        CorContentor::Laranja,
    ];

    /// Nome de exibição da cor
    pub fn nome(&self) -> &'static str {
        match self {
            CorContentor::Vermelho => "Vermelho",
            CorContentor::AzulMarinho => "Azul Marinho",
            CorContentor::Verde => "Verde",
            CorContentor::Amarelo => "Amarelo",
            CorContentor::Branco => "Branco",
            CorContentor::Laranja => "Laranja",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializa_no_formato_do_banco() {
        let json = serde_json::to_string(&CorContentor::AzulMarinho).unwrap();
        assert_eq!(json, "\"AZUL_MARINHO\"");

        let cor: CorContentor = serde_json::from_str("\"VERMELHO\"").unwrap();
        assert_eq!(cor, CorContentor::Vermelho);
    }

    #[test]
    fn nomes_de_exibicao() {
        assert_eq!(CorContentor::AzulMarinho.nome(), "Azul Marinho");
        assert_eq!(CorContentor::TODAS.len(), 6);
    }
}
