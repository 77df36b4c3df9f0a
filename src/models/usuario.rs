//! Modelo de usuário
//!
//! Usuários do sistema e seus perfis de acesso. O hash bcrypt fica na
//! coluna password e nunca sai pela API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Perfil de acesso - mapeia o ENUM perfil_usuario do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "perfil_usuario", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum PerfilUsuario {
    Diretor,
    Analista,
    Inspetor,
    Operador,
}

impl PerfilUsuario {
    /// Perfis com acesso aos painéis e às telas de cadastro
    pub fn e_elevado(&self) -> bool {
        matches!(
            self,
            PerfilUsuario::Diretor | PerfilUsuario::Analista | PerfilUsuario::Inspetor
        )
    }
}

/// Usuário - mapeia exatamente a tabela usuarios
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: PerfilUsuario,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operador_nao_e_elevado() {
        assert!(PerfilUsuario::Diretor.e_elevado());
        assert!(PerfilUsuario::Analista.e_elevado());
        assert!(PerfilUsuario::Inspetor.e_elevado());
        assert!(!PerfilUsuario::Operador.e_elevado());
    }

    #[test]
    fn perfil_serializa_em_maiusculas() {
        let json = serde_json::to_string(&PerfilUsuario::Diretor).unwrap();
        assert_eq!(json, "\"DIRETOR\"");
    }
}
