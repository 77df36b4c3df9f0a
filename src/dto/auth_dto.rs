use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::usuario::{PerfilUsuario, Usuario};

// Request de login; os campos são checados no controller para manter
// a mensagem de erro do formulário
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// Usuário como sai pela API, sem o hash de senha
#[derive(Debug, Clone, Serialize)]
pub struct UsuarioResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: PerfilUsuario,
}

impl From<Usuario> for UsuarioResponse {
    fn from(usuario: Usuario) -> Self {
        Self {
            id: usuario.id,
            email: usuario.email,
            name: usuario.name,
            role: usuario.role,
        }
    }
}

// Response de login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UsuarioResponse,
    pub message: String,
}
