use bcrypt::verify;
use sqlx::PgPool;
use tracing::info;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, UsuarioResponse};
use crate::repositories::usuario_repository::UsuarioRepository;
use crate::services::jwt_service::JwtService;
use crate::utils::errors::AppError;

pub struct AuthController {
    repository: UsuarioRepository,
    jwt: JwtService,
}

impl AuthController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: UsuarioRepository::new(pool),
            jwt: JwtService::new(config),
        }
    }

    /// Autentica e devolve o token de sessão junto com o corpo da
    /// resposta. Credencial errada e conta inexistente respondem
    /// igual, sem distinguir o motivo.
    pub async fn login(&self, request: LoginRequest) -> Result<(String, LoginResponse), AppError> {
        let email = request.email.unwrap_or_default();
        let password = request.password.unwrap_or_default();

        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Email e senha são obrigatórios".to_string(),
            ));
        }

        let usuario = self
            .repository
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciais inválidas".to_string()))?;

        let senha_confere = verify(&password, &usuario.password)
            .map_err(|e| AppError::Internal(format!("Erro ao verificar senha: {}", e)))?;

        if !senha_confere {
            return Err(AppError::Unauthorized("Credenciais inválidas".to_string()));
        }

        let token = self
            .jwt
            .gerar_token(usuario.id, &usuario.email, usuario.role)?;

        info!("🔓 Login de {}", usuario.email);

        Ok((
            token,
            LoginResponse {
                user: UsuarioResponse::from(usuario),
                message: "Login realizado com sucesso".to_string(),
            },
        ))
    }
}
