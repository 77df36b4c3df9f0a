//! Tratamento de erros da aplicação
//!
//! Define os tipos de erro do sistema e a conversão de cada um para a
//! resposta HTTP correspondente, sempre no envelope `{ "error": ... }`
//! que o frontend consome.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

/// Erros principais da aplicação
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro de banco de dados: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

/// Corpo de erro padrão da API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, mensagem) = match self {
            AppError::Database(e) => {
                error!("erro de banco de dados: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Erro de banco de dados: {}", e),
                )
            }

            AppError::Validation(e) => {
                warn!("erro de validação: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),

            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),

            AppError::Forbidden(msg) => {
                warn!("acesso negado: {}", msg);
                (StatusCode::FORBIDDEN, msg)
            }

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),

            AppError::Internal(msg) => {
                error!("erro interno: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse { error: mensagem })).into_response()
    }
}

/// Resultado tipado para operações que podem falhar
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_por_variante() {
        let casos = [
            (
                AppError::BadRequest("campo".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Unauthorized("token".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (AppError::Forbidden("perfil".into()), StatusCode::FORBIDDEN),
            (AppError::NotFound("recurso".into()), StatusCode::NOT_FOUND),
            (
                AppError::Internal("falha".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (erro, esperado) in casos {
            assert_eq!(erro.into_response().status(), esperado);
        }
    }

    #[test]
    fn erro_de_banco_vira_500() {
        let erro = AppError::Database(sqlx::Error::RowNotFound);
        assert_eq!(
            erro.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
