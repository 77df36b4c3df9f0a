//! Estado compartilhado da aplicação
//!
//! Construído uma vez no start do processo e passado pelo router do
//! Axum; nenhum serviço lê configuração de estado global ambiente.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
