use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::usuario::{PerfilUsuario, Usuario};
use crate::utils::errors::AppError;

pub struct UsuarioRepository {
    pool: PgPool,
}

impl UsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(usuario)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(usuario)
    }

    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
        role: PerfilUsuario,
    ) -> Result<Usuario, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuarios (id, email, password, name, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .bind(role)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(usuario)
    }
}
