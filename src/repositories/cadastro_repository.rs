use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::cadastro::{Cabecal, Embaladeira, LinhaProducao, Posicao, Valvula, Variedade};
use crate::models::cor::CorContentor;
use crate::utils::errors::AppError;

// Acesso às tabelas de cadastro de apoio. São todas pequenas e de
// leitura frequente, então as listagens vêm inteiras e ordenadas.
pub struct CadastroRepository {
    pool: PgPool,
}

impl CadastroRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar_cabecais(&self) -> Result<Vec<Cabecal>, AppError> {
        let cabecais =
            sqlx::query_as::<_, Cabecal>("SELECT * FROM cabecais ORDER BY nome ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(cabecais)
    }

    pub async fn buscar_cabecal(&self, id: Uuid) -> Result<Option<Cabecal>, AppError> {
        let cabecal = sqlx::query_as::<_, Cabecal>("SELECT * FROM cabecais WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cabecal)
    }

    pub async fn criar_cabecal(
        &self,
        nome: &str,
        descricao: Option<&str>,
    ) -> Result<Cabecal, AppError> {
        let cabecal = sqlx::query_as::<_, Cabecal>(
            r#"
            INSERT INTO cabecais (id, nome, descricao, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nome)
        .bind(descricao)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(cabecal)
    }

    pub async fn listar_valvulas_do_cabecal(
        &self,
        cabecal_id: Uuid,
    ) -> Result<Vec<Valvula>, AppError> {
        let valvulas = sqlx::query_as::<_, Valvula>(
            "SELECT * FROM valvulas WHERE cabecal_id = $1 ORDER BY nome ASC",
        )
        .bind(cabecal_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(valvulas)
    }

    pub async fn buscar_valvula(&self, id: Uuid) -> Result<Option<Valvula>, AppError> {
        let valvula = sqlx::query_as::<_, Valvula>("SELECT * FROM valvulas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(valvula)
    }

    pub async fn criar_valvula(
        &self,
        nome: &str,
        descricao: Option<&str>,
        cor: CorContentor,
        cabecal_id: Uuid,
    ) -> Result<Valvula, AppError> {
        let valvula = sqlx::query_as::<_, Valvula>(
            r#"
            INSERT INTO valvulas (id, nome, descricao, cor, cabecal_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nome)
        .bind(descricao)
        .bind(cor)
        .bind(cabecal_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(valvula)
    }

    pub async fn listar_variedades(&self) -> Result<Vec<Variedade>, AppError> {
        let variedades =
            sqlx::query_as::<_, Variedade>("SELECT * FROM variedades ORDER BY nome ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(variedades)
    }

    pub async fn criar_variedade(
        &self,
        nome: &str,
        descricao: Option<&str>,
    ) -> Result<Variedade, AppError> {
        let variedade = sqlx::query_as::<_, Variedade>(
            r#"
            INSERT INTO variedades (id, nome, descricao, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nome)
        .bind(descricao)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(variedade)
    }

    pub async fn listar_linhas_producao(&self) -> Result<Vec<LinhaProducao>, AppError> {
        let linhas = sqlx::query_as::<_, LinhaProducao>(
            "SELECT * FROM linhas_producao ORDER BY letra ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(linhas)
    }

    pub async fn criar_linha_producao(
        &self,
        letra: &str,
        descricao: Option<&str>,
    ) -> Result<LinhaProducao, AppError> {
        let linha = sqlx::query_as::<_, LinhaProducao>(
            r#"
            INSERT INTO linhas_producao (id, letra, descricao, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(letra)
        .bind(descricao)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(linha)
    }

    pub async fn listar_posicoes(&self) -> Result<Vec<Posicao>, AppError> {
        let posicoes =
            sqlx::query_as::<_, Posicao>("SELECT * FROM posicoes ORDER BY posicao ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(posicoes)
    }

    pub async fn criar_posicao(
        &self,
        posicao: &str,
        descricao: Option<&str>,
    ) -> Result<Posicao, AppError> {
        let registro = sqlx::query_as::<_, Posicao>(
            r#"
            INSERT INTO posicoes (id, posicao, descricao, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(posicao)
        .bind(descricao)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(registro)
    }

    pub async fn listar_embaladeiras(&self) -> Result<Vec<Embaladeira>, AppError> {
        let embaladeiras =
            sqlx::query_as::<_, Embaladeira>("SELECT * FROM embaladeiras ORDER BY nome ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(embaladeiras)
    }

    pub async fn criar_embaladeira(&self, nome: &str) -> Result<Embaladeira, AppError> {
        let embaladeira = sqlx::query_as::<_, Embaladeira>(
            r#"
            INSERT INTO embaladeiras (id, nome, created_at)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nome)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(embaladeira)
    }
}
