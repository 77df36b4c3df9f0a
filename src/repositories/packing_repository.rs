use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::packing::PackingSimulacao;
use crate::utils::errors::AppError;

pub struct PackingRepository {
    pool: PgPool,
}

impl PackingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Soma `quantidade` ao uso acumulado do apontamento, limitado ao
    /// teto informado. O clamp acontece no próprio comando para que
    /// registros concorrentes nunca estourem o teto.
    pub async fn registrar_uso(
        &self,
        apontamento_id: Uuid,
        quantidade: i32,
        teto: i32,
    ) -> Result<PackingSimulacao, AppError> {
        let agora = Utc::now();

        let simulacao = sqlx::query_as::<_, PackingSimulacao>(
            r#"
            INSERT INTO packing_simulacoes (id, apontamento_id, quantidade_usada, created_at, updated_at)
            VALUES ($1, $2, LEAST($3, $4), $5, $5)
            ON CONFLICT (apontamento_id)
            DO UPDATE SET quantidade_usada = LEAST(packing_simulacoes.quantidade_usada + $3, $4),
                          updated_at = $5
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(apontamento_id)
        .bind(quantidade)
        .bind(teto)
        .bind(agora)
        .fetch_one(&self.pool)
        .await?;

        Ok(simulacao)
    }

    /// Zera o uso do apontamento. Sem registro de uso não é erro.
    pub async fn deletar_por_apontamento(&self, apontamento_id: Uuid) -> Result<u64, AppError> {
        let resultado = sqlx::query("DELETE FROM packing_simulacoes WHERE apontamento_id = $1")
            .bind(apontamento_id)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected())
    }
}
