use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::amostra_peso::{AmostraPeso, AmostraPesoDetalhe};
use crate::utils::errors::AppError;

pub struct AmostraPesoRepository {
    pool: PgPool,
}

impl AmostraPesoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insere um lote de pesagens numa transação: ou entram todas ou
    /// nenhuma.
    pub async fn criar_lote(
        &self,
        pesos: &[f64],
        apontamento_id: Option<Uuid>,
    ) -> Result<Vec<AmostraPeso>, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut amostras = Vec::with_capacity(pesos.len());

        for &peso in pesos {
            let amostra = sqlx::query_as::<_, AmostraPeso>(
                r#"
                INSERT INTO amostras_peso (id, peso_amostra, apontamento_id, created_at)
                VALUES ($1, $2, $3, $4)
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(peso)
            .bind(apontamento_id)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await?;

            amostras.push(amostra);
        }

        tx.commit().await?;

        Ok(amostras)
    }

    /// Listagem com o contexto do apontamento; amostras avulsas saem
    /// com os campos de contexto vazios.
    pub async fn listar(
        &self,
        periodo: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<Vec<AmostraPesoDetalhe>, AppError> {
        let (inicio, fim) = match periodo {
            Some((inicio, fim)) => (Some(inicio), Some(fim)),
            None => (None, None),
        };

        let amostras = sqlx::query_as::<_, AmostraPesoDetalhe>(
            r#"
            SELECT m.id, m.peso_amostra, m.apontamento_id,
                   a.numero_pallet, c.nome AS cabecal_nome, v.nome AS valvula_nome,
                   a.cor, m.created_at
            FROM amostras_peso m
            LEFT JOIN apontamentos a ON a.id = m.apontamento_id
            LEFT JOIN cabecais c ON c.id = a.cabecal_id
            LEFT JOIN valvulas v ON v.id = a.valvula_id
            WHERE ($1::timestamptz IS NULL OR (m.created_at >= $1 AND m.created_at < $2))
            ORDER BY m.created_at DESC
            "#,
        )
        .bind(inicio)
        .bind(fim)
        .fetch_all(&self.pool)
        .await?;

        Ok(amostras)
    }

    /// Retorna false quando a amostra não existe
    pub async fn deletar(&self, id: Uuid) -> Result<bool, AppError> {
        let resultado = sqlx::query("DELETE FROM amostras_peso WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected() > 0)
    }
}
