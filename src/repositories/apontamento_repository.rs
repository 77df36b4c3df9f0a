use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::apontamento::{Apontamento, ApontamentoDetalhe};
use crate::models::cor::CorContentor;
use crate::utils::errors::AppError;

pub struct ApontamentoRepository {
    pool: PgPool,
}

impl ApontamentoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listagem com nomes das referências, uso acumulado e peso
    /// estimado. Filtros opcionais por período, cor e cabeçal.
    pub async fn listar(
        &self,
        periodo: Option<(DateTime<Utc>, DateTime<Utc>)>,
        cor: Option<CorContentor>,
        cabecal_id: Option<Uuid>,
        limite: i64,
    ) -> Result<Vec<ApontamentoDetalhe>, AppError> {
        let (inicio, fim) = match periodo {
            Some((inicio, fim)) => (Some(inicio), Some(fim)),
            None => (None, None),
        };

        let apontamentos = sqlx::query_as::<_, ApontamentoDetalhe>(
            r#"
            SELECT a.id, a.numero_carroca, a.numero_pallet,
                   a.cabecal_id, c.nome AS cabecal_nome,
                   a.valvula_id, v.nome AS valvula_nome,
                   a.variedade_id, vr.nome AS variedade_nome,
                   a.quantidade_containers,
                   COALESCE(p.quantidade_usada, 0) AS quantidade_usada,
                   a.cor,
                   AVG(m.peso_amostra) * a.quantidade_containers AS peso_kg,
                   a.created_at
            FROM apontamentos a
            JOIN cabecais c ON c.id = a.cabecal_id
            JOIN valvulas v ON v.id = a.valvula_id
            JOIN variedades vr ON vr.id = a.variedade_id
            LEFT JOIN packing_simulacoes p ON p.apontamento_id = a.id
            LEFT JOIN amostras_peso m ON m.apontamento_id = a.id
            WHERE ($1::timestamptz IS NULL OR (a.created_at >= $1 AND a.created_at < $2))
              AND ($3::cor_contentor IS NULL OR a.cor = $3)
              AND ($4::uuid IS NULL OR a.cabecal_id = $4)
            GROUP BY a.id, c.nome, v.nome, vr.nome, p.quantidade_usada
            ORDER BY a.created_at DESC
            LIMIT $5
            "#,
        )
        .bind(inicio)
        .bind(fim)
        .bind(cor)
        .bind(cabecal_id)
        .bind(limite)
        .fetch_all(&self.pool)
        .await?;

        Ok(apontamentos)
    }

    pub async fn buscar(&self, id: Uuid) -> Result<Option<Apontamento>, AppError> {
        let apontamento =
            sqlx::query_as::<_, Apontamento>("SELECT * FROM apontamentos WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(apontamento)
    }

    pub async fn buscar_detalhe(&self, id: Uuid) -> Result<Option<ApontamentoDetalhe>, AppError> {
        let apontamento = sqlx::query_as::<_, ApontamentoDetalhe>(
            r#"
            SELECT a.id, a.numero_carroca, a.numero_pallet,
                   a.cabecal_id, c.nome AS cabecal_nome,
                   a.valvula_id, v.nome AS valvula_nome,
                   a.variedade_id, vr.nome AS variedade_nome,
                   a.quantidade_containers,
                   COALESCE(p.quantidade_usada, 0) AS quantidade_usada,
                   a.cor,
                   AVG(m.peso_amostra) * a.quantidade_containers AS peso_kg,
                   a.created_at
            FROM apontamentos a
            JOIN cabecais c ON c.id = a.cabecal_id
            JOIN valvulas v ON v.id = a.valvula_id
            JOIN variedades vr ON vr.id = a.variedade_id
            LEFT JOIN packing_simulacoes p ON p.apontamento_id = a.id
            LEFT JOIN amostras_peso m ON m.apontamento_id = a.id
            WHERE a.id = $1
            GROUP BY a.id, c.nome, v.nome, vr.nome, p.quantidade_usada
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(apontamento)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn criar(
        &self,
        numero_carroca: i32,
        numero_pallet: i32,
        cabecal_id: Uuid,
        valvula_id: Uuid,
        variedade_id: Uuid,
        quantidade_containers: i32,
        cor: CorContentor,
    ) -> Result<Apontamento, AppError> {
        let apontamento = sqlx::query_as::<_, Apontamento>(
            r#"
            INSERT INTO apontamentos (id, numero_carroca, numero_pallet, cabecal_id,
                                      valvula_id, variedade_id, quantidade_containers, cor, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(numero_carroca)
        .bind(numero_pallet)
        .bind(cabecal_id)
        .bind(valvula_id)
        .bind(variedade_id)
        .bind(quantidade_containers)
        .bind(cor)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(apontamento)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn atualizar(
        &self,
        id: Uuid,
        numero_carroca: i32,
        numero_pallet: i32,
        cabecal_id: Uuid,
        valvula_id: Uuid,
        variedade_id: Uuid,
        quantidade_containers: i32,
        cor: CorContentor,
    ) -> Result<Option<Apontamento>, AppError> {
        let apontamento = sqlx::query_as::<_, Apontamento>(
            r#"
            UPDATE apontamentos
            SET numero_carroca = $2, numero_pallet = $3, cabecal_id = $4,
                valvula_id = $5, variedade_id = $6, quantidade_containers = $7, cor = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(numero_carroca)
        .bind(numero_pallet)
        .bind(cabecal_id)
        .bind(valvula_id)
        .bind(variedade_id)
        .bind(quantidade_containers)
        .bind(cor)
        .fetch_optional(&self.pool)
        .await?;

        Ok(apontamento)
    }

    /// Remove o apontamento junto com as amostras e o registro de uso
    /// que apontam para ele, numa transação só. Retorna false quando o
    /// apontamento não existe.
    pub async fn deletar_com_dependencias(&self, id: Uuid) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM amostras_peso WHERE apontamento_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM packing_simulacoes WHERE apontamento_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let resultado = sqlx::query("DELETE FROM apontamentos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(resultado.rows_affected() > 0)
    }
}
