use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::cor::CorContentor;
use crate::utils::errors::AppError;

// Linhas agregadas que alimentam os cálculos dos painéis. As queries
// devolvem o mínimo que o serviço precisa; a aritmética fica fora.

/// Total de contentores de uma cor
#[derive(Debug, sqlx::FromRow)]
pub struct TotalPorCorRow {
    pub cor: CorContentor,
    pub total: i64,
}

/// Apontamento do dia com o resumo de amostras e uso
#[derive(Debug, sqlx::FromRow)]
pub struct PesoApontamentoRow {
    pub quantidade_containers: i32,
    pub quantidade_usada: i32,
    pub num_amostras: i64,
    pub soma_pesos: f64,
}

/// Apontamento do dia com os nomes usados nos agrupamentos
#[derive(Debug, sqlx::FromRow)]
pub struct ApontamentoDoDiaRow {
    pub created_at: DateTime<Utc>,
    pub numero_carroca: i32,
    pub numero_pallet: i32,
    pub cabecal_nome: String,
    pub valvula_nome: String,
    pub quantidade_containers: i32,
}

pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Soma de contentores recebidos a partir de `de`
    pub async fn somar_containers(&self, de: DateTime<Utc>) -> Result<i64, AppError> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(quantidade_containers), 0)::BIGINT
            FROM apontamentos
            WHERE created_at >= $1
            "#,
        )
        .bind(de)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    /// Contentores recebidos por cor em `[de, ate)`; `ate` aberto fica
    /// sem limite superior
    pub async fn recebido_por_cor(
        &self,
        de: DateTime<Utc>,
        ate: Option<DateTime<Utc>>,
    ) -> Result<Vec<TotalPorCorRow>, AppError> {
        let totais = sqlx::query_as::<_, TotalPorCorRow>(
            r#"
            SELECT cor, SUM(quantidade_containers)::BIGINT AS total
            FROM apontamentos
            WHERE created_at >= $1
              AND ($2::timestamptz IS NULL OR created_at < $2)
            GROUP BY cor
            "#,
        )
        .bind(de)
        .bind(ate)
        .fetch_all(&self.pool)
        .await?;

        Ok(totais)
    }

    /// Uso acumulado de packing por cor, para apontamentos registrados
    /// a partir de `de`
    pub async fn usado_por_cor(&self, de: DateTime<Utc>) -> Result<Vec<TotalPorCorRow>, AppError> {
        let totais = sqlx::query_as::<_, TotalPorCorRow>(
            r#"
            SELECT a.cor, SUM(p.quantidade_usada)::BIGINT AS total
            FROM packing_simulacoes p
            JOIN apontamentos a ON a.id = p.apontamento_id
            WHERE a.created_at >= $1
            GROUP BY a.cor
            "#,
        )
        .bind(de)
        .fetch_all(&self.pool)
        .await?;

        Ok(totais)
    }

    /// Apontamentos do dia com contagem e soma das amostras de cada um
    pub async fn pesos_do_dia(
        &self,
        de: DateTime<Utc>,
    ) -> Result<Vec<PesoApontamentoRow>, AppError> {
        let linhas = sqlx::query_as::<_, PesoApontamentoRow>(
            r#"
            SELECT a.quantidade_containers,
                   COALESCE(p.quantidade_usada, 0) AS quantidade_usada,
                   COUNT(m.id) AS num_amostras,
                   COALESCE(SUM(m.peso_amostra), 0)::DOUBLE PRECISION AS soma_pesos
            FROM apontamentos a
            LEFT JOIN packing_simulacoes p ON p.apontamento_id = a.id
            LEFT JOIN amostras_peso m ON m.apontamento_id = a.id AND m.created_at >= $1
            WHERE a.created_at >= $1
            GROUP BY a.id, p.quantidade_usada
            "#,
        )
        .bind(de)
        .fetch_all(&self.pool)
        .await?;

        Ok(linhas)
    }

    /// Apontamentos do dia com os nomes de cabeçal e válvula
    pub async fn apontamentos_do_dia(
        &self,
        de: DateTime<Utc>,
    ) -> Result<Vec<ApontamentoDoDiaRow>, AppError> {
        let linhas = sqlx::query_as::<_, ApontamentoDoDiaRow>(
            r#"
            SELECT a.created_at, a.numero_carroca, a.numero_pallet,
                   c.nome AS cabecal_nome, v.nome AS valvula_nome,
                   a.quantidade_containers
            FROM apontamentos a
            JOIN cabecais c ON c.id = a.cabecal_id
            JOIN valvulas v ON v.id = a.valvula_id
            WHERE a.created_at >= $1
            ORDER BY a.created_at ASC
            "#,
        )
        .bind(de)
        .fetch_all(&self.pool)
        .await?;

        Ok(linhas)
    }
}
