use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::simulacao_dto::{RegistrarUsoRequest, RegistroUsoResponse};
use crate::repositories::apontamento_repository::ApontamentoRepository;
use crate::repositories::packing_repository::PackingRepository;
use crate::utils::errors::AppError;

pub struct SimulacaoController {
    repository: PackingRepository,
    apontamentos: ApontamentoRepository,
}

impl SimulacaoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PackingRepository::new(pool.clone()),
            apontamentos: ApontamentoRepository::new(pool),
        }
    }

    /// Soma uso de contentores ao apontamento. O acumulado fica
    /// limitado à quantidade recebida; a resposta ecoa a quantidade
    /// pedida.
    pub async fn registrar_uso(
        &self,
        request: RegistrarUsoRequest,
    ) -> Result<RegistroUsoResponse, AppError> {
        let (apontamento_id, quantidade_usada) = match (
            request.apontamento_id,
            request.quantidade_usada.filter(|q| *q > 0),
        ) {
            (Some(id), Some(quantidade)) => (id, quantidade),
            _ => {
                return Err(AppError::BadRequest(
                    "apontamentoId e quantidadeUsada são obrigatórios".to_string(),
                ))
            }
        };

        let apontamento = self
            .apontamentos
            .buscar(apontamento_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Apontamento não encontrado".to_string()))?;

        let simulacao = self
            .repository
            .registrar_uso(
                apontamento_id,
                quantidade_usada,
                apontamento.quantidade_containers,
            )
            .await?;

        info!(
            "📦 Uso registrado no apontamento {}: acumulado {}/{}",
            apontamento_id, simulacao.quantidade_usada, apontamento.quantidade_containers
        );

        Ok(RegistroUsoResponse {
            success: true,
            message: "Uso simulado com sucesso".to_string(),
            apontamento_id,
            quantidade_usada,
        })
    }

    /// Zera o uso registrado do apontamento. Idempotente: sem registro
    /// de uso também responde sucesso.
    pub async fn remover_uso(&self, apontamento_id: Uuid) -> Result<(), AppError> {
        self.repository
            .deletar_por_apontamento(apontamento_id)
            .await?;
        Ok(())
    }
}
