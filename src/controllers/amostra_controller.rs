use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::dto::amostra_dto::{AmostraFiltro, AmostrasCriadasResponse, CriarAmostrasRequest};
use crate::models::amostra_peso::AmostraPesoDetalhe;
use crate::repositories::amostra_peso_repository::AmostraPesoRepository;
use crate::repositories::apontamento_repository::ApontamentoRepository;
use crate::utils::errors::AppError;
use crate::utils::tempo;

pub struct AmostraController {
    repository: AmostraPesoRepository,
    apontamentos: ApontamentoRepository,
    fuso_horario_offset: i32,
}

impl AmostraController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: AmostraPesoRepository::new(pool.clone()),
            apontamentos: ApontamentoRepository::new(pool),
            fuso_horario_offset: config.fuso_horario_offset,
        }
    }

    /// Registra um lote de pesagens. Pesos não positivos são
    /// descartados em silêncio; o lote só é rejeitado quando não
    /// sobra nenhum válido.
    pub async fn criar_lote(
        &self,
        request: CriarAmostrasRequest,
    ) -> Result<AmostrasCriadasResponse, AppError> {
        let pesos = request.pesos.unwrap_or_default();
        if pesos.is_empty() {
            return Err(AppError::BadRequest(
                "É necessário fornecer pelo menos um peso".to_string(),
            ));
        }

        let validos: Vec<f64> = pesos.into_iter().filter(|peso| *peso > 0.0).collect();
        if validos.is_empty() {
            return Err(AppError::BadRequest(
                "Todos os pesos devem ser números positivos".to_string(),
            ));
        }

        if let Some(apontamento_id) = request.apontamento_id {
            self.apontamentos
                .buscar(apontamento_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Apontamento não encontrado".to_string()))?;
        }

        let amostras = self
            .repository
            .criar_lote(&validos, request.apontamento_id)
            .await?;

        let peso_medio = validos.iter().sum::<f64>() / validos.len() as f64;

        info!(
            "⚖️ {} amostras registradas, média {:.3} kg",
            validos.len(),
            peso_medio
        );

        Ok(AmostrasCriadasResponse {
            amostras,
            peso_medio,
            quantidade_amostras: validos.len(),
        })
    }

    pub async fn listar(
        &self,
        filtro: AmostraFiltro,
    ) -> Result<Vec<AmostraPesoDetalhe>, AppError> {
        let periodo = filtro
            .data
            .map(|data| tempo::limites_do_dia(data, self.fuso_horario_offset));

        self.repository.listar(periodo).await
    }

    pub async fn deletar(&self, id: Uuid) -> Result<(), AppError> {
        let removida = self.repository.deletar(id).await?;
        if !removida {
            return Err(AppError::NotFound("Amostra não encontrada".to_string()));
        }
        Ok(())
    }
}
