use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::dto::apontamento_dto::{
    ApontamentoFiltro, AtualizarApontamentoRequest, CriarApontamentoRequest,
};
use crate::models::apontamento::{Apontamento, ApontamentoDetalhe};
use crate::models::cor::CorContentor;
use crate::repositories::apontamento_repository::ApontamentoRepository;
use crate::repositories::cadastro_repository::CadastroRepository;
use crate::utils::errors::AppError;
use crate::utils::tempo;

/// Contentores de um pallet completo, usado quando a quantidade não
/// vem no request
const QUANTIDADE_PADRAO_PALLET: i32 = 168;

/// Limite padrão e teto da listagem
const LIMITE_PADRAO: i64 = 100;
const LIMITE_MAXIMO: i64 = 500;

/// Campos validados de um request de apontamento
struct CamposApontamento {
    numero_carroca: i32,
    numero_pallet: i32,
    cabecal_id: Uuid,
    valvula_id: Uuid,
    variedade_id: Uuid,
    quantidade_containers: i32,
}

pub struct ApontamentoController {
    repository: ApontamentoRepository,
    cadastros: CadastroRepository,
    fuso_horario_offset: i32,
}

impl ApontamentoController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: ApontamentoRepository::new(pool.clone()),
            cadastros: CadastroRepository::new(pool),
            fuso_horario_offset: config.fuso_horario_offset,
        }
    }

    pub async fn listar(
        &self,
        filtro: ApontamentoFiltro,
    ) -> Result<Vec<ApontamentoDetalhe>, AppError> {
        let periodo = filtro
            .data
            .map(|data| tempo::limites_do_dia(data, self.fuso_horario_offset));
        let limite = filtro
            .limite
            .unwrap_or(LIMITE_PADRAO)
            .clamp(1, LIMITE_MAXIMO);

        self.repository
            .listar(periodo, filtro.cor, filtro.cabecal, limite)
            .await
    }

    pub async fn buscar(&self, id: Uuid) -> Result<ApontamentoDetalhe, AppError> {
        self.repository
            .buscar_detalhe(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Apontamento não encontrado".to_string()))
    }

    pub async fn criar(
        &self,
        request: CriarApontamentoRequest,
    ) -> Result<Apontamento, AppError> {
        let campos = validar_campos(
            request.numero_carroca,
            request.numero_pallet,
            request.cabecal_id,
            request.valvula_id,
            request.variedade_id,
            request.quantidade_containers,
        )?;

        // A cor vem sempre da válvula, ignorando qualquer valor do request
        let cor = self
            .cor_da_valvula(campos.valvula_id, campos.cabecal_id)
            .await?;

        let apontamento = self
            .repository
            .criar(
                campos.numero_carroca,
                campos.numero_pallet,
                campos.cabecal_id,
                campos.valvula_id,
                campos.variedade_id,
                campos.quantidade_containers,
                cor,
            )
            .await?;

        info!(
            "📝 Apontamento criado: carroça {} pallet {} ({} contentores)",
            apontamento.numero_carroca, apontamento.numero_pallet,
            apontamento.quantidade_containers
        );

        Ok(apontamento)
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        request: AtualizarApontamentoRequest,
    ) -> Result<ApontamentoDetalhe, AppError> {
        let campos = validar_campos(
            request.numero_carroca,
            request.numero_pallet,
            request.cabecal_id,
            request.valvula_id,
            request.variedade_id,
            request.quantidade_containers,
        )?;

        let cor = self
            .cor_da_valvula(campos.valvula_id, campos.cabecal_id)
            .await?;

        let atualizado = self
            .repository
            .atualizar(
                id,
                campos.numero_carroca,
                campos.numero_pallet,
                campos.cabecal_id,
                campos.valvula_id,
                campos.variedade_id,
                campos.quantidade_containers,
                cor,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Apontamento não encontrado".to_string()))?;

        self.buscar(atualizado.id).await
    }

    pub async fn deletar(&self, id: Uuid) -> Result<(), AppError> {
        let removido = self.repository.deletar_com_dependencias(id).await?;
        if !removido {
            return Err(AppError::NotFound("Apontamento não encontrado".to_string()));
        }

        info!("🗑️ Apontamento {} removido", id);
        Ok(())
    }

    /// Confere o vínculo válvula-cabeçal e devolve a cor vigente da
    /// válvula
    async fn cor_da_valvula(
        &self,
        valvula_id: Uuid,
        cabecal_id: Uuid,
    ) -> Result<CorContentor, AppError> {
        let valvula = self.cadastros.buscar_valvula(valvula_id).await?;

        match valvula {
            Some(valvula) if valvula.cabecal_id == cabecal_id => Ok(valvula.cor),
            _ => Err(AppError::BadRequest(
                "Válvula não pertence ao cabeçal selecionado".to_string(),
            )),
        }
    }
}

fn validar_campos(
    numero_carroca: Option<i32>,
    numero_pallet: Option<i32>,
    cabecal_id: Option<Uuid>,
    valvula_id: Option<Uuid>,
    variedade_id: Option<Uuid>,
    quantidade_containers: Option<i32>,
) -> Result<CamposApontamento, AppError> {
    let obrigatorios = (
        numero_carroca.filter(|n| *n > 0),
        numero_pallet.filter(|n| *n > 0),
        cabecal_id,
        valvula_id,
        variedade_id,
    );

    let (numero_carroca, numero_pallet, cabecal_id, valvula_id, variedade_id) = match obrigatorios {
        (Some(carroca), Some(pallet), Some(cabecal), Some(valvula), Some(variedade)) => {
            (carroca, pallet, cabecal, valvula, variedade)
        }
        _ => {
            return Err(AppError::BadRequest(
                "Todos os campos são obrigatórios".to_string(),
            ))
        }
    };

    let quantidade_containers = match quantidade_containers {
        Some(quantidade) if quantidade > 0 => quantidade,
        Some(_) => {
            return Err(AppError::BadRequest(
                "Todos os campos são obrigatórios".to_string(),
            ))
        }
        None => QUANTIDADE_PADRAO_PALLET,
    };

    Ok(CamposApontamento {
        numero_carroca,
        numero_pallet,
        cabecal_id,
        valvula_id,
        variedade_id,
        quantidade_containers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantidade_omitida_vira_pallet_completo() {
        let campos = validar_campos(
            Some(1),
            Some(2),
            Some(Uuid::new_v4()),
            Some(Uuid::new_v4()),
            Some(Uuid::new_v4()),
            None,
        )
        .unwrap();
        assert_eq!(campos.quantidade_containers, QUANTIDADE_PADRAO_PALLET);
    }

    #[test]
    fn campo_faltando_e_rejeitado() {
        let resultado = validar_campos(
            Some(1),
            None,
            Some(Uuid::new_v4()),
            Some(Uuid::new_v4()),
            Some(Uuid::new_v4()),
            Some(10),
        );
        assert!(matches!(resultado, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn quantidades_nao_positivas_sao_rejeitadas() {
        let resultado = validar_campos(
            Some(0),
            Some(2),
            Some(Uuid::new_v4()),
            Some(Uuid::new_v4()),
            Some(Uuid::new_v4()),
            Some(10),
        );
        assert!(resultado.is_err());

        let resultado = validar_campos(
            Some(1),
            Some(2),
            Some(Uuid::new_v4()),
            Some(Uuid::new_v4()),
            Some(Uuid::new_v4()),
            Some(0),
        );
        assert!(resultado.is_err());
    }
}
