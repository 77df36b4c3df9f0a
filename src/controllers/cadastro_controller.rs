use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::cadastro_dto::{
    CriarCabecalRequest, CriarEmbaladeiraRequest, CriarLinhaProducaoRequest, CriarPosicaoRequest,
    CriarValvulaRequest, CriarVariedadeRequest,
};
use crate::models::cadastro::{Cabecal, Embaladeira, LinhaProducao, Posicao, Valvula, Variedade};
use crate::models::cor::CorContentor;
use crate::repositories::cadastro_repository::CadastroRepository;
use crate::utils::errors::AppError;

pub struct CadastroController {
    repository: CadastroRepository,
}

impl CadastroController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CadastroRepository::new(pool),
        }
    }

    pub async fn listar_cabecais(&self) -> Result<Vec<Cabecal>, AppError> {
        self.repository.listar_cabecais().await
    }

    pub async fn criar_cabecal(&self, request: CriarCabecalRequest) -> Result<Cabecal, AppError> {
        request.validate()?;
        let nome = request.nome.unwrap_or_default();

        self.repository
            .criar_cabecal(nome.trim(), request.descricao.as_deref())
            .await
    }

    pub async fn listar_valvulas(&self, cabecal_id: Uuid) -> Result<Vec<Valvula>, AppError> {
        self.repository.listar_valvulas_do_cabecal(cabecal_id).await
    }

    pub async fn criar_valvula(&self, request: CriarValvulaRequest) -> Result<Valvula, AppError> {
        request.validate()?;
        let nome = request.nome.unwrap_or_default();
        let cor = request.cor.unwrap_or(CorContentor::Vermelho);
        let cabecal_id = request.cabecal_id.unwrap_or_default();

        // O cabeçal precisa existir antes de pendurar válvulas nele
        self.repository
            .buscar_cabecal(cabecal_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cabeçal não encontrado".to_string()))?;

        self.repository
            .criar_valvula(nome.trim(), request.descricao.as_deref(), cor, cabecal_id)
            .await
    }

    pub async fn listar_variedades(&self) -> Result<Vec<Variedade>, AppError> {
        self.repository.listar_variedades().await
    }

    pub async fn criar_variedade(
        &self,
        request: CriarVariedadeRequest,
    ) -> Result<Variedade, AppError> {
        request.validate()?;
        let nome = request.nome.unwrap_or_default();

        self.repository
            .criar_variedade(nome.trim(), request.descricao.as_deref())
            .await
    }

    pub async fn listar_linhas_producao(&self) -> Result<Vec<LinhaProducao>, AppError> {
        self.repository.listar_linhas_producao().await
    }

    pub async fn criar_linha_producao(
        &self,
        request: CriarLinhaProducaoRequest,
    ) -> Result<LinhaProducao, AppError> {
        request.validate()?;
        // A letra da linha é sempre armazenada em maiúscula
        let letra = request.letra.unwrap_or_default().trim().to_uppercase();

        self.repository
            .criar_linha_producao(&letra, request.descricao.as_deref())
            .await
    }

    pub async fn listar_posicoes(&self) -> Result<Vec<Posicao>, AppError> {
        self.repository.listar_posicoes().await
    }

    pub async fn criar_posicao(&self, request: CriarPosicaoRequest) -> Result<Posicao, AppError> {
        request.validate()?;
        let posicao = request.posicao.unwrap_or_default();

        self.repository
            .criar_posicao(posicao.trim(), request.descricao.as_deref())
            .await
    }

    pub async fn listar_embaladeiras(&self) -> Result<Vec<Embaladeira>, AppError> {
        self.repository.listar_embaladeiras().await
    }

    pub async fn criar_embaladeira(
        &self,
        request: CriarEmbaladeiraRequest,
    ) -> Result<Embaladeira, AppError> {
        request.validate()?;
        let nome = request.nome.unwrap_or_default();

        self.repository.criar_embaladeira(nome.trim()).await
    }
}
