use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::cadastro_controller::CadastroController;
use crate::dto::cadastro_dto::{
    CriarCabecalRequest, CriarEmbaladeiraRequest, CriarLinhaProducaoRequest, CriarPosicaoRequest,
    CriarValvulaRequest, CriarVariedadeRequest,
};
use crate::models::cadastro::{Cabecal, Embaladeira, LinhaProducao, Posicao, Valvula, Variedade};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cadastro_router() -> Router<AppState> {
    Router::new()
        .route("/cabecais", get(listar_cabecais))
        .route("/cabecais", post(criar_cabecal))
        .route("/valvulas", post(criar_valvula))
        .route("/valvulas/:cabecal_id", get(listar_valvulas))
        .route("/variedades", get(listar_variedades))
        .route("/variedades", post(criar_variedade))
        .route("/linhas-producao", get(listar_linhas_producao))
        .route("/linhas-producao", post(criar_linha_producao))
        .route("/posicoes", get(listar_posicoes))
        .route("/posicoes", post(criar_posicao))
        .route("/embaladeiras", get(listar_embaladeiras))
        .route("/embaladeiras", post(criar_embaladeira))
}

async fn listar_cabecais(
    State(state): State<AppState>,
) -> Result<Json<Vec<Cabecal>>, AppError> {
    let controller = CadastroController::new(state.pool.clone());
    Ok(Json(controller.listar_cabecais().await?))
}

async fn criar_cabecal(
    State(state): State<AppState>,
    Json(request): Json<CriarCabecalRequest>,
) -> Result<(StatusCode, Json<Cabecal>), AppError> {
    let controller = CadastroController::new(state.pool.clone());
    let cabecal = controller.criar_cabecal(request).await?;
    Ok((StatusCode::CREATED, Json(cabecal)))
}

async fn listar_valvulas(
    State(state): State<AppState>,
    Path(cabecal_id): Path<Uuid>,
) -> Result<Json<Vec<Valvula>>, AppError> {
    let controller = CadastroController::new(state.pool.clone());
    Ok(Json(controller.listar_valvulas(cabecal_id).await?))
}

async fn criar_valvula(
    State(state): State<AppState>,
    Json(request): Json<CriarValvulaRequest>,
) -> Result<(StatusCode, Json<Valvula>), AppError> {
    let controller = CadastroController::new(state.pool.clone());
    let valvula = controller.criar_valvula(request).await?;
    Ok((StatusCode::CREATED, Json(valvula)))
}

async fn listar_variedades(
    State(state): State<AppState>,
) -> Result<Json<Vec<Variedade>>, AppError> {
    let controller = CadastroController::new(state.pool.clone());
    Ok(Json(controller.listar_variedades().await?))
}

async fn criar_variedade(
    State(state): State<AppState>,
    Json(request): Json<CriarVariedadeRequest>,
) -> Result<(StatusCode, Json<Variedade>), AppError> {
    let controller = CadastroController::new(state.pool.clone());
    let variedade = controller.criar_variedade(request).await?;
    Ok((StatusCode::CREATED, Json(variedade)))
}

async fn listar_linhas_producao(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinhaProducao>>, AppError> {
    let controller = CadastroController::new(state.pool.clone());
    Ok(Json(controller.listar_linhas_producao().await?))
}

async fn criar_linha_producao(
    State(state): State<AppState>,
    Json(request): Json<CriarLinhaProducaoRequest>,
) -> Result<(StatusCode, Json<LinhaProducao>), AppError> {
    let controller = CadastroController::new(state.pool.clone());
    let linha = controller.criar_linha_producao(request).await?;
    Ok((StatusCode::CREATED, Json(linha)))
}

async fn listar_posicoes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Posicao>>, AppError> {
    let controller = CadastroController::new(state.pool.clone());
    Ok(Json(controller.listar_posicoes().await?))
}

async fn criar_posicao(
    State(state): State<AppState>,
    Json(request): Json<CriarPosicaoRequest>,
) -> Result<(StatusCode, Json<Posicao>), AppError> {
    let controller = CadastroController::new(state.pool.clone());
    let posicao = controller.criar_posicao(request).await?;
    Ok((StatusCode::CREATED, Json(posicao)))
}

async fn listar_embaladeiras(
    State(state): State<AppState>,
) -> Result<Json<Vec<Embaladeira>>, AppError> {
    let controller = CadastroController::new(state.pool.clone());
    Ok(Json(controller.listar_embaladeiras().await?))
}

async fn criar_embaladeira(
    State(state): State<AppState>,
    Json(request): Json<CriarEmbaladeiraRequest>,
) -> Result<(StatusCode, Json<Embaladeira>), AppError> {
    let controller = CadastroController::new(state.pool.clone());
    let embaladeira = controller.criar_embaladeira(request).await?;
    Ok((StatusCode::CREATED, Json(embaladeira)))
}
