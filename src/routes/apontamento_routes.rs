use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::apontamento_controller::ApontamentoController;
use crate::dto::apontamento_dto::{
    ApontamentoFiltro, AtualizarApontamentoRequest, CriarApontamentoRequest,
};
use crate::models::apontamento::{Apontamento, ApontamentoDetalhe};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_apontamento_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_apontamentos))
        .route("/", post(criar_apontamento))
        .route("/:id", get(buscar_apontamento))
        .route("/:id", put(atualizar_apontamento))
        .route("/:id", delete(deletar_apontamento))
}

async fn listar_apontamentos(
    State(state): State<AppState>,
    Query(filtro): Query<ApontamentoFiltro>,
) -> Result<Json<Vec<ApontamentoDetalhe>>, AppError> {
    let controller = ApontamentoController::new(state.pool.clone(), &state.config);
    let apontamentos = controller.listar(filtro).await?;
    Ok(Json(apontamentos))
}

async fn criar_apontamento(
    State(state): State<AppState>,
    Json(request): Json<CriarApontamentoRequest>,
) -> Result<(StatusCode, Json<Apontamento>), AppError> {
    let controller = ApontamentoController::new(state.pool.clone(), &state.config);
    let apontamento = controller.criar(request).await?;
    Ok((StatusCode::CREATED, Json(apontamento)))
}

async fn buscar_apontamento(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApontamentoDetalhe>, AppError> {
    let controller = ApontamentoController::new(state.pool.clone(), &state.config);
    let apontamento = controller.buscar(id).await?;
    Ok(Json(apontamento))
}

async fn atualizar_apontamento(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AtualizarApontamentoRequest>,
) -> Result<Json<ApontamentoDetalhe>, AppError> {
    let controller = ApontamentoController::new(state.pool.clone(), &state.config);
    let apontamento = controller.atualizar(id, request).await?;
    Ok(Json(apontamento))
}

async fn deletar_apontamento(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ApontamentoController::new(state.pool.clone(), &state.config);
    controller.deletar(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Apontamento removido com sucesso"
    })))
}
