use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::amostra_controller::AmostraController;
use crate::dto::amostra_dto::{AmostraFiltro, AmostrasCriadasResponse, CriarAmostrasRequest};
use crate::models::amostra_peso::AmostraPesoDetalhe;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_amostra_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_amostras))
        .route("/", post(criar_amostras))
        .route("/:id", delete(deletar_amostra))
}

async fn listar_amostras(
    State(state): State<AppState>,
    Query(filtro): Query<AmostraFiltro>,
) -> Result<Json<Vec<AmostraPesoDetalhe>>, AppError> {
    let controller = AmostraController::new(state.pool.clone(), &state.config);
    let amostras = controller.listar(filtro).await?;
    Ok(Json(amostras))
}

async fn criar_amostras(
    State(state): State<AppState>,
    Json(request): Json<CriarAmostrasRequest>,
) -> Result<(StatusCode, Json<AmostrasCriadasResponse>), AppError> {
    let controller = AmostraController::new(state.pool.clone(), &state.config);
    let response = controller.criar_lote(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn deletar_amostra(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AmostraController::new(state.pool.clone(), &state.config);
    controller.deletar(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Amostra removida com sucesso"
    })))
}
