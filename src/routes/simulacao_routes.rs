use axum::{
    extract::{Path, State},
    routing::{delete, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::simulacao_controller::SimulacaoController;
use crate::dto::simulacao_dto::{RegistrarUsoRequest, RegistroUsoResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_simulacao_router() -> Router<AppState> {
    Router::new()
        .route("/packing", post(registrar_uso))
        .route("/packing/:apontamento_id", delete(remover_uso))
}

async fn registrar_uso(
    State(state): State<AppState>,
    Json(request): Json<RegistrarUsoRequest>,
) -> Result<Json<RegistroUsoResponse>, AppError> {
    let controller = SimulacaoController::new(state.pool.clone());
    let response = controller.registrar_uso(request).await?;
    Ok(Json(response))
}

async fn remover_uso(
    State(state): State<AppState>,
    Path(apontamento_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = SimulacaoController::new(state.pool.clone());
    controller.remover_uso(apontamento_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Uso de packing removido"
    })))
}
