use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::{DashboardPrimario, DashboardSecundario};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/primario", get(dashboard_primario))
        .route("/secundario", get(dashboard_secundario))
}

async fn dashboard_primario(
    State(state): State<AppState>,
) -> Result<Json<DashboardPrimario>, AppError> {
    let controller = DashboardController::new(state.pool.clone(), &state.config);
    Ok(Json(controller.primario().await?))
}

async fn dashboard_secundario(
    State(state): State<AppState>,
) -> Result<Json<DashboardSecundario>, AppError> {
    let controller = DashboardController::new(state.pool.clone(), &state.config);
    Ok(Json(controller.secundario().await?))
}
