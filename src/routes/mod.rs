pub mod amostra_routes;
pub mod apontamento_routes;
pub mod auth_routes;
pub mod cadastro_routes;
pub mod dashboard_routes;
pub mod simulacao_routes;

use axum::{middleware, routing::get, Json, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::auth::exigir_sessao;
use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Monta o router completo: rotas públicas (raiz e login/logout) e o
/// restante atrás do middleware de sessão
pub fn create_router(state: AppState) -> Router {
    let publicas = Router::new()
        .route("/", get(raiz))
        .nest("/api/auth", auth_routes::create_auth_router());

    let protegidas = Router::new()
        .nest("/api/auth", auth_routes::create_auth_me_router())
        .nest(
            "/api/apontamento",
            apontamento_routes::create_apontamento_router(),
        )
        .nest("/api/amostras-peso", amostra_routes::create_amostra_router())
        .nest("/api/cadastros", cadastro_routes::create_cadastro_router())
        .nest("/api/simulacao", simulacao_routes::create_simulacao_router())
        .nest("/dashboard", dashboard_routes::create_dashboard_router())
        .layer(middleware::from_fn_with_state(state.clone(), exigir_sessao));

    Router::new()
        .merge(publicas)
        .merge(protegidas)
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint público de informação do serviço
async fn raiz() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "ara-mes",
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
