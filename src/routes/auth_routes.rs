use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, UsuarioResponse};
use crate::middleware::auth::{cookie_de_logout, cookie_de_sessao, UsuarioAutenticado};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rotas públicas de autenticação
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// Rotas de autenticação que exigem sessão
pub fn create_auth_me_router() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = AuthController::new(state.pool.clone(), &state.config);
    let (token, response) = controller.login(request).await?;

    let cookie = cookie_de_sessao(
        &token,
        state.config.jwt_expiration,
        state.config.is_production(),
    );

    Ok(([(header::SET_COOKIE, cookie)], Json(response)))
}

/// Logout incondicional: apaga o cookie mesmo sem sessão válida
async fn logout() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, cookie_de_logout())],
        Json(serde_json::json!({
            "message": "Logout realizado com sucesso"
        })),
    )
}

async fn me(
    Extension(usuario): Extension<UsuarioAutenticado>,
) -> Json<UsuarioResponse> {
    Json(UsuarioResponse {
        id: usuario.id,
        email: usuario.email,
        name: usuario.name,
        role: usuario.role,
    })
}
