//! Middleware de CORS
//!
//! Como a sessão vai em cookie, requests com credenciais exigem
//! origens explícitas; o modo permissivo fica só para desenvolvimento.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::config::EnvironmentConfig;

/// Monta a camada de CORS a partir da configuração
pub fn cors_layer(config: &EnvironmentConfig) -> CorsLayer {
    if config.is_development() || config.cors_origins.iter().any(|o| o == "*") {
        return CorsLayer::very_permissive();
    }

    cors_com_origens(&config.cors_origins)
}

/// CORS restrito às origens configuradas, com credenciais liberadas
/// para o cookie de sessão
fn cors_com_origens(origens: &[String]) -> CorsLayer {
    let mut cors = CorsLayer::new();

    for origem in origens {
        if let Ok(valor) = HeaderValue::from_str(origem) {
            cors = cors.allow_origin(valor);
        }
    }

    cors.allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::PATCH,
        Method::OPTIONS,
    ])
    .allow_headers([
        HeaderName::from_static("authorization"),
        HeaderName::from_static("content-type"),
        HeaderName::from_static("accept"),
        HeaderName::from_static("origin"),
        HeaderName::from_static("x-requested-with"),
    ])
    .allow_credentials(true)
    .max_age(std::time::Duration::from_secs(3600))
}
