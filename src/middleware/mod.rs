//! Middleware do sistema
//!
//! Autenticação de sessão e CORS.

pub mod auth;
pub mod cors;

pub use auth::*;
pub use cors::*;
