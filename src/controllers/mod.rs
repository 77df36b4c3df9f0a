//! Controllers da API
//!
//! Cada controller valida o request, fala com os repositórios e monta
//! a resposta. Os handlers em routes/ só fazem a ponte HTTP.

pub mod amostra_controller;
pub mod apontamento_controller;
pub mod auth_controller;
pub mod cadastro_controller;
pub mod dashboard_controller;
pub mod simulacao_controller;
