//! Objetos de transferência da API
//!
//! Requests e responses dos endpoints, separados dos modelos que
//! mapeiam o banco.

pub mod amostra_dto;
pub mod apontamento_dto;
pub mod auth_dto;
pub mod cadastro_dto;
pub mod dashboard_dto;
pub mod simulacao_dto;
