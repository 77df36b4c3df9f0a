//! Serviços da aplicação
//!
//! Lógica de negócio pura: emissão de tokens de sessão e os cálculos
//! dos painéis. Nada aqui toca o banco diretamente.

pub mod dashboard_service;
pub mod jwt_service;
