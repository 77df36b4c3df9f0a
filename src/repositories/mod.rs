//! Repositórios de acesso ao banco
//!
//! Cada repositório encapsula as queries de uma área: usuários,
//! cadastros de apoio, apontamentos, amostras, packing e os agregados
//! dos painéis.

pub mod amostra_peso_repository;
pub mod apontamento_repository;
pub mod cadastro_repository;
pub mod dashboard_repository;
pub mod packing_repository;
pub mod usuario_repository;
