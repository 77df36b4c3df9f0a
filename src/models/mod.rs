//! Modelos do sistema
//!
//! Structs que mapeiam exatamente o schema PostgreSQL, mais os tipos
//! enumerados compartilhados (cor de contentor e perfil de usuário).

pub mod amostra_peso;
pub mod apontamento;
pub mod cadastro;
pub mod cor;
pub mod packing;
pub mod usuario;
