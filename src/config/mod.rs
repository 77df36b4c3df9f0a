//! Configuração do projeto
//!
//! Variáveis de ambiente e parâmetros operacionais do serviço.

pub mod environment;

pub use environment::*;
