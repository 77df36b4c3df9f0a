//! Utilidades do sistema
//!
//! Tratamento de erros e as contas de fuso horário usadas pelos
//! painéis e filtros por data.

pub mod errors;
pub mod tempo;
