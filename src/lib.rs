//! ARA MES: rastreio de recebimento de frutas
//!
//! Registra pallets recebidos (apontamentos), amostras de peso e o uso
//! simulado de packing, e agrega tudo em dashboards por cor, hora e dia.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
