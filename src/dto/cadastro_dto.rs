use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::cor::CorContentor;

// Requests de criação dos cadastros de apoio. Campos obrigatórios
// chegam como Option e passam pelo validator para devolver 400 com a
// mensagem certa em vez de erro de desserialização.

#[derive(Debug, Deserialize, Validate)]
pub struct CriarCabecalRequest {
    #[validate(
        required(message = "Nome é obrigatório"),
        length(min = 1, message = "Nome é obrigatório")
    )]
    pub nome: Option<String>,
    pub descricao: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CriarValvulaRequest {
    #[validate(
        required(message = "Nome, cor e cabeçal são obrigatórios"),
        length(min = 1, message = "Nome, cor e cabeçal são obrigatórios")
    )]
    pub nome: Option<String>,
    pub descricao: Option<String>,
    #[validate(required(message = "Nome, cor e cabeçal são obrigatórios"))]
    pub cor: Option<CorContentor>,
    #[validate(required(message = "Nome, cor e cabeçal são obrigatórios"))]
    pub cabecal_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CriarVariedadeRequest {
    #[validate(
        required(message = "Nome é obrigatório"),
        length(min = 1, message = "Nome é obrigatório")
    )]
    pub nome: Option<String>,
    pub descricao: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CriarLinhaProducaoRequest {
    #[validate(
        required(message = "Letra é obrigatória"),
        length(min = 1, message = "Letra é obrigatória")
    )]
    pub letra: Option<String>,
    pub descricao: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CriarPosicaoRequest {
    #[validate(
        required(message = "Posição é obrigatória"),
        length(min = 1, message = "Posição é obrigatória")
    )]
    pub posicao: Option<String>,
    pub descricao: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CriarEmbaladeiraRequest {
    #[validate(
        required(message = "Nome é obrigatório"),
        length(min = 1, message = "Nome é obrigatório")
    )]
    pub nome: Option<String>,
}
