//! Middleware de autenticação de sessão
//!
//! Resolve o usuário a partir do cookie de sessão (ou do header
//! Authorization, para clientes de API) e o injeta nas extensions.
//! Também aplica o guard de perfil dos caminhos restritos.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::models::usuario::PerfilUsuario;
use crate::repositories::usuario_repository::UsuarioRepository;
use crate::services::jwt_service::JwtService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Nome do cookie de sessão
pub const COOKIE_SESSAO: &str = "token";

/// Prefixos de caminho que exigem perfil elevado
const PREFIXOS_RESTRITOS: [&str; 2] = ["/dashboard", "/api/cadastros"];

/// Usuário autenticado que o middleware injeta nas requests
#[derive(Debug, Clone)]
pub struct UsuarioAutenticado {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: PerfilUsuario,
}

/// Middleware de sessão: toda rota protegida passa por aqui
pub async fn exigir_sessao(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extrair_token(request.headers())
        .ok_or_else(|| AppError::Unauthorized("Não autenticado".to_string()))?;

    let claims = JwtService::new(&state.config).verificar_token(&token)?;

    // Busca por id, com fallback por e-mail para sessões emitidas
    // antes de uma recarga do banco
    let repository = UsuarioRepository::new(state.pool.clone());
    let por_id = match Uuid::parse_str(&claims.sub) {
        Ok(id) => repository.find_by_id(id).await?,
        Err(_) => None,
    };
    let usuario = match por_id {
        Some(usuario) => usuario,
        None => repository
            .find_by_email(&claims.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Usuário não encontrado".to_string()))?,
    };

    let caminho = request.uri().path();
    if caminho_restrito(caminho) && !usuario.role.e_elevado() {
        return Err(AppError::Forbidden(
            "Permissão insuficiente para acessar este recurso".to_string(),
        ));
    }

    request.extensions_mut().insert(UsuarioAutenticado {
        id: usuario.id,
        email: usuario.email,
        name: usuario.name,
        role: usuario.role,
    });

    Ok(next.run(request).await)
}

fn caminho_restrito(caminho: &str) -> bool {
    PREFIXOS_RESTRITOS
        .iter()
        .any(|prefixo| caminho.starts_with(prefixo))
}

/// Extrai o token da request: cookie de sessão primeiro, depois
/// Authorization: Bearer
fn extrair_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extrair_cookie(headers, COOKIE_SESSAO) {
        if !token.is_empty() {
            return Some(token);
        }
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|valor| valor.to_str().ok())
        .and_then(|valor| valor.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}

fn extrair_cookie(headers: &HeaderMap, nome: &str) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    cookies.split(';').find_map(|par| {
        let (chave, valor) = par.trim().split_once('=')?;
        (chave == nome).then(|| valor.to_string())
    })
}

/// Monta o Set-Cookie da sessão. HttpOnly sempre; Secure só em
/// produção, para não quebrar o desenvolvimento local sem TLS.
pub fn cookie_de_sessao(token: &str, max_age: u64, seguro: bool) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; Path=/; Max-Age={}; SameSite=Lax",
        COOKIE_SESSAO, token, max_age
    );
    if seguro {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Monta o Set-Cookie que encerra a sessão
pub fn cookie_de_logout() -> String {
    format!("{}=; HttpOnly; Path=/; Max-Age=0; SameSite=Lax", COOKIE_SESSAO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_com_cookie(valor: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(valor).unwrap());
        headers
    }

    #[test]
    fn acha_o_cookie_no_meio_de_outros() {
        let headers = headers_com_cookie("tema=escuro; token=abc.def.ghi; lang=pt");
        assert_eq!(extrair_token(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn cookie_vazio_cai_para_o_bearer() {
        let mut headers = headers_com_cookie("token=");
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer xyz.123.abc"),
        );
        assert_eq!(extrair_token(&headers), Some("xyz.123.abc".to_string()));
    }

    #[test]
    fn sem_credencial_nenhuma() {
        assert_eq!(extrair_token(&HeaderMap::new()), None);
    }

    #[test]
    fn prefixos_restritos() {
        assert!(caminho_restrito("/dashboard"));
        assert!(caminho_restrito("/dashboard/secundario"));
        assert!(caminho_restrito("/api/cadastros/valvulas"));
        assert!(!caminho_restrito("/api/apontamento"));
    }

    #[test]
    fn cookie_de_sessao_leva_os_atributos() {
        let cookie = cookie_de_sessao("tok", 604800, false);
        assert!(cookie.starts_with("token=tok;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=604800"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(!cookie.contains("Secure"));

        let cookie = cookie_de_sessao("tok", 3600, true);
        assert!(cookie.ends_with("; Secure"));
    }

    #[test]
    fn cookie_de_logout_expira_na_hora() {
        assert!(cookie_de_logout().contains("Max-Age=0"));
    }
}
