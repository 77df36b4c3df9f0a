//! Serviço de tokens de sessão
//!
//! Emite e verifica os JWT que viajam no cookie de sessão. Qualquer
//! falha de verificação vira 401, sem distinguir o motivo.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::models::usuario::PerfilUsuario;
use crate::utils::errors::{AppError, AppResult};

/// Claims do token de sessão
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Id do usuário
    pub sub: String,
    pub email: String,
    pub role: PerfilUsuario,
    pub exp: i64,
    pub iat: i64,
}

/// Serviço de emissão e verificação de JWT
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validade: Duration,
}

impl JwtService {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_ref()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_ref()),
            algorithm: Algorithm::HS256,
            validade: Duration::seconds(config.jwt_expiration as i64),
        }
    }

    /// Emitir um token para o usuário autenticado
    pub fn gerar_token(
        &self,
        user_id: Uuid,
        email: &str,
        role: PerfilUsuario,
    ) -> AppResult<String> {
        let agora = Utc::now();

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role,
            exp: (agora + self.validade).timestamp(),
            iat: agora.timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Erro ao gerar token: {}", e)))
    }

    /// Verificar e decodificar um token
    pub fn verificar_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &Validation::new(self.algorithm))
            .map(|dados| dados.claims)
            .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_de_teste(secret: &str) -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "test".to_string(),
            port: 0,
            host: "127.0.0.1".to_string(),
            jwt_secret: secret.to_string(),
            jwt_expiration: 3600,
            cors_origins: vec![],
            fuso_horario_offset: -3,
            expediente_inicio: 6,
            expediente_fim: 18,
        }
    }

    #[test]
    fn gera_e_verifica_token() {
        let service = JwtService::new(&config_de_teste("segredo-de-teste"));
        let id = Uuid::new_v4();

        let token = service
            .gerar_token(id, "admin@ara.com", PerfilUsuario::Diretor)
            .unwrap();
        assert!(!token.is_empty());

        let claims = service.verificar_token(&token).unwrap();
        assert_eq!(claims.sub, id.to_string());
        assert_eq!(claims.email, "admin@ara.com");
        assert_eq!(claims.role, PerfilUsuario::Diretor);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejeita_token_de_outro_segredo() {
        let emissor = JwtService::new(&config_de_teste("segredo-a"));
        let verificador = JwtService::new(&config_de_teste("segredo-b"));

        let token = emissor
            .gerar_token(Uuid::new_v4(), "x@ara.com", PerfilUsuario::Operador)
            .unwrap();
        assert!(verificador.verificar_token(&token).is_err());
    }

    #[test]
    fn rejeita_token_expirado() {
        let config = config_de_teste("segredo-de-teste");
        let service = JwtService::new(&config);

        // Monta um token vencido fora da margem de tolerância
        let agora = Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "x@ara.com".to_string(),
            role: PerfilUsuario::Operador,
            exp: (agora - Duration::seconds(3600)).timestamp(),
            iat: (agora - Duration::seconds(7200)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_ref()),
        )
        .unwrap();

        assert!(service.verificar_token(&token).is_err());
    }

    #[test]
    fn rejeita_lixo() {
        let service = JwtService::new(&config_de_teste("segredo-de-teste"));
        assert!(service.verificar_token("nem.um.jwt").is_err());
    }
}
