//! Configuração de variáveis de ambiente
//!
//! Toda a configuração do processo vem do ambiente, com padrões que
//! servem para desenvolvimento. Em produção JWT_SECRET precisa ser
//! definido de verdade.

use std::env;

/// Configuração do ambiente
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    /// Validade da sessão, em segundos
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    /// Deslocamento do fuso local em horas (Brasília = -3)
    pub fuso_horario_offset: i32,
    /// Janela de expediente do pátio, em horas locais cheias
    pub expediente_inicio: u32,
    pub expediente_fim: u32,
}

/// Uma semana, a validade padrão da sessão
const SESSAO_PADRAO_SEGUNDOS: u64 = 7 * 24 * 60 * 60;

impl EnvironmentConfig {
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: var_numerica("PORT", 3000),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            jwt_expiration: var_numerica("JWT_EXPIRATION", SESSAO_PADRAO_SEGUNDOS),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|valor| {
                    valor
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            fuso_horario_offset: var_numerica("FUSO_HORARIO_OFFSET", -3),
            expediente_inicio: var_numerica("EXPEDIENTE_INICIO", 6),
            expediente_fim: var_numerica("EXPEDIENTE_FIM", 18),
        }
    }

    /// Verificar se estamos em modo desenvolvimento
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar se estamos em modo produção
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Endereço de escuta do servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn var_numerica<T: std::str::FromStr>(nome: &str, padrao: T) -> T {
    env::var(nome)
        .ok()
        .and_then(|valor| valor.parse().ok())
        .unwrap_or(padrao)
}
