use std::env;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_UPSTREAM_USERS_URL: &str = "http://localhost:8080/api/users";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Configuração do serviço, lida das variáveis de ambiente (.env incluso)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub upstream_users_url: String,
    /// Vazio = qualquer origem
    pub cors_allowed_origins: Vec<String>,
    pub seed_demo_users: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Monta a config a partir de qualquer lookup de chave
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let upstream_users_url = lookup("UPSTREAM_USERS_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_USERS_URL.to_string());

        if !upstream_users_url.starts_with("http://") && !upstream_users_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                key: "UPSTREAM_USERS_URL",
                value: upstream_users_url,
            });
        }

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let seed_demo_users = match lookup("SEED_DEMO_USERS") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidValue {
                key: "SEED_DEMO_USERS",
                value: raw.clone(),
            })?,
            None => false,
        };

        Ok(Self {
            host,
            port,
            upstream_users_url,
            cors_allowed_origins,
            seed_demo_users,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
