use crate::utils::error::AppError;
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    MongoDB,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub database_url: String,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Lê a configuração das variáveis de ambiente (após dotenv)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("PORT must be a valid port number, got '{}'", raw)))?,
            None => 8080,
        };

        let storage = match lookup("STORAGE_BACKEND").as_deref().map(str::trim) {
            None | Some("") => StorageBackend::MongoDB,
            Some(s) if s.eq_ignore_ascii_case("mongodb") => StorageBackend::MongoDB,
            Some(s) if s.eq_ignore_ascii_case("memory") => StorageBackend::Memory,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "STORAGE_BACKEND must be 'mongodb' or 'memory', got '{}'",
                    other
                )))
            }
        };

        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "mongodb://localhost:27017/users_db".to_string());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            storage,
            database_url,
            cors_allowed_origins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.storage, StorageBackend::MongoDB);
        assert_eq!(config.database_url, "mongodb://localhost:27017/users_db");
        assert_eq!(config.cors_allowed_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("STORAGE_BACKEND", "Memory"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.cors_allowed_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let err = config_from(&[("STORAGE_BACKEND", "postgres")]).unwrap_err();
        assert!(err.to_string().contains("postgres"));
    }
}
