//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` through `dotenvy` before calling `ServerConfig::from_env`.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DATABASE_URL is required")]
    MissingDatabaseUrl,
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `DATABASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DB_MAX_CONNECTIONS`: default 5
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("DATABASE_URL").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
            std::env::var("DB_MAX_CONNECTIONS").ok().as_deref(),
        )
    }

    fn from_values(
        database_url: Option<&str>,
        port: Option<&str>,
        db_max_connections: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let database_url = database_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?
            .to_owned();
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
        };
        let db_max_connections = db_max_connections
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);

        Ok(Self { database_url, port, db_max_connections })
    }
}

/// Parse a boolean env var; unrecognized or missing values are `None`.
pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}
