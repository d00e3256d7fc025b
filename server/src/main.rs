mod config;
mod db;
mod routes;
mod services;
mod state;

use crate::config::{ServerConfig, env_bool};
use crate::services::email_auth::EmailConfig;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("database init failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Router(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let pool = db::init_pool(&config.database_url, config.db_max_connections).await?;

    let email = EmailConfig::from_env();
    if email.is_none() {
        tracing::warn!("RESEND_API_KEY/RESEND_FROM not set — access codes will not be emailed");
    }
    let echo_email_codes = env_bool("EMAIL_AUTH_ECHO_CODE").unwrap_or(false);

    let state = state::AppState::new(pool, email, echo_email_codes);
    let app = routes::app(state).map_err(StartupError::Router)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "taskdeck listening");
    axum::serve(listener, app).await?;
    Ok(())
}
