//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! All persistent data lives in Postgres, so the state is just the pool plus
//! the optional email delivery settings.

use sqlx::PgPool;

use crate::services::email_auth::EmailConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; `PgPool` is internally reference counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Resend settings. `None` means codes are not emailed.
    pub email: Option<EmailConfig>,
    /// Return the issued code in the request-code response (local development).
    pub echo_email_codes: bool,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, email: Option<EmailConfig>, echo_email_codes: bool) -> Self {
        Self { pool, email, echo_email_codes }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
