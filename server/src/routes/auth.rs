//! Auth routes — email access codes and session management.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::config::env_bool;
use crate::services::email_auth::{self, EmailAuthError};
use crate::services::session;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

/// Session cookie carrying `token`; an empty token with zero max-age clears it.
pub(crate) fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    let clearing = token.is_empty();
    let builder = Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure);
    if clearing { builder.max_age(Duration::ZERO).build() } else { builder.build() }
}

pub(crate) fn email_auth_error_to_status(err: &EmailAuthError) -> StatusCode {
    match err {
        EmailAuthError::InvalidEmail | EmailAuthError::InvalidCode => StatusCode::BAD_REQUEST,
        EmailAuthError::VerificationFailed => StatusCode::UNAUTHORIZED,
        EmailAuthError::EmailDelivery(_) => StatusCode::BAD_GATEWAY,
        EmailAuthError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, user_id = %auth.user.id, "session delete failed");
    }

    let jar = CookieJar::new().add(session_cookie(String::new(), cookie_secure()));
    (jar, StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct RequestCodeBody {
    pub email: String,
}

/// `POST /api/auth/email/request-code` — issue a code and email it.
///
/// Responds `{ ok, code }`; `code` is only populated when echoing is enabled.
pub async fn request_email_code(State(state): State<AppState>, Json(body): Json<RequestCodeBody>) -> Response {
    let (email, code) = match email_auth::request_access_code(&state.pool, &body.email).await {
        Ok(issued) => issued,
        Err(e) => {
            tracing::warn!(error = %e, "access code request failed");
            return email_auth_error_to_status(&e).into_response();
        }
    };

    match &state.email {
        Some(config) => {
            if let Err(e) = email_auth::send_access_code_email(config, &email, &code).await {
                tracing::error!(error = %e, "access code delivery failed");
                if !state.echo_email_codes {
                    return email_auth_error_to_status(&e).into_response();
                }
            }
        }
        None => tracing::info!(%email, "email delivery not configured; access code not sent"),
    }

    let echoed = state.echo_email_codes.then_some(code);
    Json(serde_json::json!({ "ok": true, "code": echoed })).into_response()
}

#[derive(Deserialize)]
pub struct VerifyCodeBody {
    pub email: String,
    pub code: String,
}

/// `POST /api/auth/email/verify-code` — consume a code, start a session.
pub async fn verify_email_code(State(state): State<AppState>, Json(body): Json<VerifyCodeBody>) -> Response {
    let user_id = match email_auth::verify_access_code(&state.pool, &body.email, &body.code).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(error = %e, "access code verification failed");
            return email_auth_error_to_status(&e).into_response();
        }
    };

    let token = match session::create_session(&state.pool, user_id).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create session").into_response();
        }
    };

    tracing::info!(%user_id, "email login succeeded");
    let jar = CookieJar::new().add(session_cookie(token, cookie_secure()));
    (jar, Json(serde_json::json!({ "ok": true }))).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
