use super::*;
use crate::state::test_helpers::test_app_state;
use axum::extract::FromRequestParts;

// =============================================================================
// session_cookie
// =============================================================================

#[test]
fn session_cookie_is_http_only_and_scoped_to_root() {
    let cookie = session_cookie("abc".to_owned(), true);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "abc");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert!(cookie.max_age().is_none());
}

#[test]
fn empty_session_cookie_expires_immediately() {
    let cookie = session_cookie(String::new(), false);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

// =============================================================================
// email_auth_error_to_status
// =============================================================================

#[test]
fn email_auth_errors_map_to_statuses() {
    assert_eq!(email_auth_error_to_status(&EmailAuthError::InvalidEmail), StatusCode::BAD_REQUEST);
    assert_eq!(email_auth_error_to_status(&EmailAuthError::InvalidCode), StatusCode::BAD_REQUEST);
    assert_eq!(email_auth_error_to_status(&EmailAuthError::VerificationFailed), StatusCode::UNAUTHORIZED);
    assert_eq!(
        email_auth_error_to_status(&EmailAuthError::EmailDelivery("boom".to_owned())),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        email_auth_error_to_status(&EmailAuthError::Db(sqlx::Error::RowNotFound)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// =============================================================================
// AuthUser extractor
// =============================================================================

#[tokio::test]
async fn auth_user_rejects_request_without_cookie() {
    let state = test_app_state();
    let (mut parts, ()) = axum::http::Request::builder()
        .uri("/api/auth/me")
        .body(())
        .unwrap()
        .into_parts();
    let result = AuthUser::from_request_parts(&mut parts, &state).await;
    assert_eq!(result.err(), Some(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn auth_user_rejects_empty_cookie_value() {
    let state = test_app_state();
    let (mut parts, ()) = axum::http::Request::builder()
        .uri("/api/projects")
        .header("cookie", "session_token=")
        .body(())
        .unwrap()
        .into_parts();
    let result = AuthUser::from_request_parts(&mut parts, &state).await;
    assert_eq!(result.err(), Some(StatusCode::UNAUTHORIZED));
}
