use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionUser serialization
// =============================================================================

#[test]
fn session_user_serializes_for_auth_me() {
    let user = SessionUser { id: Uuid::nil(), name: "Ada".to_owned(), email: Some("ada@example.com".to_owned()) };
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["id"], "00000000-0000-0000-0000-000000000000");
    assert_eq!(value["name"], "Ada");
    assert_eq!(value["email"], "ada@example.com");
}
