use super::*;

#[test]
fn default_state_is_not_loading_and_anonymous() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn pending_state_is_loading() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(state.user_id().is_none());
}

#[test]
fn user_id_reads_logged_in_user() {
    let state = AuthState {
        user: Some(User { id: "u-7".to_owned(), name: "Grace".to_owned(), email: None }),
        loading: false,
    };
    assert_eq!(state.user_id(), Some("u-7"));
}
