use super::test_helpers::{test_app_state, unconfigured_app_state};
use super::*;

#[test]
fn test_state_has_admin_and_no_mailer() {
    let state = test_app_state();
    assert!(state.admin.is_some());
    assert!(state.mailer.is_none());
    assert!(state.sessions.is_empty());
}

#[test]
fn unconfigured_state_disables_sign_in() {
    assert!(unconfigured_app_state().admin.is_none());
}

#[test]
fn clones_share_the_session_store() {
    let state = test_app_state();
    let clone = state.clone();
    let admin = state.admin.as_ref().unwrap();
    let token = state.sessions.issue(admin.identity());
    assert!(clone.sessions.authenticate(&token).is_some());
}
