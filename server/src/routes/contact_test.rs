use super::*;
use crate::state::test_helpers::test_app_state;

#[test]
fn validation_failures_map_to_bad_request() {
    for error in [
        ContactError::InvalidName,
        ContactError::InvalidEmail,
        ContactError::EmptyMessage,
        ContactError::MessageTooLong,
    ] {
        assert_eq!(rejection_status(&error), StatusCode::BAD_REQUEST);
    }
}

#[test]
fn delivery_failures_map_to_bad_gateway() {
    let error = ContactError::Delivery("provider down".to_owned());
    assert_eq!(rejection_status(&error), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn submit_rejects_invalid_payload_before_delivery() {
    let state = test_app_state();
    let request = ContactRequest {
        name: String::new(),
        email: "a@b.com".to_owned(),
        message: "hi".to_owned(),
    };
    let response = submit(State(state), Json(request)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn submit_without_mailer_reports_unavailable() {
    // test_app_state has no mailer configured.
    let state = test_app_state();
    let request = ContactRequest {
        name: "Visitor".to_owned(),
        email: "visitor@example.com".to_owned(),
        message: "Hello".to_owned(),
    };
    let response = submit(State(state), Json(request)).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
