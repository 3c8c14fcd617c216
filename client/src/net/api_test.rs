use super::*;

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(500), "request failed: 500");
}

#[test]
fn success_status_parses_user() {
    let user = interpret_response(200, r#"{"id":1,"name":"alice"}"#).unwrap();
    assert_eq!(user, AuthUser(serde_json::json!({"id": 1, "name": "alice"})));
}

#[test]
fn any_2xx_counts_as_success() {
    assert!(interpret_response(201, r#"{"id":2}"#).is_ok());
    assert!(interpret_response(299, r#"{"id":2}"#).is_ok());
}

#[test]
fn success_with_garbage_body_is_decode_error() {
    assert!(matches!(interpret_response(200, "<html>"), Err(SubmitError::Decode(_))));
}

#[test]
fn error_status_carries_server_message() {
    let err = interpret_response(401, r#"{"message":"user exists"}"#).unwrap_err();
    assert_eq!(err, SubmitError::Server { status: 401, error: ServerError::new("user exists") });
}

#[test]
fn error_status_without_message_falls_back_to_status_text() {
    let err = interpret_response(502, "Bad Gateway").unwrap_err();
    let SubmitError::Server { status, error } = err else {
        panic!("expected server error, got {err:?}");
    };
    assert_eq!(status, 502);
    assert_eq!(error.message, "request failed: 502");
}

#[test]
fn redirect_status_is_not_success() {
    assert!(matches!(
        interpret_response(302, r#"{"message":"moved"}"#),
        Err(SubmitError::Server { status: 302, .. })
    ));
}

#[test]
fn submit_error_display_is_readable() {
    let err = SubmitError::Server { status: 401, error: ServerError::new("bad password") };
    assert_eq!(err.to_string(), "server rejected request (401): bad password");
    assert_eq!(SubmitError::Network("offline".to_owned()).to_string(), "network error: offline");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn submit_outside_browser_reports_network_error() {
    use crate::net::types::FormValues;

    let request = SubmitRequest { endpoint: "/login", body: FormValues::default() };
    let result = poll_once(submit_credentials(&request));
    assert!(matches!(result, Err(SubmitError::Network(_))));
}

/// The SSR stub never awaits, so a single poll completes it.
#[cfg(not(feature = "hydrate"))]
fn poll_once<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future should complete immediately"),
    }
}
