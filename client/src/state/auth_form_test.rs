use std::cell::RefCell;

use super::*;
use crate::net::api::interpret_response;
use crate::net::types::ServerError;
use crate::util::auth::{AuthEffects, complete_login};
use crate::util::validation::{EMAIL_INVALID, NAME_REQUIRED, PASSWORD_REQUIRED};

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct RecordingEffects {
    users: RefCell<Vec<AuthUser>>,
    paths: RefCell<Vec<String>>,
}

impl AuthEffects for RecordingEffects {
    fn update_user(&self, user: AuthUser) {
        self.users.borrow_mut().push(user);
    }

    fn navigate(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_owned());
    }
}

fn fill(state: &mut AuthFormState, name: &str, password: &str, email: &str) {
    state.on_field_change(Field::Name, name.to_owned());
    state.on_field_change(Field::Password, password.to_owned());
    state.on_field_change(Field::Email, email.to_owned());
}

/// Drive one request/response cycle the way the page does.
fn run_submission(state: &mut AuthFormState, status: u16, body: &str, effects: &RecordingEffects) -> SubmitRequest {
    let request = state.begin_submit().expect("form should be submittable");
    if let Some(user) = state.finish_submit(interpret_response(status, body)) {
        complete_login(user, effects);
    }
    request
}

// =============================================================
// Mode
// =============================================================

#[test]
fn new_form_is_empty_login() {
    let state = AuthFormState::new();
    assert_eq!(state.mode(), Mode::Login);
    assert_eq!(state.values(), &FormValues::default());
    assert_eq!(state.phase(), &SubmitPhase::Idle);
    assert_eq!(state.banner(), None);
}

#[test]
fn mode_labels_and_fields() {
    assert_eq!(Mode::Login.heading(), "Not a member?");
    assert_eq!(Mode::Login.toggle_label(), "Register now!");
    assert_eq!(Mode::Login.submit_label(), "Log In!");
    assert_eq!(Mode::Login.visible_fields(), &[Field::Name, Field::Password]);

    assert_eq!(Mode::Signup.heading(), "Already a member?");
    assert_eq!(Mode::Signup.toggle_label(), "Log In!");
    assert_eq!(Mode::Signup.submit_label(), "Sign Up!");
    assert_eq!(Mode::Signup.visible_fields(), &[Field::Name, Field::Password, Field::Email]);
}

#[test]
fn toggling_twice_restores_fields_and_labels() {
    let mut state = AuthFormState::new();
    let fields = state.mode().visible_fields();
    let submit = state.mode().submit_label();

    state.toggle_mode();
    assert_eq!(state.mode(), Mode::Signup);
    assert!(state.mode().shows_email());

    state.toggle_mode();
    assert_eq!(state.mode(), Mode::Login);
    assert_eq!(state.mode().visible_fields(), fields);
    assert_eq!(state.mode().submit_label(), submit);
}

#[test]
fn toggle_keeps_values() {
    let mut state = AuthFormState::new();
    fill(&mut state, "alice", "pw1", "a@b.com");
    state.toggle_mode();
    state.toggle_mode();
    assert_eq!(state.values().name, "alice");
    assert_eq!(state.values().email, "a@b.com");
}

// =============================================================
// Touched gating
// =============================================================

#[test]
fn errors_hidden_until_field_blurred() {
    let mut state = AuthFormState::new();
    assert_eq!(state.errors().get(Field::Name), Some(NAME_REQUIRED));
    assert_eq!(state.visible_error(Field::Name), None);

    state.on_field_blur(Field::Name);
    assert_eq!(state.visible_error(Field::Name), Some("Please enter a user name"));
    assert_eq!(state.visible_error(Field::Password), None);
}

#[test]
fn password_error_shown_once_touched() {
    let mut state = AuthFormState::new();
    state.on_field_change(Field::Name, "alice".to_owned());
    state.on_field_blur(Field::Password);
    assert_eq!(state.visible_error(Field::Password), Some(PASSWORD_REQUIRED));
}

#[test]
fn typing_clears_visible_error() {
    let mut state = AuthFormState::new();
    state.on_field_blur(Field::Name);
    state.on_field_change(Field::Name, "a".to_owned());
    assert_eq!(state.visible_error(Field::Name), None);
}

#[test]
fn signup_malformed_email_shows_field_error() {
    let mut state = AuthFormState::new();
    state.toggle_mode();
    fill(&mut state, "bob", "pw2", "not-an-email");
    state.on_field_blur(Field::Email);
    assert_eq!(state.visible_error(Field::Email), Some(EMAIL_INVALID));
}

#[test]
fn email_error_hidden_in_login_mode() {
    let mut state = AuthFormState::new();
    state.toggle_mode();
    state.on_field_change(Field::Email, "nope".to_owned());
    state.on_field_blur(Field::Email);
    state.toggle_mode();
    assert_eq!(state.visible_error(Field::Email), None);
}

// =============================================================
// Submission
// =============================================================

#[test]
fn invalid_form_is_not_sent_and_all_fields_become_touched() {
    let mut state = AuthFormState::new();
    state.toggle_mode();

    let err = state.begin_submit().unwrap_err();
    let SubmitError::Validation(errors) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(errors.len(), 3);
    assert_eq!(state.phase(), &SubmitPhase::Idle);
    for field in [Field::Name, Field::Password, Field::Email] {
        assert!(state.is_touched(field));
        assert!(state.visible_error(field).is_some());
    }
}

#[test]
fn signup_with_malformed_email_is_blocked() {
    let mut state = AuthFormState::new();
    state.toggle_mode();
    fill(&mut state, "bob", "pw2", "not-an-email");
    assert!(matches!(state.begin_submit(), Err(SubmitError::Validation(_))));
    assert_eq!(state.visible_error(Field::Email), Some(EMAIL_INVALID));
}

#[test]
fn second_submit_while_in_flight_is_refused() {
    let mut state = AuthFormState::new();
    fill(&mut state, "alice", "pw1", "");

    assert!(state.begin_submit().is_ok());
    assert!(state.is_submitting());
    assert_eq!(state.begin_submit(), Err(SubmitError::InFlight));
    assert!(state.is_submitting());
}

#[test]
fn request_targets_mode_endpoint_and_carries_all_fields() {
    let mut state = AuthFormState::new();
    state.toggle_mode();
    fill(&mut state, "bob", "pw2", "bob@x.com");

    let request = state.begin_submit().unwrap();
    assert_eq!(request.endpoint, "/signup");
    assert_eq!(
        request.body,
        FormValues { name: "bob".to_owned(), email: "bob@x.com".to_owned(), password: "pw2".to_owned() }
    );
}

#[test]
fn login_success_updates_user_and_navigates_home() {
    let mut state = AuthFormState::new();
    fill(&mut state, "alice", "pw1", "");
    let effects = RecordingEffects::default();

    let request = run_submission(&mut state, 200, r#"{"id":1,"name":"alice"}"#, &effects);

    assert_eq!(request.endpoint, "/login");
    assert_eq!(request.body.email, "");
    assert_eq!(*effects.users.borrow(), vec![AuthUser(serde_json::json!({"id": 1, "name": "alice"}))]);
    assert_eq!(*effects.paths.borrow(), vec!["/".to_owned()]);
    assert_eq!(state.phase(), &SubmitPhase::Idle);
    assert_eq!(state.banner(), None);
}

#[test]
fn signup_rejection_shows_banner_without_side_effects() {
    let mut state = AuthFormState::new();
    state.toggle_mode();
    fill(&mut state, "bob", "pw2", "bob@x.com");
    let effects = RecordingEffects::default();

    let request = run_submission(&mut state, 401, r#"{"message":"user exists"}"#, &effects);

    assert_eq!(request.endpoint, "/signup");
    assert_eq!(state.banner().as_deref(), Some("user exists"));
    assert!(effects.users.borrow().is_empty());
    assert!(effects.paths.borrow().is_empty());
    assert_eq!(
        state.phase(),
        &SubmitPhase::Failed(SubmitError::Server { status: 401, error: ServerError::new("user exists") })
    );
}

#[test]
fn new_attempt_clears_previous_banner() {
    let mut state = AuthFormState::new();
    fill(&mut state, "alice", "wrong", "");
    let effects = RecordingEffects::default();
    run_submission(&mut state, 401, r#"{"message":"bad password"}"#, &effects);
    assert_eq!(state.banner().as_deref(), Some("bad password"));

    state.begin_submit().unwrap();
    assert_eq!(state.banner(), None);
    assert!(state.is_submitting());
}

#[test]
fn blocked_attempt_keeps_previous_banner() {
    let mut state = AuthFormState::new();
    fill(&mut state, "alice", "wrong", "");
    let effects = RecordingEffects::default();
    run_submission(&mut state, 401, r#"{"message":"bad password"}"#, &effects);

    state.on_field_change(Field::Password, String::new());
    assert!(state.begin_submit().is_err());
    assert_eq!(state.banner().as_deref(), Some("bad password"));
}

#[test]
fn network_failure_is_surfaced_in_banner() {
    let mut state = AuthFormState::new();
    fill(&mut state, "alice", "pw1", "");
    state.begin_submit().unwrap();

    let user = state.finish_submit(Err(SubmitError::Network("connection refused".to_owned())));
    assert!(user.is_none());
    assert_eq!(state.banner().as_deref(), Some("Could not reach the server: connection refused"));
    assert!(!state.is_submitting());
}

#[test]
fn undecodable_success_body_is_surfaced_in_banner() {
    let mut state = AuthFormState::new();
    fill(&mut state, "alice", "pw1", "");
    state.begin_submit().unwrap();

    assert!(state.finish_submit(interpret_response(200, "not json")).is_none());
    let banner = state.banner().unwrap();
    assert!(banner.starts_with("Unexpected response from server: "), "{banner}");
}
