//! HTTP submission of the authentication form.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub returning a network error since submission is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every exit path is a variant of [`SubmitError`]: transport failures and
//! undecodable bodies are reported like server errors instead of escaping as
//! unhandled rejections.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthUser, ServerError};
use crate::state::auth_form::SubmitRequest;
use crate::util::validation::ValidationErrors;

/// Why a submission did not produce a user.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SubmitError {
    /// The form failed validation; nothing was sent.
    #[error("form has {} invalid field(s)", .0.len())]
    Validation(ValidationErrors),

    /// A request from this form is still in flight.
    #[error("a submission is already in progress")]
    InFlight,

    /// The server answered with a non-2xx status.
    #[error("server rejected request ({status}): {}", .error.message)]
    Server { status: u16, error: ServerError },

    /// The request never reached the server.
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx response whose body was not a user object.
    #[error("invalid response body: {0}")]
    Decode(String),
}

fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Map a finished HTTP exchange onto the submission result.
///
/// # Errors
///
/// [`SubmitError::Server`] for non-2xx statuses, [`SubmitError::Decode`] for a
/// 2xx body that is not JSON.
pub fn interpret_response(status: u16, body: &str) -> Result<AuthUser, SubmitError> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<AuthUser>(body).map_err(|e| SubmitError::Decode(e.to_string()));
    }
    let error = serde_json::from_str::<ServerError>(body)
        .unwrap_or_else(|_| ServerError::new(request_failed_message(status)));
    Err(SubmitError::Server { status, error })
}

/// `POST` the form values as JSON to the request's endpoint.
///
/// # Errors
///
/// See [`interpret_response`]; transport failures are [`SubmitError::Network`].
pub async fn submit_credentials(request: &SubmitRequest) -> Result<AuthUser, SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(request.endpoint)
            .json(&request.body)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| SubmitError::Network(e.to_string()))?;
        interpret_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(SubmitError::Network("not available on server".to_owned()))
    }
}
