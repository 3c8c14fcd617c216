//! Auth routes: forward `/login` and `/signup` to the auth upstream.
//!
//! The form posts to same-origin paths; this host relays them so the browser
//! never talks to the auth API directly. Status, body and `Set-Cookie` come
//! back unchanged. Failures on this side are reported as `{"message": ...}`
//! so the form's banner can show them.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

pub const NOT_CONFIGURED: &str = "auth backend not configured";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("auth backend unreachable: {0}")]
    Unreachable(String),

    #[error("auth backend response unreadable: {0}")]
    Body(String),
}

/// `POST /login`
pub async fn login(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    forward(&state, "/login", &headers, body).await
}

/// `POST /signup`
pub async fn signup(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    forward(&state, "/signup", &headers, body).await
}

pub(crate) fn upstream_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

pub(crate) fn json_message(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "message": message }))).into_response()
}

async fn forward(state: &AppState, path: &str, headers: &HeaderMap, body: Bytes) -> Response {
    let Some(base) = state.auth_api_url.as_deref() else {
        tracing::warn!(%path, "auth request rejected: AUTH_API_URL not set");
        return json_message(StatusCode::SERVICE_UNAVAILABLE, NOT_CONFIGURED);
    };

    let url = upstream_url(base, path);
    match relay(state, &url, headers, body).await {
        Ok(response) => {
            tracing::info!(%path, status = response.status().as_u16(), "auth request relayed");
            response
        }
        Err(e) => {
            tracing::warn!(%path, error = %e, "auth upstream failed");
            json_message(StatusCode::BAD_GATEWAY, &e.to_string())
        }
    }
}

async fn relay(state: &AppState, url: &str, headers: &HeaderMap, body: Bytes) -> Result<Response, ProxyError> {
    let mut request = state
        .http
        .post(url)
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .body(body);
    if let Some(cookie) = headers.get(COOKIE) {
        request = request.header(COOKIE, cookie.clone());
    }

    let upstream = request.send().await.map_err(|e| ProxyError::Unreachable(e.to_string()))?;
    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    let cookies: Vec<HeaderValue> = upstream.headers().get_all(SET_COOKIE).iter().cloned().collect();
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Body(e.to_string()))?;

    let mut response = (status, bytes).into_response();
    let out = response.headers_mut();
    out.insert(CONTENT_TYPE, content_type);
    for cookie in cookies {
        out.append(SET_COOKIE, cookie);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
