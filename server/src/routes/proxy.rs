//! `/api/*` forwarder to the admin API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console calls the admin API on its own origin. This handler replays
//! each request against the configured upstream with the same method, path,
//! query and body, carrying only the headers the API reads.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::state::AppState;

/// Request headers replayed upstream.
const FORWARDED_HEADERS: [HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("admin API upstream is not configured")]
    NotConfigured,
    #[error("admin API unreachable: {0}")]
    Upstream(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Json(serde_json::json!({ "message": self.to_string() }))).into_response()
    }
}

/// Upstream URL for an incoming `/api/...` path and query.
pub fn upstream_url(base: &str, uri: &Uri) -> String {
    let path = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Keep only [`FORWARDED_HEADERS`].
pub fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_HEADERS {
        if let Some(value) = incoming.get(name) {
            out.insert(name.clone(), value.clone());
        }
    }
    out
}

pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let Some(base) = state.upstream.as_deref() else {
        tracing::warn!(%method, path = uri.path(), "api request with no upstream configured");
        return Err(ProxyError::NotConfigured);
    };
    let url = upstream_url(base, &uri);

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "admin API request failed");
            ProxyError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "admin API body read failed");
        ProxyError::Upstream(e.to_string())
    })?;
    tracing::debug!(%method, %url, %status, "forwarded api request");

    let mut response = (status, bytes).into_response();
    if let Some(value) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, value);
    }
    Ok(response)
}
