use axum::http::HeaderValue;

use super::*;

fn state(upstream: Option<&str>) -> AppState {
    AppState { http: reqwest::Client::new(), upstream: upstream.map(Into::into) }
}

#[test]
fn upstream_url_keeps_path_and_query() {
    let uri: Uri = "/api/captains?page=2&status=On%20Hold".parse().unwrap();
    assert_eq!(upstream_url("http://api.local/", &uri), "http://api.local/api/captains?page=2&status=On%20Hold");

    let uri: Uri = "/api/dashboard/overview".parse().unwrap();
    assert_eq!(upstream_url("http://api.local", &uri), "http://api.local/api/dashboard/overview");
}

#[test]
fn only_api_headers_are_forwarded() {
    let mut incoming = HeaderMap::new();
    incoming.insert(AUTHORIZATION, HeaderValue::from_static("Bearer t0k"));
    incoming.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    incoming.insert("cookie", HeaderValue::from_static("sid=1"));
    incoming.insert("host", HeaderValue::from_static("console.local"));

    let out = forwarded_headers(&incoming);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(AUTHORIZATION).unwrap(), "Bearer t0k");
    assert_eq!(out.get(CONTENT_TYPE).unwrap(), "application/json");
    assert!(out.get("cookie").is_none());
}

#[test]
fn errors_map_to_gateway_statuses() {
    assert_eq!(ProxyError::NotConfigured.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(ProxyError::Upstream("refused".into()).into_response().status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn missing_upstream_answers_503() {
    let uri: Uri = "/api/users".parse().unwrap();
    let result = forward(State(state(None)), Method::GET, uri, HeaderMap::new(), Bytes::new()).await;
    let response = result.unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
