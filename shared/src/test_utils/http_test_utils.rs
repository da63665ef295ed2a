use axum::body::{to_bytes, Body};
use serde_json::Value;

/// Helper function to extract JSON from an Axum response
///
/// This is useful in tests to easily parse and assert on JSON responses.
pub async fn response_to_json(response: axum::response::Response) -> Value {
    let body = response.into_body();
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Builds a request for driving a router with `oneshot`
///
/// A JSON content type is only set when a body is supplied.
pub fn create_test_request(
    method: &str,
    path: &str,
    body: Option<Value>,
) -> http::Request<Body> {
    let mut builder = http::Request::builder().method(method).uri(path);

    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }

    match body {
        Some(json_body) => builder.body(Body::from(json_body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Builds a request with a raw, possibly malformed, JSON body
pub fn create_raw_request(method: &str, path: &str, raw_body: &str) -> http::Request<Body> {
    http::Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(raw_body.to_string()))
        .unwrap()
}
