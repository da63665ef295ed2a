pub mod user_handlers;

use axum::{
    body::Bytes,
    extract::Request,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::de::DeserializeOwned;
use users_shared::models::{messages, ApiResponse, HealthResponse};

use crate::error::{AppError, Result};

// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::now())
}

// Any path or method without a handler
pub async fn route_not_found(req: Request) -> impl IntoResponse {
    log::warn!("No route matched for: {} {}", req.method(), req.uri());
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error(messages::ROUTE_NOT_FOUND)),
    )
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// Decodes a JSON request body, treating an absent one as `{}`.
///
/// A body that is empty, or not declared as JSON, yields `T::default()`.
/// Only a JSON body that fails to parse is an error.
pub fn read_json_body<T>(headers: &HeaderMap, body: &Bytes) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if !is_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!("Request body rejected: {}", err);
        AppError::BadRequest(format!("Failed to parse the request body as JSON: {err}"))
    })
}

/// Reads a user id from a path segment the way `parseInt` does.
///
/// Leading whitespace and a sign are accepted, a `0x` prefix switches to hex,
/// and anything after the leading digits is ignored, so `"12abc"` is user 12.
/// Ids are positive, so a negative or digit-less segment yields `None`.
pub fn parse_user_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, unsigned) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = unsigned
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() || negative {
        return None;
    }

    u64::from_str_radix(digits, radix).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use users_shared::models::UserPatch;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("4"), Some(4));
        assert_eq!(parse_user_id("007"), Some(7));
        assert_eq!(parse_user_id("12abc"), Some(12));
        assert_eq!(parse_user_id(" 3"), Some(3));
        assert_eq!(parse_user_id("+5"), Some(5));
        assert_eq!(parse_user_id("1.9"), Some(1));
    }

    #[test]
    fn test_parse_user_id_hex_prefix() {
        assert_eq!(parse_user_id("0x2"), Some(2));
        assert_eq!(parse_user_id("0XaZ"), Some(10));
        assert_eq!(parse_user_id("0x"), None);
        assert_eq!(parse_user_id("-0x2"), None);
    }

    #[test]
    fn test_parse_user_id_rejects_non_ids() {
        assert_eq!(parse_user_id(""), None);
        assert_eq!(parse_user_id("abc"), None);
        assert_eq!(parse_user_id("-2"), None);
        assert_eq!(parse_user_id("99999999999999999999999"), None);
    }

    #[test]
    fn test_read_json_body_defaults_when_absent() {
        let patch: UserPatch = read_json_body(&HeaderMap::new(), &Bytes::new()).unwrap();
        assert!(patch.is_empty());

        let patch: UserPatch = read_json_body(&json_headers(), &Bytes::from_static(b"  ")).unwrap();
        assert!(patch.is_empty());

        // Without a JSON content type the body is not read at all
        let patch: UserPatch =
            read_json_body(&HeaderMap::new(), &Bytes::from_static(br#"{"name":"X"}"#)).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_read_json_body_parses_and_rejects() {
        let patch: UserPatch =
            read_json_body(&json_headers(), &Bytes::from_static(br#"{"name":"X"}"#)).unwrap();
        assert_eq!(patch.name.as_deref(), Some("X"));

        let err = read_json_body::<UserPatch>(&json_headers(), &Bytes::from_static(b"{bad"))
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
