//! Response-shape validation for the remote hierarchy API.
//!
//! Captive portals, CDN challenge pages, and login redirects often answer
//! with `200 OK` and an HTML body. A response is only accepted when:
//!
//! 1. the status is a success,
//! 2. `Content-Type` contains `application/json`,
//! 3. the body contains neither `<html` nor `redirect` (case-insensitive),
//! 4. the body parses as a non-empty JSON array whose items decode into
//!    the expected record type.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Reasons a response was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidResponse {
    /// Non-success HTTP status.
    #[error("HTTP {0}")]
    Status(StatusCode),

    /// Missing or non-JSON content type.
    #[error("unexpected content type {0:?}")]
    ContentType(Option<String>),

    /// Body looks like an HTML page or a redirect notice.
    #[error("body looks like an HTML or redirect page")]
    Markup,

    /// Body is not valid JSON, or items do not match the record shape.
    #[error("malformed JSON: {0}")]
    Json(String),

    /// Body is valid JSON but not an array.
    #[error("expected a JSON array")]
    NotArray,

    /// Body is an empty JSON array.
    #[error("empty JSON array")]
    Empty,
}

/// Checks status, content type, and body, then decodes the records.
///
/// # Errors
///
/// Returns the first [`InvalidResponse`] rule that the response breaks.
pub fn decode_records<T: DeserializeOwned>(
    status: StatusCode,
    content_type: Option<&str>,
    body: &str,
) -> Result<Vec<T>, InvalidResponse> {
    if !status.is_success() {
        return Err(InvalidResponse::Status(status));
    }

    let is_json = content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"));
    if !is_json {
        return Err(InvalidResponse::ContentType(content_type.map(str::to_string)));
    }

    if looks_like_markup(body) {
        return Err(InvalidResponse::Markup);
    }

    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| InvalidResponse::Json(e.to_string()))?;

    let serde_json::Value::Array(items) = value else {
        return Err(InvalidResponse::NotArray);
    };

    if items.is_empty() {
        return Err(InvalidResponse::Empty);
    }

    items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| InvalidResponse::Json(e.to_string()))
}

fn looks_like_markup(body: &str) -> bool {
    let lower = body.to_ascii_lowercase();
    lower.contains("<html") || lower.contains("redirect")
}

#[cfg(test)]
mod tests {
    use wilayah_region_models::{Province, Regency};

    use super::*;

    const JSON: Option<&str> = Some("application/json; charset=utf-8");

    #[test]
    fn accepts_province_array() {
        let provinces: Vec<Province> = decode_records(
            StatusCode::OK,
            JSON,
            r#"[{"id":"11","name":"ACEH"},{"id":"12","name":"SUMATERA UTARA"}]"#,
        )
        .unwrap();

        assert_eq!(provinces.len(), 2);
        assert_eq!(provinces[0].id, 11);
        assert_eq!(provinces[1].name, "SUMATERA UTARA");
    }

    #[test]
    fn rejects_error_status() {
        let err = decode_records::<Province>(StatusCode::BAD_GATEWAY, JSON, "[]").unwrap_err();
        assert_eq!(err, InvalidResponse::Status(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn rejects_html_content_type() {
        let err = decode_records::<Province>(
            StatusCode::OK,
            Some("text/html; charset=utf-8"),
            r#"[{"id":"11","name":"ACEH"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, InvalidResponse::ContentType(Some(_))));

        let err = decode_records::<Province>(StatusCode::OK, None, "[]").unwrap_err();
        assert_eq!(err, InvalidResponse::ContentType(None));
    }

    #[test]
    fn rejects_html_page_served_as_json() {
        let err = decode_records::<Province>(
            StatusCode::OK,
            JSON,
            "<HTML><body>Please wait while we check your browser</body></HTML>",
        )
        .unwrap_err();
        assert_eq!(err, InvalidResponse::Markup);

        let err = decode_records::<Province>(
            StatusCode::OK,
            JSON,
            "<html><body>redirect</body></html>",
        )
        .unwrap_err();
        assert_eq!(err, InvalidResponse::Markup);
    }

    #[test]
    fn rejects_redirect_notice() {
        let err = decode_records::<Province>(
            StatusCode::OK,
            JSON,
            r#"{"status":"Redirect","location":"/login"}"#,
        )
        .unwrap_err();
        assert_eq!(err, InvalidResponse::Markup);
    }

    #[test]
    fn rejects_non_array_and_empty_bodies() {
        assert_eq!(
            decode_records::<Province>(StatusCode::OK, JSON, r#"{"id":"11"}"#).unwrap_err(),
            InvalidResponse::NotArray
        );
        assert_eq!(
            decode_records::<Province>(StatusCode::OK, JSON, "[]").unwrap_err(),
            InvalidResponse::Empty
        );
    }

    #[test]
    fn rejects_truncated_json() {
        let err =
            decode_records::<Province>(StatusCode::OK, JSON, r#"[{"id":"11","na"#).unwrap_err();
        assert!(matches!(err, InvalidResponse::Json(_)));
    }

    #[test]
    fn rejects_items_of_the_wrong_shape() {
        let err = decode_records::<Regency>(StatusCode::OK, JSON, r#"[{"id":"11","name":"ACEH"}]"#)
            .unwrap_err();
        assert!(matches!(err, InvalidResponse::Json(_)));
    }
}
