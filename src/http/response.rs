//! Response shaping for the caller.
//!
//! # Responsibilities
//! - Wrap a buffered upstream body as a `200 application/json` response
//! - Map upstream failures to `500` with no body
//!
//! # Design Decisions
//! - Content type is fixed; the upstream's own headers are never copied
//! - A body-read failure still carries the JSON content type, since the
//!   header is committed before the body is read

use axum::body::Bytes;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::upstream::UpstreamError;

/// The only content type the gateway ever declares.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Relay the upstream body verbatim.
pub fn relay(body: Bytes) -> Response {
    ([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response()
}

/// The caller-facing response for a failed relay.
pub fn failure(err: &UpstreamError) -> Response {
    if err.is_body_read() {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
        )
            .into_response()
    } else {
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn relay_is_verbatim_json() {
        let res = relay(Bytes::from_static(b"not json at all"));

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::CONTENT_TYPE], JSON_CONTENT_TYPE);
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"not json at all");
    }

    #[tokio::test]
    async fn relay_empty_body() {
        let res = relay(Bytes::new());
        assert_eq!(res.status(), StatusCode::OK);
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }
}
