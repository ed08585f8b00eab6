//! Gateway error taxonomy.
//!
//! Webhook handlers distinguish exactly two failure classes at the HTTP
//! boundary: a body that is not valid UTF-8 JSON, and everything else.
//! Neither is fatal to the process; each converts into a terminal JSON
//! error response for the current request only.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Request body was not valid UTF-8 JSON.
    #[error("Invalid JSON")]
    InvalidJson,

    /// Any other failure while handling a webhook.
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, description) = match self {
            GatewayError::InvalidJson => {
                warn!("webhook_body_invalid_json");
                (StatusCode::BAD_REQUEST, "Invalid JSON".to_string())
            }
            GatewayError::Internal(detail) => {
                // Full detail is logged server-side; the same text is also
                // returned in the body, matching the platform contract.
                error!(detail = %detail, "webhook_internal_error");
                (StatusCode::INTERNAL_SERVER_ERROR, detail)
            }
        };

        let body = serde_json::to_vec(&ErrorBody { error: description })
            .unwrap_or_else(|_| br#"{"error":"Internal Server Error"}"#.to_vec());

        (
            status,
            [
                (
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json; charset=utf-8"),
                ),
                (header::CONTENT_LENGTH, HeaderValue::from(body.len())),
            ],
            body,
        )
            .into_response()
    }
}
