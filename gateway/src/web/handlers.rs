//! Webhook endpoint handlers.
//!
//! These handlers are intentionally thin - they only:
//! 1. Validate that the body is legal JSON
//! 2. Return a fixed platform-shaped acknowledgment
//!
//! Full analysis happens in the local/Docker deployment, never here.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use crate::error::GatewayError;
use crate::Config;

/// Disclaimer attached to every Feishu event acknowledgment.
const FEISHU_ACK_NOTE: &str = "Full analysis requires local/Docker deployment";

/// Fixed DingTalk reply text.
const DINGTALK_ACK_TEXT: &str = "收到消息。完整分析功能请使用本地或 Docker 部署。";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Serialize a payload and attach the response headers every endpoint must
/// carry: `application/json; charset=utf-8` and an exact `Content-Length`.
/// Non-ASCII characters stay literal in the encoded body.
fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> Result<Response, GatewayError> {
    let body = serde_json::to_vec(payload)
        .map_err(|e| GatewayError::Internal(format!("response encoding failed: {e}")))?;

    Ok((
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
        .into_response())
}

// =============================================================================
// Service Descriptor & Health Check
// =============================================================================

/// Endpoint index shown on the root page.
#[derive(Serialize)]
pub struct EndpointIndex {
    #[serde(rename = "GET /")]
    root: &'static str,
    #[serde(rename = "GET /health")]
    health: &'static str,
    #[serde(rename = "POST /bot/feishu")]
    feishu: &'static str,
    #[serde(rename = "POST /bot/dingtalk")]
    dingtalk: &'static str,
}

/// Root service descriptor.
#[derive(Serialize)]
pub struct ServiceInfo {
    pub status: &'static str,
    pub message: &'static str,
    pub note: &'static str,
    pub endpoints: EndpointIndex,
}

impl ServiceInfo {
    fn current() -> Self {
        ServiceInfo {
            status: "ok",
            message: "A股自选股智能分析系统 - Vercel Edition",
            note: "This is a minimal deployment. For full analysis, use local or Docker deployment.",
            endpoints: EndpointIndex {
                root: "This page",
                health: "Health check",
                feishu: "Feishu webhook",
                dingtalk: "DingTalk webhook",
            },
        }
    }
}

/// Root endpoint: fixed service description.
pub async fn service_info() -> Result<Response, GatewayError> {
    json_response(StatusCode::OK, &ServiceInfo::current())
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub deployment: String,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Result<Response, GatewayError> {
    json_response(
        StatusCode::OK,
        &HealthResponse {
            status: "healthy",
            deployment: state.config.deployment_tag.clone(),
        },
    )
}

/// 404 body for any unmatched (method, path) pair.
#[derive(Serialize)]
pub struct NotFoundResponse {
    pub error: &'static str,
    pub path: String,
}

/// Fallback endpoint for unknown paths and wrong-method requests.
pub async fn not_found(uri: Uri) -> Result<Response, GatewayError> {
    json_response(
        StatusCode::NOT_FOUND,
        &NotFoundResponse {
            error: "Not Found",
            path: uri.path().to_string(),
        },
    )
}

// =============================================================================
// Feishu Webhook
// =============================================================================

/// URL-verification echo.
#[derive(Serialize)]
pub struct ChallengeEcho {
    pub challenge: Value,
}

/// Event-callback acknowledgment.
#[derive(Serialize)]
pub struct FeishuAck {
    pub code: i64,
    pub msg: &'static str,
    pub event_type: String,
    pub note: &'static str,
}

/// Pull `header.event_type` out of an event payload, degrading to an empty
/// string when any level of the chain is missing or not a string.
fn extract_event_type(data: &Value) -> &str {
    data.get("header")
        .and_then(|header| header.get("event_type"))
        .and_then(Value::as_str)
        .unwrap_or("")
}

/// Feishu webhook endpoint: URL verification and message receipt.
pub async fn feishu_webhook(body: Bytes) -> Result<Response, GatewayError> {
    let data: Value = serde_json::from_slice(&body).map_err(|_| GatewayError::InvalidJson)?;

    // URL verification challenge. Must win over every other field.
    if let Some(challenge) = data.get("challenge") {
        return json_response(
            StatusCode::OK,
            &ChallengeEcho {
                challenge: challenge.clone(),
            },
        );
    }

    // Event callback: acknowledge receipt only.
    json_response(
        StatusCode::OK,
        &FeishuAck {
            code: 0,
            msg: "received",
            event_type: extract_event_type(&data).to_string(),
            note: FEISHU_ACK_NOTE,
        },
    )
}

// =============================================================================
// DingTalk Webhook
// =============================================================================

/// Fixed text-message reply in DingTalk's message shape.
#[derive(Serialize)]
pub struct DingTalkReply {
    pub msgtype: &'static str,
    pub text: DingTalkText,
}

#[derive(Serialize)]
pub struct DingTalkText {
    pub content: &'static str,
}

impl DingTalkReply {
    fn ack() -> Self {
        DingTalkReply {
            msgtype: "text",
            text: DingTalkText {
                content: DINGTALK_ACK_TEXT,
            },
        }
    }
}

/// DingTalk webhook endpoint: validate the body, acknowledge, nothing else.
pub async fn dingtalk_webhook(body: Bytes) -> Result<Response, GatewayError> {
    // Content is ignored; only well-formedness matters.
    let _data: Value = serde_json::from_slice(&body).map_err(|_| GatewayError::InvalidJson)?;

    json_response(StatusCode::OK, &DingTalkReply::ack())
}
