//! Web server module for the webhook gateway.
//!
//! This module provides a thin, stateless gateway that:
//! - Answers health checks and a root service description
//! - Acknowledges Feishu webhooks (URL verification + event receipt)
//! - Acknowledges DingTalk webhooks with a fixed text reply
//!
//! No payload is processed beyond JSON validation; full analysis lives in
//! the local/Docker deployment.

pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};

pub use handlers::{
    dingtalk_webhook, feishu_webhook, health, not_found, service_info, AppState,
    DingTalkReply, FeishuAck, HealthResponse, NotFoundResponse, ServiceInfo,
};

/// Build the gateway router.
///
/// The router is constructed once at startup and reused for every request;
/// it holds no mutable state. Unknown paths and wrong-method requests on
/// known paths both fall through to the JSON 404 handler.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info).fallback(not_found))
        .route("/health", get(health).fallback(not_found))
        .route("/bot/feishu", post(feishu_webhook).fallback(not_found))
        .route("/bot/dingtalk", post(dingtalk_webhook).fallback(not_found))
        .fallback(not_found)
        .with_state(state)
}
