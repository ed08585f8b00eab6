//! AStock Gateway - minimal webhook acknowledgment endpoint.
//!
//! This library backs the `astock-gateway` binary: a thin, stateless HTTP
//! surface that answers health checks and acknowledges Feishu/DingTalk bot
//! webhooks. It performs no analysis; full processing runs in the
//! local/Docker deployment.
//!
//! ## Request flow
//!
//! ```text
//! Webhook → Router → handler → fixed JSON acknowledgment
//! ```

pub mod config;
pub mod error;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use error::GatewayError;
pub use web::{create_router, AppState};
