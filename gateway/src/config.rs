//! Configuration module for environment variable parsing.
//!
//! The process environment is assumed to be fully populated before startup;
//! any secret/env-file loading happens outside this binary.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Deployment tag reported by the health endpoint
    pub deployment_tag: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            deployment_tag: env::var("DEPLOYMENT").unwrap_or_else(|_| "vercel".to_string()),
        }
    }
}
