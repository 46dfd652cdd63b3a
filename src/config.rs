//! Process configuration, sourced from the environment.
//!
//! The only required value is the Gemini API key; everything else has a
//! default that matches the deployed service. `GEMINI_BASE_URL` exists so
//! tests can point the client at a local mock upstream.

use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::error::UpstreamErrorPolicy;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Per-request timeout for the upstream call. `None` keeps the client's
    /// default, preserving the original no-timeout behavior.
    pub timeout: Option<Duration>,
    pub host: String,
    pub port: u16,
    pub frontend_dir: String,
    pub upstream_error_policy: UpstreamErrorPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY is not set; the Gemini credential must come from the environment")?;

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| crate::gemini::DEFAULT_BASE_URL.to_string());

        let timeout = match env::var("GEMINI_TIMEOUT_MS") {
            Ok(raw) => {
                let millis: u64 = raw
                    .parse()
                    .with_context(|| format!("GEMINI_TIMEOUT_MS is not a number: {raw:?}"))?;
                Some(Duration::from_millis(millis))
            }
            Err(_) => None,
        };

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a number: {raw:?}"))?,
            Err(_) => 8000,
        };

        let frontend_dir = env::var("FRONTEND_DIR").unwrap_or_else(|_| "frontend".to_string());

        let upstream_error_policy = match env::var("UPSTREAM_ERROR_POLICY") {
            Ok(raw) => match raw.parse::<UpstreamErrorPolicy>() {
                Ok(policy) => policy,
                Err(_) => bail!(
                    "UPSTREAM_ERROR_POLICY must be \"status\" or \"envelope\", got {raw:?}"
                ),
            },
            Err(_) => UpstreamErrorPolicy::default(),
        };

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout,
            host,
            port,
            frontend_dir,
            upstream_error_policy,
        })
    }
}
