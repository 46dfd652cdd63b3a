//! API error types and their HTTP mapping.

use std::str::FromStr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::gemini::GeminiError;

/// What to do when the upstream generation call itself fails.
///
/// The two behaviors observed in the field: return a proper gateway fault so
/// API consumers can tell "model said X" from "call failed", or fold the
/// failure into a 200 `{error}` envelope like every other degraded answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpstreamErrorPolicy {
    /// Upstream failure becomes HTTP 502 with an `{error}` body.
    #[default]
    Status,
    /// Upstream failure becomes HTTP 200 with an `{error}` body.
    Envelope,
}

impl FromStr for UpstreamErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(Self::Status),
            "envelope" => Ok(Self::Envelope),
            other => Err(format!("unknown upstream error policy: {other:?}")),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field is missing or unusable.
    #[error("{0}")]
    Validation(String),

    /// The generation call failed; the response shape depends on the
    /// configured policy.
    #[error("{source}")]
    Upstream {
        source: GeminiError,
        policy: UpstreamErrorPolicy,
    },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn upstream(source: GeminiError, policy: UpstreamErrorPolicy) -> Self {
        Self::Upstream { source, policy }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::Upstream { source, policy } => {
                let status = match policy {
                    UpstreamErrorPolicy::Status => StatusCode::BAD_GATEWAY,
                    UpstreamErrorPolicy::Envelope => StatusCode::OK,
                };
                (status, source.to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_parses_both_variants() {
        assert_eq!(
            "status".parse::<UpstreamErrorPolicy>().unwrap(),
            UpstreamErrorPolicy::Status
        );
        assert_eq!(
            "envelope".parse::<UpstreamErrorPolicy>().unwrap(),
            UpstreamErrorPolicy::Envelope
        );
        assert!("lenient".parse::<UpstreamErrorPolicy>().is_err());
    }

    #[test]
    fn default_policy_is_status() {
        assert_eq!(UpstreamErrorPolicy::default(), UpstreamErrorPolicy::Status);
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let response = ApiError::validation("text is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_status_policy_maps_to_bad_gateway() {
        let err = GeminiError::Status {
            status: reqwest::StatusCode::FORBIDDEN,
            body: "quota".to_string(),
        };
        let response =
            ApiError::upstream(err, UpstreamErrorPolicy::Status).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn upstream_envelope_policy_maps_to_ok() {
        let err = GeminiError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: String::new(),
        };
        let response =
            ApiError::upstream(err, UpstreamErrorPolicy::Envelope).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
