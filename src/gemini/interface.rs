use async_trait::async_trait;
use thiserror::Error;

use super::types::GenerateRequest;

/// Failure modes of a generation call, caught at the adapter boundary so the
/// HTTP layer can apply its upstream-error policy instead of propagating an
/// unhandled fault.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// The HTTP request itself failed (connect, TLS, timeout).
    #[error("generative language request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status (auth, quota, bad request).
    #[error("generative language API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The API answered 2xx but the body was not a generateContent response.
    #[error("could not decode generative language response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Interface to the generative model.
///
/// The concrete client is injected into application state as a trait object,
/// so tests can substitute a fake that returns canned text. Implementations
/// return the model's raw text output; JSON-ness is the normalizer's problem.
#[async_trait]
pub trait GeminiInterface: Send + Sync {
    /// Run one synchronous generation call and return the raw text output.
    async fn generate_content(&self, request: GenerateRequest) -> Result<String, GeminiError>;
}
