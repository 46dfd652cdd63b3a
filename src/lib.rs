//! Thin HTTP relay to the Gemini generative-language API for medical-safety
//! checks: claim verification, safety Q&A, and medicine-strip photo
//! identification. Each endpoint templates a fixed instruction, asks for
//! schema-constrained JSON, and returns the parsed model output.

pub mod config;
pub mod error;
pub mod gemini;
pub mod handlers;
pub mod normalize;
pub mod prompts;
pub mod routes;
pub mod schemas;
pub mod state;

pub use config::Config;
pub use error::{ApiError, UpstreamErrorPolicy};
pub use routes::app;
pub use state::AppState;
