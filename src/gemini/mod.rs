pub mod client;
pub mod interface;
pub mod types;

pub use client::{GeminiClient, DEFAULT_BASE_URL};
pub use interface::{GeminiError, GeminiInterface};
pub use types::{GenerateRequest, ResponseSchema};
