use std::sync::Arc;

use crate::config::Config;
use crate::gemini::GeminiInterface;

/// Shared application state: the configuration plus the injected model
/// client. Nothing here is mutated after startup, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub model: Arc<dyn GeminiInterface>,
}

impl AppState {
    pub fn new(config: Config, model: Arc<dyn GeminiInterface>) -> Self {
        Self {
            config: Arc::new(config),
            model,
        }
    }
}
