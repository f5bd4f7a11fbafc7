use std::sync::Arc;

use crate::core::AppConfig;
use crate::llm::{Generate, OpenAiChat};
use crate::session::SessionStore;

pub struct AppState {
    pub store: SessionStore,
    pub generator: Arc<dyn Generate>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let generator = Arc::new(OpenAiChat::new(
            &config.llm_api_hostname,
            &config.llm_api_key,
            &config.llm_model,
            config.llm_timeout_secs,
        ));
        Self {
            store: SessionStore::new(),
            generator,
            config,
        }
    }
}
