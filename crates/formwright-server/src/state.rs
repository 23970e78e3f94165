use std::sync::Arc;

use formwright::{FormGenerator, error::Result, openai::OpenAiAdapter};

use crate::{
    config::ServerConfig,
    store::{FormStore, InMemoryFormStore},
};

/// Shared by every handler; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub generator: FormGenerator<OpenAiAdapter>,
    pub store: Arc<dyn FormStore>,
}

impl AppState {
    pub fn new(generator: FormGenerator<OpenAiAdapter>, store: Arc<dyn FormStore>) -> Self {
        Self { generator, store }
    }

    /// Wire the HTTP backend and an empty in-memory store from `config`.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let backend = config.completion.build_backend()?;
        let generator = FormGenerator::new(backend, config.completion.generation_settings());

        Ok(Self::new(generator, Arc::new(InMemoryFormStore::new())))
    }
}
