//! Server configuration (Figment-based)
//!
//! Sources, later ones winning:
//! 1. Built-in defaults (Serialized)
//! 2. `formwright.toml` in the working directory, if present
//! 3. `FORMWRIGHT_*` environment variables, `__` separating nested keys
//!    (e.g. `FORMWRIGHT_COMPLETION__MODEL` -> `completion.model`)
//! 4. `GROQ_API_KEY` and `GROQ_MODEL`

use std::{fmt, time::Duration};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use formwright::{
    GenerationSettings,
    error::Result,
    model::Model,
    openai::{DEFAULT_BASE_URL, OpenAiAdapter, OpenAiAdapterBuilder},
};
use serde::{Deserialize, Serialize};

/// File merged over the defaults when it exists.
pub const CONFIG_FILE: &str = "formwright.toml";

#[derive(Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds to.
    pub bind: String,
    pub completion: CompletionSettings,
}

/// Settings for the completion endpoint and the sampling parameters.
#[derive(Clone, Serialize, Deserialize)]
pub struct CompletionSettings {
    pub base_url: String,
    /// Tolerated as absent; generation then fails per request with
    /// `MisconfiguredCredentials`.
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".into(),
            completion: CompletionSettings::default(),
        }
    }
}

impl Default for CompletionSettings {
    fn default() -> Self {
        let generation = GenerationSettings::default();
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: None,
            model: model_id(&generation.model),
            timeout_secs: 15,
            temperature: generation.temperature,
            max_tokens: generation.max_tokens,
        }
    }
}

fn model_id(model: &Model) -> String {
    match model {
        Model::Groq(model) => model.id().to_owned(),
        Model::Custom(id) => id.clone(),
    }
}

impl ServerConfig {
    /// Resolve the configuration from every source.
    pub fn load() -> std::result::Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(ServerConfig::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed("FORMWRIGHT_").split("__"))
            .merge(
                Env::raw()
                    .only(&["GROQ_API_KEY"])
                    .map(|_| "completion.api_key".into()),
            )
            .merge(
                Env::raw()
                    .only(&["GROQ_MODEL"])
                    .map(|_| "completion.model".into()),
            )
    }
}

impl CompletionSettings {
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            model: Model::from_id(&self.model),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    /// Build the pooled HTTP backend. Does not contact the endpoint.
    pub fn build_backend(&self) -> Result<OpenAiAdapter> {
        OpenAiAdapterBuilder::new()
            .with_base_url(self.base_url.trim_end_matches('/'))
            .with_optional_api_key(self.api_key.clone())
            .with_timeout(self.timeout())
            .build()
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind", &self.bind)
            .field("completion", &self.completion)
            .finish()
    }
}

impl fmt::Debug for CompletionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}
