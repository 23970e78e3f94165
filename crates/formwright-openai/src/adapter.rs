use std::{env, fmt, sync::Arc, time::Duration};

use formwright_core::error::Result;
use secrecy::SecretString;

use crate::client::OpenAiClient;

/// Groq's OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Upper bound for one completion round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Everything the HTTP client needs, built once at start-up.
pub struct CompletionConfig {
    pub base_url: String,
    /// `None` is accepted here; calls then fail with
    /// `FormError::MisconfiguredCredentials` instead of reaching the network.
    pub api_key: Option<SecretString>,
    pub timeout: Duration,
    pub max_idle_connections: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            max_idle_connections: 16,
        }
    }
}

impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .field("max_idle_connections", &self.max_idle_connections)
            .finish()
    }
}

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value that
/// implements [`formwright_core::provider::ChatCompletionProvider`].
///
/// It owns a shareable, connection-pooled client; clones of the adapter share
/// the same pool.
#[derive(Debug, Clone)]
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

impl OpenAiAdapter {
    pub fn client(&self) -> &OpenAiClient {
        &self.client
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use formwright_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("reqwest client should build");
/// ```
#[derive(Debug, Default)]
pub struct OpenAiAdapterBuilder {
    config: CompletionConfig,
}

impl OpenAiAdapterBuilder {
    /// Create a builder with default settings and no API key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already assembled configuration.
    pub fn from_config(config: CompletionConfig) -> Self {
        Self { config }
    }

    /// Read the `GROQ_API_KEY` environment variable. A missing or blank
    /// variable only surfaces on the first completion call.
    pub fn new_from_env() -> Self {
        Self::new().with_optional_api_key(env::var("GROQ_API_KEY").ok())
    }

    pub fn with_api_key(self, api_key: impl Into<String>) -> Self {
        self.with_optional_api_key(Some(api_key.into()))
    }

    /// Blank keys are treated as absent.
    pub fn with_optional_api_key(mut self, api_key: Option<String>) -> Self {
        self.config.api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .map(SecretString::from);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`formwright_core::error::FormError::Transport`] – if the TLS backend
    ///   cannot be initialised.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let client = OpenAiClient::new(self.config)?;

        Ok(OpenAiAdapter {
            client: Arc::new(client),
        })
    }
}
