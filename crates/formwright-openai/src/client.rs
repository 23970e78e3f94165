use reqwest::{
    Client as HttpClient,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use secrecy::{ExposeSecret, SecretString};
use std::{fmt, time::Duration};

use crate::{
    adapter::CompletionConfig,
    api_v1::{ChatCompletionRequest, ChatCompletionResponse},
    error::OpenAiError,
};

/// Minimal HTTP client for an OpenAI-compatible *chat/completions* endpoint.
///
/// * Non-streaming only (one request ▶ one response), no retries.
/// * Every request is bounded by the configured timeout, body included.
/// * Owns a pooled `reqwest::Client`; share the client behind an `Arc`.
pub struct OpenAiClient {
    api_key: Option<SecretString>,
    http: HttpClient,
    base: String,
    timeout: Duration,
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base", &self.base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl OpenAiClient {
    /// Build a client with its own `reqwest` connection pool.
    pub fn new(config: CompletionConfig) -> Result<Self, OpenAiError> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.max_idle_connections)
            .build()?;

        Ok(Self::with_http(config, http))
    }

    /// Build with a caller-supplied `reqwest::Client` (proxy settings, custom
    /// TLS, …). The configured timeout is still applied per request.
    pub fn with_http(config: CompletionConfig, http: HttpClient) -> Self {
        Self {
            api_key: config.api_key,
            http,
            base: config.base_url.trim_end_matches('/').to_owned(),
            timeout: config.timeout,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn headers(&self) -> Result<HeaderMap, OpenAiError> {
        let api_key = self.api_key.as_ref().ok_or(OpenAiError::MissingApiKey)?;

        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
                .map_err(|_| OpenAiError::InvalidApiKey)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);
        Ok(headers)
    }

    fn classify(&self, err: reqwest::Error) -> OpenAiError {
        if err.is_timeout() {
            OpenAiError::Timeout(self.timeout)
        } else {
            OpenAiError::Http(err)
        }
    }

    /// Perform a **non-streaming** chat completion.
    ///
    /// Fails with [`OpenAiError::MissingApiKey`] before touching the network
    /// when no key is configured.
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenAiError> {
        let headers = self.headers()?;

        let url = format!("{}/chat/completions", self.base);
        let resp = self
            .http
            .post(url)
            .timeout(self.timeout)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.map_err(|err| self.classify(err))?;
            return Err(OpenAiError::Api { status, body });
        }

        let bytes = resp.bytes().await.map_err(|err| self.classify(err))?;
        serde_json::from_slice(&bytes)
            .map_err(|err| OpenAiError::Format(format!("response body is not valid JSON: {err}")))
    }
}
