use std::time::Duration;

use formwright_core::error::FormError;
use reqwest::StatusCode;

/// Every failure mode the HTTP client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("completion API key not configured")]
    MissingApiKey,

    #[error("completion API key is not a valid header value")]
    InvalidApiKey,

    #[error("request timeout after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("response format error: {0}")]
    Format(String),
}

impl From<OpenAiError> for FormError {
    fn from(value: OpenAiError) -> Self {
        match value {
            OpenAiError::MissingApiKey | OpenAiError::InvalidApiKey => {
                FormError::MisconfiguredCredentials
            }
            OpenAiError::Timeout(timeout) => FormError::UpstreamTimeout { timeout },
            OpenAiError::Http(err) => FormError::Transport(Box::new(err)),
            OpenAiError::Api { status, body } => FormError::UpstreamError {
                status: status.as_u16(),
                body,
            },
            OpenAiError::Format(message) => FormError::MalformedUpstreamResponse(message),
        }
    }
}
