//! Unified error type exposed by **`formwright-core`**.
//!
//! Every stage of the generation pipeline (prompt building, the completion
//! call, schema extraction and field validation) reports failures through
//! [`FormError`]. Provider crates convert their internal errors into one of
//! these variants before bubbling them up, so the HTTP layer maps a single
//! enum onto status codes.
//!
//! All variants are local to one request; none of them is fatal to the
//! process and none is retried automatically.

use std::time::Duration;

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, FormError>;

#[derive(Debug, Error)]
pub enum FormError {
    /// The form description was blank after trimming.
    #[error("query is required and must not be blank")]
    EmptyQuery,

    /// The inbound request body could not be read as a generation request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No credential for the completion endpoint is configured.
    #[error("completion API key not configured")]
    MisconfiguredCredentials,

    /// The completion call did not finish within the configured bound.
    #[error("completion request timeout after {}ms", .timeout.as_millis())]
    UpstreamTimeout { timeout: Duration },

    /// The completion endpoint answered with a non-success status.
    #[error("completion endpoint returned status {status}")]
    UpstreamError { status: u16, body: String },

    /// A success response that lacks the completion text.
    #[error("invalid response structure from completion endpoint: {0}")]
    MalformedUpstreamResponse(String),

    /// Connection-level failure talking to the completion endpoint.
    #[error("completion request failed: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The completion text is not parseable JSON.
    #[error("received invalid JSON from the model: {0}")]
    InvalidModelJson(#[source] serde_json::Error),

    /// The parsed completion contains no array-shaped field list.
    #[error("response did not contain valid form fields")]
    NoFieldArrayFound,

    /// The candidate at `index` violates the field contract.
    #[error("field at position {index} is invalid: {defect}")]
    InvalidFieldAt { index: usize, defect: FieldDefect },
}

impl FormError {
    /// Stable, machine-friendly name of the variant, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FormError::EmptyQuery => "EmptyQuery",
            FormError::InvalidRequest(_) => "InvalidRequest",
            FormError::MisconfiguredCredentials => "MisconfiguredCredentials",
            FormError::UpstreamTimeout { .. } => "UpstreamTimeout",
            FormError::UpstreamError { .. } => "UpstreamError",
            FormError::MalformedUpstreamResponse(_) => "MalformedUpstreamResponse",
            FormError::Transport(_) => "Transport",
            FormError::InvalidModelJson(_) => "InvalidModelJSON",
            FormError::NoFieldArrayFound => "NoFieldArrayFound",
            FormError::InvalidFieldAt { .. } => "InvalidFieldAt",
        }
    }

    /// Index of the offending candidate for [`FormError::InvalidFieldAt`].
    pub fn field_index(&self) -> Option<usize> {
        match self {
            FormError::InvalidFieldAt { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Why a candidate field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldDefect {
    #[error("entry is not an object")]
    NotAnObject,

    #[error("missing or empty `{0}`")]
    MissingProperty(&'static str),

    #[error("unsupported type `{0}`")]
    UnknownType(String),

    #[error("`{0}` field has no options")]
    MissingOptions(String),

    #[error("option {0} is not a string, number or boolean")]
    InvalidOption(usize),

    #[error("name `{0}` is already used by an earlier field")]
    DuplicateName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_message_names_the_position() {
        let err = FormError::InvalidFieldAt {
            index: 2,
            defect: FieldDefect::MissingProperty("name"),
        };

        assert_eq!(
            err.to_string(),
            "field at position 2 is invalid: missing or empty `name`"
        );
        assert_eq!(err.field_index(), Some(2));
        assert_eq!(err.kind(), "InvalidFieldAt");
    }

    #[test]
    fn timeout_message_reports_the_bound() {
        let err = FormError::UpstreamTimeout {
            timeout: Duration::from_secs(15),
        };

        assert_eq!(err.to_string(), "completion request timeout after 15000ms");
        assert_eq!(err.field_index(), None);
    }
}
