//! Generic message and role types used by the *formwright-core* crate.
//!
//! They mirror the concepts exposed by chat-completion APIs: "system",
//! "user" and "assistant". Staying provider-agnostic lets us:
//!
//! * convert them into provider-specific structs via a simple `From`/`Into`,
//! * build and inspect prompts in unit tests without a transport layer.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single chat message, independent of any specific LLM provider.
///
/// * `content` – the raw UTF-8 text. Markdown is fine.
/// * `role` – see [`GenericRole`] for permitted values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub content: String,
    pub role: GenericRole,
}

impl GenericMessage {
    /// Convenience constructor mirroring the field order used by common HTTP
    /// APIs (`role`, then `content`).
    ///
    /// ```rust
    /// use formwright_core::generic::{GenericMessage, GenericRole};
    ///
    /// let sys = GenericMessage::new("You are a JSON generator.".into(),
    ///                               GenericRole::System);
    /// assert_eq!(sys.role, GenericRole::System);
    /// ```
    pub fn new(content: String, role: GenericRole) -> Self {
        Self { content, role }
    }
}

/// Chat roles recognised by chat-completion providers.
///
/// The `Display` implementation renders the canonical lowercase name.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    /// Global behaviour and output contract.
    System,
    /// Messages produced by the model.
    Assistant,
    /// Messages originating from the human user.
    User,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::Assistant => write!(f, "assistant"),
            GenericRole::User => write!(f, "user"),
        }
    }
}

/// Text of the first completion choice plus what the provider reports about
/// the call.
#[derive(Debug, Clone)]
pub struct GenericChatCompletionResponse {
    pub content: String,
    pub model: String,
    pub usage: Option<GenericUsageReport>,
}

#[derive(Debug, Clone, Copy)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}
