use formwright_core::generic::{GenericMessage, GenericRole, GenericUsageReport};
use formwright_core::provider::ChatCompleteParameters;
use serde::{Deserialize, Serialize};

use crate::impl_builder_methods;
use crate::model_map::map_model;

use super::common;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<serde_json::Value>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model,
            messages,
            temperature: None,
            max_tokens: None,
            response_format: None,
        }
    }
}

impl_builder_methods!(
    ChatCompletionRequest,
    temperature: f64,
    max_tokens: u32,
    response_format: serde_json::Value
);

impl<M> From<ChatCompleteParameters<M>> for ChatCompletionRequest
where
    M: Into<ChatCompletionMessage> + Clone,
{
    fn from(value: ChatCompleteParameters<M>) -> Self {
        Self {
            model: map_model(&value.model).into_owned(),
            messages: value.messages.into_iter().map(Into::into).collect(),
            temperature: value.temperature,
            max_tokens: value.max_tokens,
            response_format: value.response_format,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    System,
    Assistant,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
}

/// Assistant message inside a choice. Every part is optional: the endpoint
/// is not trusted to send a complete body even with a 2xx status.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ChatCompletionMessageForResponse {
    pub role: Option<MessageRole>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ChatCompletionChoice {
    pub index: i64,
    pub message: Option<ChatCompletionMessageForResponse>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    pub model: Option<String>,
    pub choices: Vec<ChatCompletionChoice>,
    pub usage: Option<common::Usage>,
}

impl ChatCompletionResponse {
    /// Trimmed text of the first choice, if present and non-blank.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
            .map(str::trim)
            .filter(|content| !content.is_empty())
    }

    pub fn usage_report(&self) -> Option<GenericUsageReport> {
        self.usage.map(|usage| GenericUsageReport {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        })
    }
}

impl From<GenericRole> for MessageRole {
    fn from(value: GenericRole) -> Self {
        match value {
            GenericRole::System => MessageRole::System,
            GenericRole::Assistant => MessageRole::Assistant,
            GenericRole::User => MessageRole::User,
        }
    }
}

impl From<GenericMessage> for ChatCompletionMessage {
    fn from(value: GenericMessage) -> Self {
        Self {
            role: value.role.into(),
            content: value.content,
        }
    }
}
