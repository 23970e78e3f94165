use std::{future::Future, pin::Pin};

use crate::{
    error::Result, generic::GenericChatCompletionResponse, model::Model, trace::RequestId,
};

/// A **backend** turns a chat prompt into a network call to a concrete provider
/// and returns the text of the first completion.
///
/// The trait is intentionally minimal:
///
/// * **One associated type** – the in-memory `Message` representation this
///   provider accepts.
/// * **One async-ish method** – `chat_complete`, which performs a *single*
///   non-streaming round-trip. No retries happen behind it.
///
/// The method returns a [`Pin<Box<dyn Future>>`] so we stay object-safe
/// without pulling in `async_trait`. Implementations must not borrow `self`
/// in the returned future; clone whatever shared handle they need.
pub trait ChatCompletionProvider: Send + Sync {
    /// Chat message type consumed by this backend.
    type Message: Send + Sync + 'static;

    /// Execute the chat prompt and return the provider's reply text.
    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p;
}

/// Hint asking the provider for a JSON object rather than free text.
pub fn json_object_response_format() -> serde_json::Value {
    serde_json::json!({ "type": "json_object" })
}

#[derive(Debug, Clone)]
pub struct ChatCompleteParameters<M: Clone> {
    pub messages: Vec<M>,
    pub model: Model,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub response_format: Option<serde_json::Value>,
    /// Correlation id of the generation request this call belongs to.
    pub request_id: Option<RequestId>,
}

impl<M: Clone> ChatCompleteParameters<M> {
    pub fn new(messages: Vec<M>, model: Model) -> Self {
        Self {
            messages,
            model,
            temperature: None,
            max_tokens: None,
            response_format: None,
            request_id: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_response_format(mut self, response_format: serde_json::Value) -> Self {
        self.response_format = Some(response_format);
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }
}
