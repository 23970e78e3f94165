//! OpenAI-compatible chat-completion backend (Groq by default).
//!
//! Plug an [`OpenAiAdapter`] into `formwright::FormGenerator`; everything
//! provider-specific (wire structs, HTTP, error classification) stays here.
mod adapter;
mod client;
mod model_map;
mod provider_impl_chat;

pub mod api_v1;
pub mod error;

pub use adapter::{
    CompletionConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, OpenAiAdapter, OpenAiAdapterBuilder,
};
pub use client::OpenAiClient;
