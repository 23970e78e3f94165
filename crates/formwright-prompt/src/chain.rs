//! Simple **builder** that concatenates multiple values implementing
//! [`IntoPrompt`](formwright_core::template::IntoPrompt).
//!
//! A generation prompt is a fixed system directive followed by the user's
//! form description. `PromptChain` lines such fragments up in order without
//! mutable vectors or verbose `extend()` calls.
//!
//! ```rust
//! use formwright_prompt::chain::PromptChain;
//! use formwright_core::generic::{GenericMessage, GenericRole};
//!
//! let messages: Vec<GenericMessage> = PromptChain::new()
//!     .with(GenericMessage::new("Respond with JSON.".into(), GenericRole::System))
//!     .with(GenericMessage::new("A contact form".into(), GenericRole::User))
//!     .build();
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[1].role, GenericRole::User);
//! ```
use formwright_core::template::IntoPrompt;

/// Lightweight container that accumulates messages produced by
/// [`IntoPrompt`] implementors.
///
/// The single `Vec` field is private so the only way to obtain the result is
/// through [`Self::build`].
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `with` to the chain.
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.extend(with.into_prompt());
        self
    }

    /// Consume the builder and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}
