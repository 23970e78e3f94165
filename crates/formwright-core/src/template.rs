//! Abstraction that turns *any* value into a list of chat messages.
//!
//! Prompt fragments (a static system directive, the user's form description,
//! …) implement [`IntoPrompt`] and are composed with
//! `formwright_prompt::chain::PromptChain`.
//!
//! ```rust
//! use formwright_core::template::IntoPrompt;
//! use formwright_core::generic::{GenericMessage, GenericRole};
//!
//! struct Hello;
//!
//! impl IntoPrompt for Hello {
//!     type Message = GenericMessage;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericMessage::new("Say hello!".into(), GenericRole::User)]
//!     }
//! }
//!
//! assert_eq!(Hello.into_prompt().len(), 1);
//! ```

/// Converts a value into a series of chat messages.
///
/// Provider crates typically use [`crate::generic::GenericMessage`], but a
/// back-end can require its own richer struct. By making the `Message` type
/// an **associated type** we keep the trait flexible without resorting to
/// dynamic dispatch.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// A single [`crate::generic::GenericMessage`] can be chained directly
/// without wrapping it in a struct.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
