//! # `formwright` – The umbrella crate
//!
//! Turns a natural-language form description into a validated list of
//! [`types::FieldDescriptor`]s by asking a hosted language model.
//!
//! | Crate                    | What it provides                                                        |
//! |--------------------------|-------------------------------------------------------------------------|
//! | **`formwright-core`**    | Error taxonomy, provider trait, generic messages, request correlation   |
//! | **`formwright-prompt`**  | Markdown prompt builder and fragment chaining                           |
//! | **`formwright-types`**   | Field descriptors, prompt fragments, schema extraction, validation      |
//! | **`formwright-openai`**  | HTTP backend for OpenAI-compatible chat completions *(feature `openai`)* |
//!
//! The `openai` feature is on by default. Without it the crate stays
//! transport-free and callers bring their own
//! [`provider::ChatCompletionProvider`].
//!
//! [`FormGenerator`] runs the whole pipeline:
//!
//! ```text
//! query ─► prompt ─► completion ─► extract ─► validate ─► GenerationResult
//! ```
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use formwright::{FormGenerator, GenerationRequest, GenerationSettings};
//! use formwright::openai::OpenAiAdapterBuilder;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = OpenAiAdapterBuilder::new_from_env().build()?;
//!     let generator = FormGenerator::new(backend, GenerationSettings::default());
//!
//!     let request = GenerationRequest::accept("A bug report form with severity");
//!     let result = generator.generate(&request).await?;
//!     for field in &result.fields {
//!         println!("{} ({})", field.label, field.field_type);
//!     }
//!     Ok(())
//! }
//! ```
mod generator;

pub use formwright_core::*;
pub use formwright_prompt as prompt;
pub use formwright_types as types;

#[cfg(feature = "openai")]
pub use formwright_openai as openai;

pub use generator::{FormGenerator, GenerationRequest, GenerationResult, GenerationSettings};
