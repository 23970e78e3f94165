//! Provider-agnostic building blocks shared by every Formwright crate.
//!
//! * [`error`] – the single error taxonomy of the generation pipeline.
//! * [`generic`] – chat messages that backends convert into their wire types.
//! * [`model`] – model identifiers and their defaults.
//! * [`provider`] – the [`provider::ChatCompletionProvider`] seam.
//! * [`template`] – [`template::IntoPrompt`], implemented by prompt fragments.
//! * [`trace`] – correlation ids for one generation request.
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod schema_util;
pub mod template;
pub mod trace;
