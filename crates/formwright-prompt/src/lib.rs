//! Prompt composition helpers: a markdown [`builder::PromptBuilder`] and a
//! [`chain::PromptChain`] that concatenates prompt fragments.
pub mod builder;
pub mod chain;
