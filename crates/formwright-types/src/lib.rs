//! Form-schema types and the pure stages of the generation pipeline.
//!
//! | Module | Stage |
//! |---|---|
//! | [`prompt`] / [`fragments`] | free text ➜ instruction messages |
//! | [`extract`] | raw completion text ➜ candidate field objects |
//! | [`validate`] | candidates ➜ [`field::FieldDescriptor`]s, all or nothing |
//!
//! None of these stages performs I/O, so each is testable in isolation.
pub mod extract;
pub mod field;
pub mod fragments;
pub mod prompt;
pub mod validate;

pub use field::{FieldDescriptor, FieldEnvelope, FieldType};
