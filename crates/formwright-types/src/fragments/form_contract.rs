//! The **system directive** that fixes the model's output contract.
//!
//! It names the JSON envelope, lists every allowed `type` value and embeds
//! the JSON Schema of [`FieldEnvelope`], so the extractor and validator can
//! assume the model was told exactly what they accept. The text depends on
//! nothing but the field types, so it is built once and reused.

use std::sync::LazyLock;

use formwright_core::{
    generic::{GenericMessage, GenericRole},
    schema_util::derive_response_schema,
    template::IntoPrompt,
};
use formwright_prompt::builder::PromptBuilder;

use crate::field::{FieldEnvelope, FieldType};

static CONTRACT: LazyLock<String> = LazyLock::new(render_contract);

/// Injects the output contract as a system message.
#[derive(Debug, Default, Clone, Copy)]
pub struct FormContractFragment;

impl FormContractFragment {
    pub fn new() -> Self {
        Self
    }

    /// The rendered directive text.
    pub fn text() -> &'static str {
        &CONTRACT
    }
}

impl IntoPrompt for FormContractFragment {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::new(CONTRACT.clone(), GenericRole::System)]
    }
}

fn allowed_types() -> String {
    FieldType::ALL
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_contract() -> String {
    let schema = derive_response_schema::<FieldEnvelope>();
    let schema = serde_json::to_string_pretty(&schema).unwrap_or_else(|_| schema.to_string());

    PromptBuilder::new()
        .add_line("You are a JSON generator for dynamic forms.")
        .add_line(
            "Respond with a valid JSON object containing a \"fields\" array and nothing else: \
             no prose, no markdown fences.",
        )
        .add_blank_line()
        .add_section_h2("Field contract")
        .add_bullet("`label`: human-readable caption, non-empty string (required)")
        .add_bullet("`name`: camelCase machine identifier, unique within the form (required)")
        .add_bullet(format_args!("`type`: one of {} (required)", allowed_types()))
        .add_bullet("`required`: true or false")
        .add_bullet("`options`: array of strings; only for radio and select, and never empty there")
        .add_bullet("`placeholder`: optional hint text")
        .add_bullet("`defaultValue`: optional initial value")
        .add_blank_line()
        .add_section_h2("JSON Schema")
        .add_text_json(schema)
        .finalize()
}
