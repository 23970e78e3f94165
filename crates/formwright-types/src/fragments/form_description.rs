//! The **user directive**: the free-text form description, embedded
//! verbatim after a short restatement of the per-field format.

use formwright_core::{
    error::{FormError, Result},
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};
use formwright_prompt::builder::PromptBuilder;

const FIELD_FORMAT: &str = r#"{
  "label": "Field Label",
  "name": "fieldName",
  "type": "text" | "email" | "number" | "checkbox" | "radio" | "select" | "textarea" | "password",
  "required": true | false,
  "options": ["Option1", "Option2"]
}"#;

/// A non-blank form description borrowed from the request.
#[derive(Debug, Clone, Copy)]
pub struct FormDescriptionFragment<'a> {
    query: &'a str,
}

impl<'a> FormDescriptionFragment<'a> {
    /// Fails with [`FormError::EmptyQuery`] if `query` is blank.
    pub fn new(query: &'a str) -> Result<Self> {
        if query.trim().is_empty() {
            return Err(FormError::EmptyQuery);
        }
        Ok(Self { query })
    }

    pub fn query(&self) -> &'a str {
        self.query
    }
}

impl IntoPrompt for FormDescriptionFragment<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        let content = PromptBuilder::new()
            .add_line("Each form field must follow this format (options only for radio/select):")
            .add_text_json(FIELD_FORMAT)
            .add_blank_line()
            .add_line(format_args!(
                "Generate a form with these requirements: {}",
                self.query
            ))
            .finalize();

        vec![GenericMessage::new(content, GenericRole::User)]
    }
}
