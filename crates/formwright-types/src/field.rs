//! The unit the pipeline produces and the form renderer consumes.
use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input widget kinds a form can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Number,
    Checkbox,
    Radio,
    Select,
    Textarea,
    Password,
}

impl FieldType {
    pub const ALL: [FieldType; 8] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Number,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::Select,
        FieldType::Textarea,
        FieldType::Password,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Select => "select",
            FieldType::Textarea => "textarea",
            FieldType::Password => "password",
        }
    }

    /// `radio` and `select` pick from `options`, which must not be empty.
    pub fn requires_options(self) -> bool {
        matches!(self, FieldType::Radio | FieldType::Select)
    }

    /// Case-insensitive lookup, ignoring surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unsupported field type `{s}`"))
    }
}

/// One validated form input.
///
/// Serialises with camelCase keys; `defaultValue` is written as `null` when
/// absent so consumers always see all seven keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Human-readable caption shown next to the input.
    pub label: String,
    /// Machine identifier, unique within the form.
    pub name: String,
    /// Widget kind.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether the user must fill the field in.
    #[serde(default)]
    pub required: bool,
    /// Choices for `radio` and `select` fields, in display order.
    #[serde(default)]
    pub options: Vec<String>,
    /// Hint text shown while the input is empty.
    #[serde(default)]
    pub placeholder: String,
    /// Initial value of the input.
    #[serde(default)]
    pub default_value: Option<Value>,
}

/// The object shape the model is asked to answer with.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FieldEnvelope {
    /// Form fields in on-screen order.
    pub fields: Vec<FieldDescriptor>,
}
