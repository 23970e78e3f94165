//! Model identifiers used throughout the **formwright** workspace.
//!
//! Well-known models get an enum variant so application code never types
//! literal strings such as `"llama3-70b-8192"`. Anything else configured at
//! runtime (a new or self-hosted model) travels as [`Model::Custom`].
//!
//! ```rust
//! use formwright_core::model::{GroqModel, Model};
//!
//! assert_eq!(Model::from_id("llama3-70b-8192"), Model::Groq(GroqModel::Llama3_70b));
//! assert_eq!(Model::from_id("my-model"), Model::Custom("my-model".into()));
//! assert_eq!(Model::default(), Model::Groq(GroqModel::Llama3_70b));
//! ```

/// Universal identifier for an LLM model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Models hosted on the default (Groq, OpenAI-compatible) endpoint.
    Groq(GroqModel),
    /// Any other model id, sent to the endpoint verbatim.
    Custom(String),
}

impl Model {
    /// Resolve a configured model id, preferring the enumerated variants.
    pub fn from_id(id: &str) -> Self {
        GroqModel::ALL
            .into_iter()
            .find(|model| model.id() == id)
            .map(Model::Groq)
            .unwrap_or_else(|| Model::Custom(id.to_owned()))
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Groq(GroqModel::Llama3_70b)
    }
}

/// Models known to work with the form-generation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroqModel {
    Llama3_70b,
    Llama3_8b,
    Llama3_3_70bVersatile,
    Llama3_1_8bInstant,
    Mixtral8x7b,
}

impl GroqModel {
    pub const ALL: [GroqModel; 5] = [
        GroqModel::Llama3_70b,
        GroqModel::Llama3_8b,
        GroqModel::Llama3_3_70bVersatile,
        GroqModel::Llama3_1_8bInstant,
        GroqModel::Mixtral8x7b,
    ];

    /// The id the provider expects on the wire.
    pub fn id(self) -> &'static str {
        match self {
            GroqModel::Llama3_70b => "llama3-70b-8192",
            GroqModel::Llama3_8b => "llama3-8b-8192",
            GroqModel::Llama3_3_70bVersatile => "llama-3.3-70b-versatile",
            GroqModel::Llama3_1_8bInstant => "llama-3.1-8b-instant",
            GroqModel::Mixtral8x7b => "mixtral-8x7b-32768",
        }
    }
}

impl From<GroqModel> for Model {
    fn from(val: GroqModel) -> Self {
        Model::Groq(val)
    }
}
