//! Recovers the candidate field list from untrusted completion text.
//!
//! Models are asked for `{"fields": [...]}` but frequently answer with a bare
//! array or rename the key. Parsing is therefore strict about JSON syntax and
//! liberal about where the array sits: the [`EXTRACTION_ORDER`] strategies
//! are tried in sequence and the first match wins. Only the top level of the
//! parsed value is searched.
use std::fmt;

use formwright_core::error::{FormError, Result};
use serde_json::Value;

/// One way of locating the field array inside a parsed completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// The completion itself is an array.
    TopLevelArray,
    /// An object property with this key holds an array.
    Property(&'static str),
    /// The first object property, in document order, whose value is an array.
    FirstArrayProperty,
}

/// Precedence of the strategies; earlier entries win.
pub const EXTRACTION_ORDER: [ExtractionStrategy; 5] = [
    ExtractionStrategy::TopLevelArray,
    ExtractionStrategy::Property("fields"),
    ExtractionStrategy::Property("form"),
    ExtractionStrategy::Property("data"),
    ExtractionStrategy::FirstArrayProperty,
];

impl ExtractionStrategy {
    /// The array this strategy finds in `value`, if any.
    ///
    /// A named property that exists but does not hold an array is no match,
    /// so the search moves on to the next strategy.
    pub fn locate<'v>(&self, value: &'v Value) -> Option<&'v [Value]> {
        match (self, value) {
            (ExtractionStrategy::TopLevelArray, Value::Array(items)) => Some(items.as_slice()),
            (ExtractionStrategy::Property(key), Value::Object(entries)) => {
                entries.get(*key).and_then(Value::as_array).map(Vec::as_slice)
            }
            (ExtractionStrategy::FirstArrayProperty, Value::Object(entries)) => entries
                .values()
                .find_map(Value::as_array)
                .map(Vec::as_slice),
            _ => None,
        }
    }
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionStrategy::TopLevelArray => f.write_str("top-level array"),
            ExtractionStrategy::Property(key) => write!(f, "`{key}` property"),
            ExtractionStrategy::FirstArrayProperty => f.write_str("first array-valued property"),
        }
    }
}

/// Candidate field objects borrowed from the parsed completion.
#[derive(Debug, Clone, Copy)]
pub struct ExtractedFields<'v> {
    pub strategy: ExtractionStrategy,
    pub candidates: &'v [Value],
}

/// Parse the completion text as JSON. No repair is attempted.
pub fn parse_completion(raw: &str) -> Result<Value> {
    serde_json::from_str(raw.trim()).map_err(FormError::InvalidModelJson)
}

/// Run [`EXTRACTION_ORDER`] against an already parsed completion.
pub fn locate_field_array(value: &Value) -> Result<ExtractedFields<'_>> {
    EXTRACTION_ORDER
        .iter()
        .find_map(|strategy| {
            strategy.locate(value).map(|candidates| ExtractedFields {
                strategy: *strategy,
                candidates,
            })
        })
        .ok_or(FormError::NoFieldArrayFound)
}
