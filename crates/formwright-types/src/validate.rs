//! Turns candidate objects into [`FieldDescriptor`]s, all or nothing.
//!
//! The candidates are folded left to right; the first structural defect
//! stops the fold and becomes [`FormError::InvalidFieldAt`] with the
//! candidate's index. Optional attributes are coerced rather than rejected:
//!
//! | Attribute | Normalisation |
//! |---|---|
//! | `required` | truthy ➜ `true`; `false`, `0`, `""`, `null` or missing ➜ `false` |
//! | `options` | missing or not an array ➜ `[]`; numbers and booleans become strings |
//! | `placeholder` | missing or not a string ➜ `""` |
//! | `defaultValue` | missing or `null` ➜ absent; any other value kept as-is |
use formwright_core::error::{FieldDefect, FormError, Result};
use serde_json::{Map, Value};

use crate::field::{FieldDescriptor, FieldType};

/// Validate every candidate, preserving order.
pub fn validate_fields(candidates: &[Value]) -> Result<Vec<FieldDescriptor>> {
    candidates.iter().enumerate().try_fold(
        Vec::with_capacity(candidates.len()),
        |mut fields, (index, candidate)| {
            let field = validate_field(candidate)
                .and_then(|field| {
                    if fields.iter().any(|seen: &FieldDescriptor| seen.name == field.name) {
                        Err(FieldDefect::DuplicateName(field.name))
                    } else {
                        Ok(field)
                    }
                })
                .map_err(|defect| FormError::InvalidFieldAt { index, defect })?;

            fields.push(field);
            Ok(fields)
        },
    )
}

/// Validate a single candidate in isolation.
pub fn validate_field(candidate: &Value) -> std::result::Result<FieldDescriptor, FieldDefect> {
    let Value::Object(entry) = candidate else {
        return Err(FieldDefect::NotAnObject);
    };

    let label = required_text(entry, "label")?;
    let name = required_text(entry, "name")?;
    let type_name = required_text(entry, "type")?;
    let field_type =
        FieldType::parse(type_name).ok_or_else(|| FieldDefect::UnknownType(type_name.to_owned()))?;

    let options = coerce_options(entry.get("options"))?;
    if field_type.requires_options() && options.is_empty() {
        return Err(FieldDefect::MissingOptions(field_type.to_string()));
    }

    Ok(FieldDescriptor {
        label: label.to_owned(),
        name: name.to_owned(),
        field_type,
        required: coerce_required(entry.get("required")),
        options,
        placeholder: entry
            .get("placeholder")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned(),
        default_value: entry.get("defaultValue").filter(|v| !v.is_null()).cloned(),
    })
}

/// A present, non-blank string; anything else counts as missing.
fn required_text<'e>(
    entry: &'e Map<String, Value>,
    key: &'static str,
) -> std::result::Result<&'e str, FieldDefect> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .ok_or(FieldDefect::MissingProperty(key))
}

/// JavaScript-style truthiness, which is what form renderers apply to the
/// flag.
fn coerce_required(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

fn coerce_options(value: Option<&Value>) -> std::result::Result<Vec<String>, FieldDefect> {
    let Some(Value::Array(items)) = value else {
        return Ok(Vec::new());
    };

    items
        .iter()
        .enumerate()
        .map(|(position, item)| match item {
            Value::String(text) => Ok(text.clone()),
            Value::Number(number) => Ok(number.to_string()),
            Value::Bool(flag) => Ok(flag.to_string()),
            _ => Err(FieldDefect::InvalidOption(position)),
        })
        .collect()
}
