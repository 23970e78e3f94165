//! Helpers for turning Rust type information into JSON Schema that can be
//! shipped alongside a prompt. The JSON is produced with [`schemars`] and is
//! embedded in the system directive so the model sees the exact envelope
//! shape the extractor expects.

use schemars::{
    JsonSchema,
    r#gen::{SchemaGenerator, SchemaSettings},
};
use serde_json::{self, Value};

/// Generate a JSON Schema for the given `T` **inline**, i.e. without
/// `$ref` pointers to external definitions.
///
/// # Panics
///
/// Only if the generated root schema cannot be serialised into JSON, which
/// `schemars` never produces.
///
/// # Example
///
/// ```
/// use formwright_core::schema_util::derive_response_schema;
/// use schemars::JsonSchema;
///
/// #[derive(JsonSchema)]
/// struct Foo { bar: String }
///
/// let schema = derive_response_schema::<Foo>();
/// assert_eq!(schema["properties"]["bar"]["type"], "string");
/// ```
pub fn derive_response_schema<T>() -> Value
where
    T: JsonSchema + 'static,
{
    // Inline everything; completion models do not resolve `$ref`s.
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = SchemaGenerator::new(settings);
    let root = generator.into_root_schema_for::<T>();

    serde_json::to_value(root).expect("generated schema should be serialisable")
}
