//! JSON Schema generation for [`Options`].
//!
//! Clients can ship the schema to editors for completion of settings keys.

use crate::types::Options;
use schemars::{Schema, generate::SchemaSettings};
use serde_json::Value;

/// Generate the JSON Schema for Options.
pub fn schema() -> Schema {
    SchemaSettings::default()
        .into_generator()
        .into_root_schema_for::<Options>()
}

/// Generate the JSON Schema as a pretty-printed JSON string.
pub fn schema_json_pretty() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema())
}

/// Every declared key, nested the way the client document nests them.
///
/// Options has no skipped fields, so its default serialization spells out
/// every key. Serializing plain strings, bools and lists cannot fail; `Null`
/// is only a fallback.
pub(crate) fn declared_shape() -> Value {
    serde_json::to_value(Options::default()).unwrap_or_default()
}

/// Dotted paths of every leaf key the decoder recognizes, legacy keys included.
pub fn recognized_keys() -> Vec<String> {
    let mut keys = vec![];
    if let Value::Object(map) = declared_shape() {
        collect_leaf_keys(&map, "", &mut keys);
    }
    keys
}

fn collect_leaf_keys(map: &serde_json::Map<String, Value>, prefix: &str, keys: &mut Vec<String>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(nested) => collect_leaf_keys(nested, &path, keys),
            _ => keys.push(path),
        }
    }
}
