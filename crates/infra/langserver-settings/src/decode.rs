//! Decoding of untyped client documents into [`Options`].
//!
//! The document is deserialized once, through two wrapping deserializers:
//! - `serde_ignored` records every key that has no declared field
//! - `serde_path_to_error` tracks the key path of a type mismatch
//!
//! Unknown keys never fail a decode. A value of the wrong kind for a declared
//! field always does, and no partial options are returned in that case.

use crate::error::DecodeError;
use crate::schema::declared_shape;
use crate::types::Options;
use serde_json::Value;

/// Result of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedOptions {
    /// The typed settings.
    pub options: Options,

    /// Dotted paths of input keys that matched no declared field.
    pub unused_keys: Vec<String>,
}

/// Decode an untyped nested document into typed options.
///
/// An explicit `null` under a declared key is treated like an absent key, a
/// `null` list element decodes to the element's zero value, and a `null`
/// document decodes to default options. Undeclared keys are reported as
/// unused whatever their value.
///
/// # Example
/// ```
/// use serde_json::json;
/// use langserver_settings::decode_options;
///
/// let decoded = decode_options(json!({"commandPrefix": "tf", "bogus": 1})).unwrap();
/// assert_eq!(decoded.options.command_prefix, "tf");
/// assert_eq!(decoded.unused_keys, vec!["bogus".to_string()]);
/// ```
pub fn decode_options(input: Value) -> Result<DecodedOptions, DecodeError> {
    let input = match input {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => strip_declared_nulls(other, &declared_shape()),
    };

    let mut unused_keys = Vec::new();
    let mut record_unused = |path: serde_ignored::Path<'_>| unused_keys.push(path.to_string());
    let deserializer = serde_ignored::Deserializer::new(input, &mut record_unused);

    let options: Options = serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let key = err.path().to_string();
        DecodeError {
            key,
            message: err.into_inner().to_string(),
        }
    })?;

    tracing::debug!(unused = unused_keys.len(), "decoded settings document");

    Ok(DecodedOptions {
        options,
        unused_keys,
    })
}

/// Drop `null` entries whose key is declared at that level of `shape`.
///
/// Undeclared keys are kept as-is so the decoder still reports them.
fn strip_declared_nulls(value: Value, shape: &Value) -> Value {
    match (value, shape) {
        (Value::Object(map), Value::Object(fields)) => Value::Object(
            map.into_iter()
                .filter_map(|(key, v)| match fields.get(&key) {
                    Some(_) if v.is_null() => None,
                    Some(field) => Some((key, strip_declared_nulls(v, field))),
                    None => Some((key, v)),
                })
                .collect(),
        ),
        (other, _) => other,
    }
}
