//! Shape checks and tolerant element parsing over untyped JSON.
//!
//! The envelope of a response is checked strictly: a wrong top-level shape is a
//! [`MalformedResponse`]. Elements inside a list are parsed one by one and any
//! element that does not coerce is dropped with a `debug` log line.

use super::{Endpoint, JsonShape};
use crate::error::MalformedResponse;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Parse response text, mapping a decode failure to [`MalformedResponse::NotJson`].
pub fn parse_text(text: &str, endpoint: Endpoint) -> Result<Value, MalformedResponse> {
    serde_json::from_str(text).map_err(|source| MalformedResponse::NotJson { endpoint, source })
}

/// Byte-slice variant of [`parse_text`].
pub fn parse_slice(bytes: &[u8], endpoint: Endpoint) -> Result<Value, MalformedResponse> {
    serde_json::from_slice(bytes).map_err(|source| MalformedResponse::NotJson { endpoint, source })
}

pub(crate) fn expect_object(
    value: &Value,
    endpoint: Endpoint,
) -> Result<&Map<String, Value>, MalformedResponse> {
    value
        .as_object()
        .ok_or_else(|| unexpected_shape(value, endpoint, JsonShape::Object))
}

pub(crate) fn expect_array(value: &Value, endpoint: Endpoint) -> Result<&[Value], MalformedResponse> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| unexpected_shape(value, endpoint, JsonShape::Array))
}

fn unexpected_shape(value: &Value, endpoint: Endpoint, expected: JsonShape) -> MalformedResponse {
    MalformedResponse::UnexpectedShape {
        endpoint,
        expected,
        found: JsonShape::of(value),
    }
}

/// Read a nested list field. Absent or `null` is an empty list.
///
/// A present field of any other kind is also read as empty: the envelope held,
/// only this field drifted.
pub(crate) fn array_field<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    endpoint: Endpoint,
) -> &'a [Value] {
    match object.get(key) {
        None | Some(Value::Null) => &[],
        Some(Value::Array(items)) => items.as_slice(),
        Some(other) => {
            tracing::warn!(
                endpoint = %endpoint,
                field = key,
                found = %JsonShape::of(other),
                "expected an array field, reading it as empty"
            );
            &[]
        }
    }
}

/// Deserialize each object element of `items` into `T`, dropping the rest.
///
/// Output order follows input order; `output.len() <= items.len()`.
pub(crate) fn parse_elements<T: DeserializeOwned>(
    items: &[Value],
    endpoint: Endpoint,
    what: &'static str,
) -> Vec<T> {
    let mut parsed = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if !item.is_object() {
            tracing::debug!(
                endpoint = %endpoint,
                index,
                found = %JsonShape::of(item),
                "skipping non-object {what}"
            );
            continue;
        }
        match <T as Deserialize>::deserialize(item) {
            Ok(element) => parsed.push(element),
            Err(err) => {
                tracing::debug!(endpoint = %endpoint, index, error = %err, "skipping malformed {what}");
            }
        }
    }
    parsed
}
