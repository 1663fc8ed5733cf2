//! Payload extraction (panic-free).
//!
//! Parsing rules:
//! - Never index into the buffer; decode UTF-8 and JSON through fallible APIs.
//! - Never `unwrap()` / `expect()` / `panic!()` in production paths.
//!
//! A packet payload is UTF-8 JSON text encoding an object; the only
//! recognized key is `"message"`. Empty-ish values (absent key, `null`, `""`,
//! `false`, `0`, `[]`, `{}`) are treated as "nothing to forward" rather than
//! as errors, mirroring the upstream sender contract.

use serde_json::Value;

use crate::error::{Result, RoomLinkError};

/// Outcome of interpreting a packet payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// A non-empty message to forward.
    Message(String),
    /// Valid payload, but no message present. Silent no-op for callers.
    MissingMessage,
}

/// Decode packet bytes as UTF-8 JSON and extract the `"message"` value.
///
/// Errors:
/// - `RoomLinkError::Utf8` when the bytes are not UTF-8 text.
/// - `RoomLinkError::Json` when the text is not JSON, or the JSON root is
///   not an object.
pub fn extract_message(data: &[u8]) -> Result<Extraction> {
    let text = std::str::from_utf8(data)
        .map_err(|e| RoomLinkError::Utf8(e.to_string()))?;

    let payload: Value =
        serde_json::from_str(text).map_err(|e| RoomLinkError::Json(e.to_string()))?;

    let obj = payload
        .as_object()
        .ok_or_else(|| RoomLinkError::Json("payload root is not an object".into()))?;

    let Some(value) = obj.get("message") else {
        return Ok(Extraction::MissingMessage);
    };

    Ok(render_truthy(value))
}

/// Render a truthy `"message"` value as text, or report it empty.
///
/// Non-string values are used as-is (no type check enforced upstream): truthy
/// ones are rendered as their compact JSON text.
fn render_truthy(value: &Value) -> Extraction {
    match value {
        Value::Null => Extraction::MissingMessage,
        Value::Bool(false) => Extraction::MissingMessage,
        Value::Bool(true) => Extraction::Message("true".to_string()),
        Value::Number(n) => {
            if is_zero(n) {
                Extraction::MissingMessage
            } else {
                Extraction::Message(n.to_string())
            }
        }
        Value::String(s) => {
            if s.is_empty() {
                Extraction::MissingMessage
            } else {
                Extraction::Message(s.clone())
            }
        }
        Value::Array(a) => {
            if a.is_empty() {
                Extraction::MissingMessage
            } else {
                Extraction::Message(value.to_string())
            }
        }
        Value::Object(o) => {
            if o.is_empty() {
                Extraction::MissingMessage
            } else {
                Extraction::Message(value.to_string())
            }
        }
    }
}

fn is_zero(n: &serde_json::Number) -> bool {
    if let Some(i) = n.as_i64() {
        return i == 0;
    }
    if let Some(u) = n.as_u64() {
        return u == 0;
    }
    n.as_f64().map(|f| f == 0.0).unwrap_or(false)
}
