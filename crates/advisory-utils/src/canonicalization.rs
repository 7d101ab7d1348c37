//! Canonical JSON emission (JCS, RFC 8785)

use anyhow::{Context, Result};
use serde::Serialize;

/// Emit a serializable value as canonical JSON.
///
/// Keys are sorted and whitespace is stripped so the same report always
/// produces byte-identical output.
pub fn emit_jcs<T: Serialize>(value: &T) -> Result<String> {
    let json_value =
        serde_json::to_value(value).with_context(|| "Failed to serialize value to JSON")?;
    let json_bytes = serde_json_canonicalizer::to_vec(&json_value)
        .with_context(|| "Failed to canonicalize JSON using JCS")?;
    String::from_utf8(json_bytes).with_context(|| "JCS output contained invalid UTF-8")
}
