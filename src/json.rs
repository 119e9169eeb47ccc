//! JSON request templates.
//!
//! Templates are read into an insertion-ordered [`Map`] so that a read,
//! override and write cycle keeps the file's key order and the output stays
//! diff-stable.
//!
//! # Example
//!
//! ```no_run
//! use acceptance_suite::json;
//! use serde_json::json;
//!
//! # fn example() -> acceptance_suite::Result<()> {
//! let template = json::read_as_map("tests/data/request_body.json")?;
//! let body = json::with_override(template, "name", json!("Renamed"));
//! println!("{}", json::to_json_string(&body)?);
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};

/// Reads a JSON object from `path`.
///
/// # Errors
///
/// - [`Error::TemplateRead`] if the file cannot be read
/// - [`Error::Json`] if the content is not valid JSON
/// - [`Error::InvalidTemplate`] if the top level is not an object
pub fn read_as_map(path: impl AsRef<Path>) -> Result<Map<String, Value>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading JSON template");

    let text = fs::read_to_string(path).map_err(|e| Error::template_read(path, e))?;

    match serde_json::from_str::<Value>(&text)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::invalid_template(
            path,
            format!("expected a JSON object, found {}", kind_of(&other)),
        )),
    }
}

/// Returns `map` with `key` set to `value`, keeping the key's position if present.
#[must_use]
pub fn with_override(mut map: Map<String, Value>, key: &str, value: Value) -> Map<String, Value> {
    map.insert(key.to_string(), value);
    map
}

/// Serializes `map` as pretty-printed JSON.
pub fn to_json_string(map: &Map<String, Value>) -> Result<String> {
    Ok(serde_json::to_string_pretty(map)?)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// Tests
// ============================================================================
