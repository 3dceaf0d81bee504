use serde_json::Value;

use super::error::{AppError, Result};

/// Locate the record list inside a response body
///
/// Each pointer is an RFC 6901 JSON pointer; `""` addresses the body itself. The first
/// pointer that resolves to an array wins.
pub fn extract_items(raw: &Value, pointers: &[String]) -> Result<Vec<Value>> {
    for pointer in pointers {
        if let Some(Value::Array(items)) = raw.pointer(pointer) {
            return Ok(items.clone());
        }
    }

    let shape = match raw {
        Value::Object(map) => format!(
            "object with keys [{}]",
            map.keys().cloned().collect::<Vec<_>>().join(", ")
        ),
        Value::Array(_) => "array".to_string(),
        Value::Null => "null".to_string(),
        other => format!("scalar {}", other),
    };

    Err(AppError::envelope(format!(
        "no list at any of [{}] in {}",
        pointers
            .iter()
            .map(|p| format!("'{}'", p))
            .collect::<Vec<_>>()
            .join(", "),
        shape
    )))
}
