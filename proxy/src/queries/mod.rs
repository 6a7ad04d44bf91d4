pub mod download_file;
pub mod get_item;
pub mod list_memories;
pub mod send_request;
pub mod templates;

use serde_json::Value;

/// Field value if present and truthy. `null`, `false`, `0` and `""` count as missing.
pub(crate) fn required_field(data: &Value, key: &str) -> Option<Value> {
    match data.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        value => Some(value.clone()),
    }
}
