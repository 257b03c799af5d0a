//! Turning server error bodies into one human-readable line.

use serde_json::Value;

/// Shown when nothing better can be extracted.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Extract the message to show for a failed request.
///
/// Resolution order: a JSON `message` string, then the values of a JSON
/// object joined with ", " (field-level validation maps), then the raw body
/// text, then [`GENERIC_ERROR_MESSAGE`].
pub fn extract_error_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return GENERIC_ERROR_MESSAGE.to_string();
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => {
            if let Some(message) = map.get("message").and_then(Value::as_str) {
                if !message.trim().is_empty() {
                    return message.to_string();
                }
            }
            let joined = map
                .values()
                .map(value_text)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            if joined.is_empty() {
                GENERIC_ERROR_MESSAGE.to_string()
            } else {
                joined
            }
        }
        Ok(Value::String(text)) if !text.trim().is_empty() => text,
        Ok(Value::Null) => GENERIC_ERROR_MESSAGE.to_string(),
        // HTML error pages from proxies are not worth showing
        _ if trimmed.starts_with('<') => GENERIC_ERROR_MESSAGE.to_string(),
        _ => trimmed.to_string(),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(value_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
