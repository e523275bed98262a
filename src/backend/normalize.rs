//! Error body normalization
//!
//! The backend reports failures in several shapes. Validation errors arrive
//! as a `detail` array of `{loc, msg}` records; other failures use `detail`,
//! `error` or `message`. All of them collapse into one display string.

use serde_json::Value;

/// Shown when an error body has no recognizable message
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Shown when the request never produced a response
pub const NETWORK_ERROR: &str = "Network error. Please try again.";

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn loc_segment(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn validation_item(item: &Value) -> String {
    let msg = item.get("msg").and_then(Value::as_str).unwrap_or_default();
    match item.get("loc").and_then(Value::as_array) {
        Some(loc) => {
            let path: Vec<String> = loc.iter().map(loc_segment).collect();
            format!("{}: {}", path.join("."), msg)
        }
        None => msg.to_string(),
    }
}

/// Collapse a backend error body into a single human-readable message
pub fn normalize_error_body(body: &Value) -> String {
    if let Some(detail) = body.get("detail").filter(|d| is_present(d)) {
        return match detail {
            Value::String(s) => s.clone(),
            Value::Array(items) => items.iter().map(validation_item).collect::<Vec<_>>().join(", "),
            Value::Object(obj) => obj
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| GENERIC_ERROR.to_string()),
            _ => GENERIC_ERROR.to_string(),
        };
    }

    for key in ["error", "message"] {
        if let Some(Value::String(s)) = body.get(key) {
            if !s.is_empty() {
                return s.clone();
            }
        }
    }

    GENERIC_ERROR.to_string()
}

/// Normalize a raw response body that may not be JSON at all
pub fn normalize_error_text(text: &str) -> String {
    serde_json::from_str::<Value>(text)
        .map(|body| normalize_error_body(&body))
        .unwrap_or_else(|_| GENERIC_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_string() {
        assert_eq!(normalize_error_body(&json!({"detail": "Email taken"})), "Email taken");
    }

    #[test]
    fn test_detail_validation_array() {
        let body = json!({"detail": [
            {"loc": ["body", "query"], "msg": "Query must be at least 5 characters"},
            {"loc": ["body", "items", 0], "msg": "bad"},
            {"msg": "no location"}
        ]});
        assert_eq!(
            normalize_error_body(&body),
            "body.query: Query must be at least 5 characters, body.items.0: bad, no location"
        );
    }

    #[test]
    fn test_detail_object_message() {
        assert_eq!(normalize_error_body(&json!({"detail": {"message": "Nope"}})), "Nope");
        assert_eq!(normalize_error_body(&json!({"detail": {"code": 1}})), GENERIC_ERROR);
    }

    #[test]
    fn test_error_then_message() {
        assert_eq!(normalize_error_body(&json!({"error": "E", "message": "M"})), "E");
        assert_eq!(normalize_error_body(&json!({"message": "M"})), "M");
        assert_eq!(normalize_error_body(&json!({"detail": "", "message": "M"})), "M");
    }

    #[test]
    fn test_unrecognized_shapes() {
        assert_eq!(normalize_error_body(&json!({})), GENERIC_ERROR);
        assert_eq!(normalize_error_body(&json!([1, 2])), GENERIC_ERROR);
        assert_eq!(normalize_error_text("<html>502</html>"), GENERIC_ERROR);
    }
}
