// --- File: crates/bookagame_common/src/http.rs ---
//! HTTP helpers shared by the API client.

pub mod client;

/// Extracts the human-readable reason from an API error body.
///
/// Looks at `message`, then `error` (string or `{ "message": .. }`), and
/// returns `None` when the body carries neither.
pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let pick = |v: &serde_json::Value| {
        v.as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    if let Some(message) = value.get("message").and_then(pick) {
        return Some(message);
    }
    match value.get("error") {
        Some(error) if error.is_string() => pick(error),
        Some(error) => error.get("message").and_then(pick),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_wins() {
        let body = r#"{"message":"Court not found","error":"NotFound"}"#;
        assert_eq!(error_message_from_body(body).as_deref(), Some("Court not found"));
    }

    #[test]
    fn test_error_field_fallbacks() {
        assert_eq!(
            error_message_from_body(r#"{"error":"Invalid date"}"#).as_deref(),
            Some("Invalid date")
        );
        assert_eq!(
            error_message_from_body(r#"{"error":{"message":"Token expired"}}"#).as_deref(),
            Some("Token expired")
        );
    }

    #[test]
    fn test_non_json_and_empty_bodies() {
        assert_eq!(error_message_from_body("<html>502</html>"), None);
        assert_eq!(error_message_from_body(r#"{"message":""}"#), None);
        assert_eq!(error_message_from_body(""), None);
    }
}
