//! Parsing normalized text into an untyped JSON value.

use crate::core::error::RecoveryError;
use serde_json::Value;

/// Decode normalized text into a [`Value`].
///
/// Runs a standard JSON parse. If the result is itself a string whose
/// trimmed content begins with `[` or `{`, the service double-encoded its
/// answer (serialized the JSON, then serialized that as a JSON string
/// literal) and the inner string is parsed once more. Exactly one extra
/// unwrap level is attempted.
///
/// The decoder does no shape checking: whatever valid JSON comes out —
/// list, mapping, bare string, number — is returned, and the per-kind
/// parsers decide whether it fits.
pub fn decode(text: &str) -> Result<Value, RecoveryError> {
    let value: Value = serde_json::from_str(text).map_err(|e| RecoveryError::Decode {
        detail: e.to_string(),
        text: text.to_string(),
    })?;

    if let Value::String(inner) = &value {
        let trimmed = inner.trim();
        if trimmed.starts_with('[') || trimmed.starts_with('{') {
            return serde_json::from_str(trimmed).map_err(|e| RecoveryError::Decode {
                detail: e.to_string(),
                text: trimmed.to_string(),
            });
        }
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_clean_json_unchanged() {
        let value = decode(r#"{"bravery": 7, "empathy": 2}"#).unwrap();
        assert_eq!(value, json!({"bravery": 7, "empathy": 2}));
    }

    #[test]
    fn unwraps_double_encoded_array() {
        let direct = decode(r#"["a", "b", "c"]"#).unwrap();
        let double = decode(r#""[\"a\", \"b\", \"c\"]""#).unwrap();
        assert_eq!(direct, double);
    }

    #[test]
    fn unwraps_double_encoded_object() {
        let value = decode(r#""{\"bravery\": 3}""#).unwrap();
        assert_eq!(value, json!({"bravery": 3}));
    }

    #[test]
    fn plain_string_is_returned_as_is() {
        // Not double-encoding: the inner text is not JSON-shaped
        let value = decode(r#""just an answer""#).unwrap();
        assert_eq!(value, json!("just an answer"));
    }

    #[test]
    fn only_one_unwrap_level() {
        // Triple-encoded: the inner text starts with a quote, not `[` or `{`,
        // so no second unwrap is attempted and the string is kept
        let value = decode(r#""\"[1, 2]\"""#).unwrap();
        assert_eq!(value, json!(r#""[1, 2]""#));
    }

    #[test]
    fn invalid_json_reports_decode_error_with_text() {
        let err = decode("not json at all").unwrap_err();
        assert_eq!(err.kind(), "decode_error");
        assert_eq!(err.diagnostic_text(), "not json at all");
    }

    #[test]
    fn broken_inner_encoding_carries_inner_text() {
        let err = decode(r#""[1, 2""#).unwrap_err();
        assert_eq!(err.kind(), "decode_error");
        assert_eq!(err.diagnostic_text(), "[1, 2");
    }
}
