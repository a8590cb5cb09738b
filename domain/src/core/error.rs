//! The failure taxonomy for response recovery.
//!
//! Every stage that can fail returns a tagged value carrying the most
//! specific raw/intermediate text available, so an operator can see what the
//! service actually produced without re-deriving it. Nothing in the domain
//! panics on malformed input.

use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// A specific schema constraint violated by a decoded value.
///
/// `path` locates the offending element inside the payload, e.g.
/// `[2].options[1].value`.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum SchemaViolation {
    #[error("missing key `{key}` at `{path}`")]
    MissingKey { path: String, key: String },

    #[error("unexpected key `{key}` at `{path}`")]
    UnexpectedKey { path: String, key: String },

    #[error("expected {expected} at `{path}`")]
    WrongType { path: String, expected: String },

    #[error("expected {expected} items at `{path}`, found {found}")]
    WrongArity {
        path: String,
        expected: usize,
        found: usize,
    },

    #[error("value {value} at `{path}` is outside [{min}, {max}]")]
    OutOfRange {
        path: String,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl SchemaViolation {
    pub fn missing_key(path: impl Into<String>, key: impl Into<String>) -> Self {
        SchemaViolation::MissingKey {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn unexpected_key(path: impl Into<String>, key: impl Into<String>) -> Self {
        SchemaViolation::UnexpectedKey {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn wrong_type(path: impl Into<String>, expected: impl Into<String>) -> Self {
        SchemaViolation::WrongType {
            path: path.into(),
            expected: expected.into(),
        }
    }

    pub fn wrong_arity(path: impl Into<String>, expected: usize, found: usize) -> Self {
        SchemaViolation::WrongArity {
            path: path.into(),
            expected,
            found,
        }
    }
}

/// Errors produced while recovering a typed entity from a service reply.
///
/// The three kinds mirror the three places recovery can break down:
///
/// | Kind       | Meaning                                               |
/// |------------|-------------------------------------------------------|
/// | `Upstream` | The service returned no usable body at all            |
/// | `Decode`   | The body is not JSON, even after the unwrap attempt   |
/// | `Schema`   | The JSON does not match the expected response shape   |
///
/// `Upstream` is constructed by the application layer from the generator
/// port's failure; the domain pipeline itself only produces `Decode` and
/// `Schema`.
#[derive(Error, Debug)]
pub enum RecoveryError {
    #[error("upstream generation failed: {detail}")]
    Upstream { detail: String },

    #[error("reply is not valid JSON ({detail})")]
    Decode {
        detail: String,
        /// The normalized text that failed to parse.
        text: String,
    },

    #[error("reply has the wrong shape: {violation}")]
    Schema {
        violation: SchemaViolation,
        /// The decoded value that failed validation.
        value: Value,
    },
}

impl RecoveryError {
    /// Stable tag for the error kind, used in structured payloads and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RecoveryError::Upstream { .. } => "upstream_error",
            RecoveryError::Decode { .. } => "decode_error",
            RecoveryError::Schema { .. } => "schema_error",
        }
    }

    /// The most specific raw/intermediate text available for diagnostics.
    pub fn diagnostic_text(&self) -> String {
        match self {
            RecoveryError::Upstream { detail } => detail.clone(),
            RecoveryError::Decode { text, .. } => text.clone(),
            RecoveryError::Schema { value, .. } => value.to_string(),
        }
    }

    /// Structured payload suitable for direct exposure to an operator.
    pub fn to_payload(&self) -> Value {
        match self {
            RecoveryError::Upstream { detail } => json!({
                "error": self.kind(),
                "detail": detail,
            }),
            RecoveryError::Decode { detail, text } => json!({
                "error": self.kind(),
                "detail": detail,
                "raw": text,
            }),
            RecoveryError::Schema { violation, value } => json!({
                "error": self.kind(),
                "detail": violation.to_string(),
                "violation": violation,
                "raw": value,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_are_stable() {
        let upstream = RecoveryError::Upstream {
            detail: "status 502".into(),
        };
        assert_eq!(upstream.kind(), "upstream_error");

        let decode = RecoveryError::Decode {
            detail: "expected value".into(),
            text: "not json".into(),
        };
        assert_eq!(decode.kind(), "decode_error");

        let schema = RecoveryError::Schema {
            violation: SchemaViolation::missing_key("value", "logic"),
            value: json!({}),
        };
        assert_eq!(schema.kind(), "schema_error");
    }

    #[test]
    fn decode_error_carries_offending_text() {
        let err = RecoveryError::Decode {
            detail: "expected value".into(),
            text: "```oops```".into(),
        };
        assert_eq!(err.diagnostic_text(), "```oops```");

        let payload = err.to_payload();
        assert_eq!(payload["error"], "decode_error");
        assert_eq!(payload["raw"], "```oops```");
    }

    #[test]
    fn schema_violation_display_names_the_key() {
        let violation = SchemaViolation::missing_key("[0].options[3].value", "logic");
        assert_eq!(
            violation.to_string(),
            "missing key `logic` at `[0].options[3].value`"
        );
    }

    #[test]
    fn schema_payload_includes_structured_violation() {
        let err = RecoveryError::Schema {
            violation: SchemaViolation::wrong_arity("choices", 2, 3),
            value: json!([1, 2, 3]),
        };
        let payload = err.to_payload();
        assert_eq!(payload["error"], "schema_error");
        assert_eq!(payload["violation"]["violation"], "wrong_arity");
        assert_eq!(payload["raw"], json!([1, 2, 3]));
    }
}
