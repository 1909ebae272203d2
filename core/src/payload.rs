//! Payload value representations for Fanout dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One unit of heterogeneous input data, handed to exactly one worker.
///
/// The set of kinds is closed: processing dispatches exhaustively over the
/// variants, with everything outside `Text` and `Integer` reported as
/// unrecognized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Payload {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Float(f64),
    Binary(Vec<u8>),
}

impl Payload {
    /// Non-committal probe for text content.
    ///
    /// This is the advisory check performed before the committal dispatch;
    /// it never affects how the payload is processed.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Name of the payload kind, for reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Text(_) => "text",
            Payload::Integer(_) => "integer",
            Payload::Boolean(_) => "boolean",
            Payload::Float(_) => "float",
            Payload::Binary(_) => "binary",
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Text(value) => write!(f, "{value}"),
            Payload::Integer(value) => write!(f, "{value}"),
            Payload::Boolean(value) => write!(f, "{value}"),
            Payload::Float(value) => write!(f, "{value}"),
            Payload::Binary(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::Text(value.to_string())
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::Text(value)
    }
}

impl From<i64> for Payload {
    fn from(value: i64) -> Self {
        Payload::Integer(value)
    }
}

impl From<i32> for Payload {
    fn from(value: i32) -> Self {
        Payload::Integer(value as i64)
    }
}

impl From<bool> for Payload {
    fn from(value: bool) -> Self {
        Payload::Boolean(value)
    }
}

impl From<f64> for Payload {
    fn from(value: f64) -> Self {
        Payload::Float(value)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(value: Vec<u8>) -> Self {
        Payload::Binary(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_probe() {
        assert_eq!(Payload::from("Alpha").as_text(), Some("Alpha"));
        assert_eq!(Payload::from(42i64).as_text(), None);
        assert_eq!(Payload::from(true).as_text(), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Payload::from("Alpha").kind(), "text");
        assert_eq!(Payload::from(42i64).kind(), "integer");
        assert_eq!(Payload::from(true).kind(), "boolean");
        assert_eq!(Payload::from(1.5f64).kind(), "float");
        assert_eq!(Payload::from(vec![1u8, 2, 3]).kind(), "binary");
    }

    #[test]
    fn test_display() {
        assert_eq!(Payload::from("Alpha").to_string(), "Alpha");
        assert_eq!(Payload::from(42i64).to_string(), "42");
        assert_eq!(Payload::from(true).to_string(), "true");
        assert_eq!(Payload::from(vec![1u8, 2, 3]).to_string(), "<3 bytes>");
    }

    #[test]
    fn test_serde_shape() {
        let value = serde_json::to_value(Payload::from("Alpha")).unwrap();
        assert_eq!(value, serde_json::json!({ "text": "Alpha" }));

        let value = serde_json::to_value(Payload::from(42i64)).unwrap();
        assert_eq!(value, serde_json::json!({ "integer": 42 }));
    }
}
