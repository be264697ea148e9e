//! Open-ended policy document type and the loader that produces it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("malformed policy input: {0}")]
    MalformedInput(#[from] serde_json::Error),
}

/// An access-control policy under review.
///
/// No schema is assumed beyond "valid JSON". The document is
/// attacker-influenceable, so unknown or missing fields are passed through
/// opaquely and nothing in this crate interprets their meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyDocument(Value);

impl PolicyDocument {
    /// Parse raw text into a policy document.
    ///
    /// Pure syntactic validation: broken nesting or trailing tokens fail,
    /// any parseable shape is accepted. Semantic strength is judged by the
    /// reasoning service, not here.
    pub fn parse(raw: &str) -> Result<Self, PolicyError> {
        Ok(Self(serde_json::from_str(raw)?))
    }

    /// Compact single-line rendering, embedded verbatim in the user prompt.
    pub fn to_compact_json(&self) -> String {
        self.0.to_string()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for PolicyDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_accepts_any_valid_shape() {
        for raw in [
            r#"{"Version":"2012-10-17","Statement":[]}"#,
            r#"[1, 2, {"nested": true}]"#,
            r#""just a string""#,
            "42",
        ] {
            assert!(PolicyDocument::parse(raw).is_ok(), "should parse: {raw}");
        }
    }

    #[test]
    fn parse_rejects_broken_nesting() {
        let err = PolicyDocument::parse(r#"{"Statement": [{"Effect": "Allow""#).unwrap_err();
        assert!(matches!(err, PolicyError::MalformedInput(_)));
    }

    #[test]
    fn parse_rejects_trailing_tokens() {
        let err = PolicyDocument::parse(r#"{"a": 1} trailing"#).unwrap_err();
        assert!(matches!(err, PolicyError::MalformedInput(_)));
    }

    #[test]
    fn unknown_fields_round_trip_losslessly() {
        let raw = r#"{"Version":"2012-10-17","CustomField":{"deep":[1,null,"x"]}}"#;
        let doc = PolicyDocument::parse(raw).unwrap();
        let reparsed = PolicyDocument::parse(&doc.to_compact_json()).unwrap();
        assert_eq!(doc, reparsed);
        assert_eq!(doc.as_value()["CustomField"]["deep"], json!([1, null, "x"]));
    }
}
