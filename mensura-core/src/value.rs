//! Boundary values handed over by the input layer
//!
//! The presentation layer parses each entry field before calling the
//! engine; what crosses the boundary is either a non-negative decimal or
//! the raw text when it does not read as one (hex/octal/binary entry).

use serde::{Deserialize, Serialize};

use crate::Number;

/// Raw user input after the caller's parsing layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SourceValue {
    Number(Number),
    Text(String),
}

impl SourceValue {
    /// Parse entry text the way the input layer does: comma accepted as
    /// decimal separator, blank means zero, negative values clamp to
    /// zero, anything else passes through as text.
    pub fn parse(input: &str) -> Self {
        let text = input.trim().replace(',', ".");
        let candidate = if text.is_empty() { "0" } else { text.as_str() };
        match Number::from_str(candidate) {
            Ok(n) if n.is_negative() => SourceValue::Number(Number::from_i64(0)),
            Ok(n) => SourceValue::Number(n),
            Err(_) => SourceValue::Text(input.trim().to_string()),
        }
    }

    /// Get the decimal value, if this is one
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            SourceValue::Number(n) => Some(n),
            SourceValue::Text(_) => None,
        }
    }

    /// Get the raw text, if this is one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SourceValue::Text(s) => Some(s),
            SourceValue::Number(_) => None,
        }
    }

    /// Type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            SourceValue::Number(_) => "Number",
            SourceValue::Text(_) => "Text",
        }
    }
}

impl From<Number> for SourceValue {
    fn from(n: Number) -> Self {
        SourceValue::Number(n)
    }
}

impl From<i64> for SourceValue {
    fn from(n: i64) -> Self {
        SourceValue::Number(Number::from_i64(n))
    }
}

impl From<&str> for SourceValue {
    fn from(s: &str) -> Self {
        SourceValue::Text(s.to_string())
    }
}
