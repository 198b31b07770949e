//! Cookie value encoding.
//!
//! Strings and numbers travel as their plain text. Every other value is
//! sent as compact JSON, and a stored value whose first character is `{`
//! is decoded back into a JSON object when read.

use crate::base::context::JsonResultExt;
use crate::base::neterror::NetError;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A value read from the inbound jar.
#[derive(Debug, Clone, PartialEq)]
pub enum CookieValue {
    /// The raw cookie text.
    Text(String),
    /// A `{`-prefixed value that parsed as JSON.
    Json(Value),
}

impl CookieValue {
    /// Interpret a raw jar value.
    ///
    /// Text starting with `{` that fails to parse is returned as-is.
    pub fn decode(name: &str, raw: &str) -> Self {
        if !raw.starts_with('{') {
            return CookieValue::Text(raw.to_string());
        }
        match serde_json::from_str::<Value>(raw) {
            Ok(json) => CookieValue::Json(json),
            Err(e) => {
                tracing::debug!(name = %name, error = %e, "cookie looks like JSON but is not, returning raw text");
                CookieValue::Text(raw.to_string())
            }
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CookieValue::Text(s) => Some(s),
            CookieValue::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            CookieValue::Json(v) => Some(v),
            CookieValue::Text(_) => None,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, CookieValue::Json(_))
    }

    /// Convert to a JSON value; text becomes a JSON string.
    pub fn into_json(self) -> Value {
        match self {
            CookieValue::Text(s) => Value::String(s),
            CookieValue::Json(v) => v,
        }
    }
}

impl fmt::Display for CookieValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CookieValue::Text(s) => f.write_str(s),
            CookieValue::Json(v) => write!(f, "{}", v),
        }
    }
}

impl PartialEq<str> for CookieValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for CookieValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

/// Encode a value for transmission.
///
/// Strings pass through untouched and numbers use their decimal form.
/// Anything else is serialized to compact JSON in the value's own field
/// order. JSON has no NaN or infinity, so non-finite floats encode as
/// `null`, the same text `None` produces.
pub fn encode_value<T: Serialize + ?Sized>(name: &str, value: &T) -> Result<String, NetError> {
    match serde_json::to_value(value).encode_context(name)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => serde_json::to_string(value).encode_context(name),
    }
}
