//! Values crossing the scalar-function boundary.

use std::borrow::Cow;

/// A single argument or result at the host function boundary.
///
/// Covers the shapes a query-processing host marshals in and out of a
/// scalar function: a byte buffer, a text string, or the absent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The absent value. Every builtin propagates it unchanged.
    Null,
    /// An owned byte buffer. Zero bytes are ordinary data.
    Bytes(Vec<u8>),
    /// An owned text string.
    Text(String),
}

impl Value {
    /// Returns true for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Views the value as a byte buffer.
    ///
    /// Text coerces to its UTF-8 bytes, the way a host passes a text
    /// argument to a blob-typed parameter. `Null` has no byte view.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Null => None,
            Value::Bytes(bytes) => Some(bytes),
            Value::Text(text) => Some(text.as_bytes()),
        }
    }

    /// Views the value as text.
    ///
    /// Bytes coerce through a lossy UTF-8 conversion, the way a host passes
    /// a blob argument to a text-typed parameter. `Null` has no text view.
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Null => None,
            Value::Bytes(bytes) => Some(String::from_utf8_lossy(bytes)),
            Value::Text(text) => Some(Cow::Borrowed(text)),
        }
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_has_no_views() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::Null.as_bytes(), None);
        assert_eq!(Value::Null.to_text(), None);
    }

    #[test]
    fn text_coerces_to_bytes() {
        let value = Value::from("abc");
        assert_eq!(value.as_bytes(), Some(b"abc".as_slice()));
    }

    #[test]
    fn bytes_coerce_to_text() {
        let value = Value::from(b"abc".as_slice());
        assert_eq!(value.to_text().as_deref(), Some("abc"));
    }

    #[test]
    fn absent_option_becomes_null() {
        assert_eq!(Value::from(None::<String>), Value::Null);
        assert_eq!(
            Value::from(Some("x".to_string())),
            Value::Text("x".to_string())
        );
    }
}
