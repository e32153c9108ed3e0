//! Dynamic value representation for outline fields.
//!
//! A field's `value` in an outline document is schema-less: depending on the
//! declared type and array-ness it may be a boolean, a number, a string, or
//! a sequence of those, and inside an array-of-sections a sequence of
//! sequences sharing one index space with its siblings. [`Value`] models
//! that shape; absence is modelled as `Option<Value>` on the node.
//!
//! ## Core Types
//!
//! - [`Value`]: any concrete field value (null, bool, number, string, list)
//! - [`Number`]: an integer or float scalar
//!
//! ## Usage Patterns
//!
//! ```rust
//! use dae_outline::Value;
//!
//! let flag = Value::from(true);
//! assert!(flag.is_truthy());
//!
//! let port = Value::from(12345);
//! assert_eq!(port.as_integer(), Some(12345));
//!
//! // Numeric reinterpretation also accepts integer-shaped strings.
//! let port = Value::from("12345");
//! assert_eq!(port.as_integer(), Some(12345));
//!
//! // A list is never falsy, not even when empty.
//! let list = Value::List(vec![]);
//! assert!(list.is_truthy());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dynamically-typed field value from an outline document.
///
/// Deserializes untagged, so JSON `true`, `12345`, `"eth0"` and
/// `["eth0", "eth1"]` all map onto the matching variant without markers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<Value>),
}

/// A numeric scalar, integer or float.
///
/// Outline numerics are declared with fixed-width integer type tags; float
/// values are tolerated in the document and truncated on reinterpretation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Converts this number to an `i64`, truncating floats.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        match self {
            Number::Integer(i) => *i,
            Number::Float(f) => *f as i64,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a list.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Truthiness in the omission sense: `Null`, `false`, `0`, `0.0` and
    /// the empty string are falsy. A list is always truthy, including the
    /// empty list: an explicitly present empty array is "set to nothing",
    /// not "not set".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dae_outline::Value;
    ///
    /// assert!(!Value::from(false).is_truthy());
    /// assert!(!Value::from(0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::List(vec![]).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(Number::Integer(i)) => *i != 0,
            Value::Number(Number::Float(f)) => *f != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::List(_) => true,
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a list, returns its elements. Otherwise `None`.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Reinterprets the value as an integer: numbers convert directly
    /// (floats truncate), strings must parse as a decimal integer after
    /// trimming. Anything else returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dae_outline::Value;
    ///
    /// assert_eq!(Value::from(7).as_integer(), Some(7));
    /// assert_eq!(Value::from(" 42 ").as_integer(), Some(42));
    /// assert_eq!(Value::from("eth0").as_integer(), None);
    /// ```
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(n.as_i64()),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_deserialization_picks_the_right_variant() {
        let v: Value = serde_json::from_str("true").unwrap();
        assert_eq!(v, Value::Bool(true));

        let v: Value = serde_json::from_str("12345").unwrap();
        assert_eq!(v, Value::Number(Number::Integer(12345)));

        let v: Value = serde_json::from_str("\"eth0\"").unwrap();
        assert_eq!(v, Value::String("eth0".to_string()));

        let v: Value = serde_json::from_str("[[\"a\"], [\"b\"]]").unwrap();
        assert_eq!(
            v,
            Value::List(vec![
                Value::List(vec![Value::from("a")]),
                Value::List(vec![Value::from("b")]),
            ])
        );
    }

    #[test]
    fn truthiness_matches_omission_contract() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from(false).is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::from(0.0).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(Value::from(true).is_truthy());
        assert!(Value::from("x").is_truthy());
        assert!(Value::List(vec![]).is_truthy());
    }

    #[test]
    fn integer_reinterpretation() {
        assert_eq!(Value::from(1500).as_integer(), Some(1500));
        assert_eq!(Value::from(3.9).as_integer(), Some(3));
        assert_eq!(Value::from("1500").as_integer(), Some(1500));
        assert_eq!(Value::from("not a number").as_integer(), None);
        assert_eq!(Value::from(true).as_integer(), None);
    }
}
