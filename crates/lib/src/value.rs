//! Element values stored in an [`OrderedSequence`](crate::OrderedSequence).
//!
//! A sequence holds exactly one kind of value: 64-bit signed integers or
//! UTF-8 text. [`Value`] carries the kind per element and [`Kind`] names it
//! without the payload.

use std::cmp::Ordering;
use std::fmt;

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// 64-bit signed integers, ordered numerically
    Integer,
    /// Text strings, ordered byte-wise lexicographically
    String,
}

impl Kind {
    /// Human-readable name used in error messages and logs
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Integer => "integer",
            Kind::String => "string",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single element of an ordered sequence.
///
/// Values of the same kind are totally ordered: integers numerically, text
/// byte-wise (case-sensitive, no locale collation). Values of different
/// kinds are never equal and have no ordering between them:
///
/// ```
/// # use ordseq::Value;
/// assert!(Value::Int(3) < Value::Int(7));
/// assert!(Value::from("Zebra") < Value::from("apple"));
/// assert_eq!(Value::Int(3).partial_cmp(&Value::from("3")), None);
/// assert_ne!(Value::Int(3), Value::from("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Integer value
    Int(i64),
    /// Text string value
    Text(String),
}

impl Value {
    /// Returns the kind of this value
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Integer,
            Value::Text(_) => Kind::String,
        }
    }

    /// Returns the name of this value's kind
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Attempts to read the value as an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Attempts to read the value as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Int(_) => None,
        }
    }

    /// Returns true if this is an integer value
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns true if this is a text value
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            // `str` ordering is byte-wise, which is what we want here
            (Value::Text(a), Value::Text(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Int(n) if n == other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}
