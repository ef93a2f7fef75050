//! The value domain of static resolution.
//!
//! This module defines what the resolver can produce:
//! - Scalar values and null, mirroring what a constant table can hold
//! - Insertion-ordered arrays with integer or string keys
//!
//! Absence — "could not be statically determined" — is *not* a value; it is
//! expressed as `Option::None` at the resolver boundary and is distinct from
//! [`Value::Null`].

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A value knowable at analysis time.
///
/// Values are immutable once produced. `Bool` and `Null` have no literal
/// node kind of their own — they enter the value domain through constant
/// tables (`true`, `false`, `null` are ordinary defined constants as far as
/// resolution is concerned).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// The null value.
    Null,

    /// A boolean value.
    Bool(bool),

    /// A 64-bit integer value.
    Int(i64),

    /// A double-precision floating-point value.
    Float(f64),

    /// A string value.
    String(String),

    /// An ordered mapping of keys to values.
    Array(ValueArray),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<ValueArray> for Value {
    fn from(v: ValueArray) -> Self {
        Self::Array(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => write_quoted(f, s),
            Self::Array(entries) => {
                write!(f, "[")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key} => {value}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// An array key: integer or string.
///
/// Keys follow the coercion rules of the source language's array primitive;
/// see [`ArrayKey::from_value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrayKey {
    /// An integer key.
    Int(i64),

    /// A string key.
    Str(String),
}

impl ArrayKey {
    /// Coerces a resolved value to a key.
    ///
    /// - integers stay integers; floats truncate toward zero
    /// - booleans become `0`/`1`
    /// - null becomes the empty string key
    /// - strings stay strings, except canonical decimal integers
    ///   (`"42"`, `"-7"`, but not `"042"`, `"-0"` or `"1.0"`), which become
    ///   integer keys
    ///
    /// Returns `None` for an array: nested arrays have no key form.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Self::Str(String::new())),
            Value::Bool(b) => Some(Self::Int(i64::from(*b))),
            Value::Int(i) => Some(Self::Int(*i)),
            Value::Float(x) => Some(Self::Int(*x as i64)),
            Value::String(s) => Some(match canonical_int(s) {
                Some(i) => Self::Int(i),
                None => Self::Str(s.clone()),
            }),
            Value::Array(_) => None,
        }
    }
}

impl From<i64> for ArrayKey {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for ArrayKey {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => write_quoted(f, s),
        }
    }
}

/// An insertion-ordered mapping of [`ArrayKey`] to [`Value`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueArray {
    entries: IndexMap<ArrayKey, Value>,
}

impl ValueArray {
    /// Creates an empty array value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, overwriting any earlier entry with the same key.
    ///
    /// A re-inserted key keeps its first-insertion position; only its value
    /// changes.
    pub fn insert(&mut self, key: ArrayKey, value: Value) {
        self.entries.insert(key, value);
    }

    /// Looks up an entry by key.
    pub fn get(&self, key: &ArrayKey) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the array has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ArrayKey, &Value)> {
        self.entries.iter()
    }

    /// The keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &ArrayKey> {
        self.entries.keys()
    }
}

impl FromIterator<(ArrayKey, Value)> for ValueArray {
    fn from_iter<I: IntoIterator<Item = (ArrayKey, Value)>>(iter: I) -> Self {
        let mut array = Self::new();
        for (key, value) in iter {
            array.insert(key, value);
        }
        array
    }
}

/// Single-quotes a string, escaping backslashes and quotes.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "'")?;
    for c in s.chars() {
        match c {
            '\\' => write!(f, "\\\\")?,
            '\'' => write!(f, "\\'")?,
            _ => write!(f, "{c}")?,
        }
    }
    write!(f, "'")
}

/// Parses a canonical decimal integer string: optional `-`, digits, no
/// leading zeros, no `-0`, within the i64 range.
fn canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if s == "-0" {
        return None;
    }
    s.parse().ok()
}
