//! The [`Value`] tree produced by the parser, and its JSON encoding.
use alloc::{collections::BTreeMap, string::String, vec::Vec};
use core::fmt::{self, Write as _};

/// Members of an object. Keys are unique; a repeated key keeps its last value.
pub type Map = BTreeMap<String, Value>;
/// Elements of an array, in encounter order.
pub type Array = Vec<Value>;

/// A parsed value.
///
/// Numbers keep the distinction made by the literal: a literal with a `.` or
/// an exponent is a [`Float`](Value::Float), anything else an
/// [`Integer`](Value::Integer).
///
/// # Examples
///
/// ```
/// use jsoncomment::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// map.insert("n".to_string(), Value::Integer(5));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value","n":5}"#);
/// ```
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `true` or `false`
    Boolean(bool),
    /// A number literal without `.` or exponent.
    Integer(i64),
    /// A number literal with `.` or exponent.
    Float(f64),
    /// A string, with `\uXXXX` escapes decoded.
    String(String),
    /// An array.
    Array(Array),
    /// An object.
    Object(Map),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub fn is_i64(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Float`].
    ///
    /// [`Float`]: Value::Float
    #[must_use]
    pub fn is_f64(&self) -> bool {
        matches!(self, Self::Float(..))
    }

    /// Returns `true` for both [`Integer`] and [`Float`].
    ///
    /// [`Integer`]: Value::Integer
    /// [`Float`]: Value::Float
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Float(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean payload, if any.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload, if any. Floats are not converted.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// The numeric payload as a float. Integers are widened, possibly
    /// losing precision beyond 2^53.
    ///
    /// ```
    /// use jsoncomment::Value;
    ///
    /// assert_eq!(Value::Integer(3).as_f64(), Some(3.0));
    /// assert_eq!(Value::Float(0.5).as_f64(), Some(0.5));
    /// assert_eq!(Value::Null.as_f64(), None);
    /// ```
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements, if the value is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// The members, if the value is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up an object member. Returns `None` for missing keys and for
    /// values that are not objects.
    ///
    /// ```
    /// let v = jsoncomment::parse(r#"{"a": /* one */ 1}"#).unwrap().unwrap();
    /// assert_eq!(v.get("a").and_then(|a| a.as_i64()), Some(1));
    /// assert!(v.get("b").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }
}

/// Writes `src` as the body of a string literal.
///
/// Quotes, backslashes, control characters and the Unicode line separators
/// are written as `\uXXXX`. The parser keeps `\"` and `\\` verbatim, so the
/// short forms would not read back to the same string.
pub(crate) fn write_escaped_string<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' | '\\' | '\u{2028}' | '\u{2029}' => write!(f, "\\u{:04X}", c as u32)?,
            // Every control character lies in the BMP, so one escape suffices.
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Integer(n) => write!(f, "{n}"),
            // `Debug` keeps a `.` or an exponent, so the literal reads back
            // as a float.
            Value::Float(n) if n.is_finite() => write!(f, "{n:?}"),
            Value::Float(_) => f.write_str("null"),
            Value::String(s) => {
                f.write_char('"')?;
                write_escaped_string(s, f)?;
                f.write_char('"')
            }
            Value::Array(arr) => {
                f.write_char('[')?;
                let mut first = true;
                for v in arr {
                    if !first {
                        f.write_char(',')?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_char(']')
            }
            Value::Object(map) => {
                f.write_char('{')?;
                let mut first = true;
                for (k, v) in map {
                    if !first {
                        f.write_char(',')?;
                    }
                    first = false;
                    f.write_char('"')?;
                    write_escaped_string(k, f)?;
                    write!(f, "\":{v}")?;
                }
                f.write_char('}')
            }
        }
    }
}
