//! A lenient parser for JSON text with C-style block comments.
//!
//! The parser reads the first object or array in the input and returns it as
//! a [`Value`]. It validates very little: separators are optional, stray
//! characters between values are ignored, and `/* ... */` comments may appear
//! at any token boundary.
//!
//! ```rust
//! use jsoncomment::{Value, parse};
//!
//! let v = parse(r#"
//!     /* service settings */
//!     {
//!         "port": 8080, /* default */
//!         "ratio": 0.5,
//!         "tags": ["a", "b",]
//!     }
//! "#)
//! .unwrap()
//! .unwrap();
//!
//! assert_eq!(v.get("port"), Some(&Value::Integer(8080)));
//! assert_eq!(v.get("ratio"), Some(&Value::Float(0.5)));
//! assert_eq!(v.get("tags").and_then(Value::as_array).map(Vec::len), Some(2));
//! ```
//!
//! Escapes other than `\uXXXX` are kept verbatim, so `"\n"` in the input is a
//! backslash followed by `n` in the result.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use parser::{ParserError, ParserOptions, SyntaxError};
pub use value::{Array, Map, Value};

/// Parses the first object or array in `text` with default options.
///
/// Returns `Ok(None)` when the text contains no `{` or `[` outside a comment;
/// bare top-level scalars such as `42` are not documents.
///
/// # Errors
///
/// Fails on a malformed `true`/`false`/`null`, a non-hex digit in a `\u`
/// escape, or a number literal that does not fit its type.
///
/// ```rust
/// use jsoncomment::{Value, parse};
///
/// assert_eq!(
///     parse("[1, /* two */ 2]").unwrap(),
///     Some(Value::Array(vec![Value::Integer(1), Value::Integer(2)]))
/// );
/// assert_eq!(parse("42").unwrap(), None);
/// assert!(parse(r#"{"a": tru}"#).is_err());
/// ```
pub fn parse(text: &str) -> Result<Option<Value>, ParserError> {
    parse_with_options(text, ParserOptions::default())
}

/// Parses the first object or array in `text`.
///
/// # Errors
///
/// As [`parse`], plus the faults enabled by `options`.
pub fn parse_with_options(
    text: &str,
    options: ParserOptions,
) -> Result<Option<Value>, ParserError> {
    parser::Parser::new(text, options).parse_document()
}
