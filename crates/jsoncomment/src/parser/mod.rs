//! Recursive-descent parser over a single-character lookahead cursor.
//!
//! Overview
//! - [`Parser`] owns one [`Cursor`] for the duration of one top-level call and
//!   threads it through the recursive `parse_*` methods by `&mut self`.
//! - The entry point skips everything up to the first `{` or `[`; bare
//!   top-level scalars are not documents.
//! - Block comments (`/* ... */`) are skipped wherever the object, array and
//!   value loops look at a character. `//` is not a comment.
//!
//! Leniency
//! - Characters that do not start a value (whitespace, `,`, `:`, anything
//!   unexpected) are consumed and ignored. Structure comes only from quotes,
//!   brackets and braces.
//! - The value dispatcher returns `None` (the no-value marker) when it faces
//!   `]`, `}` or the end of input, so `[1,]` is `[1]`.
//! - Escapes other than `\uXXXX` are kept verbatim: `"\n"` is a backslash
//!   followed by `n`.
//!
//! Faults
//! - Malformed keywords, bad `\u` hex digits, unparseable numbers and the
//!   optional depth limit abort the parse with a [`ParserError`].
//! - End of input closes whatever is open unless
//!   [`ParserOptions::reject_truncated_input`] is set.

mod cursor;
mod error;
mod escape_buffer;
mod literal_buffer;
mod numbers;
mod options;


use alloc::string::String;

use cursor::Cursor;
pub use error::{ParserError, SyntaxError};
use escape_buffer::{SurrogateJoiner, UnicodeEscapeBuffer};
use literal_buffer::{ExpectedLiteralBuffer, ExpectedLiteralValue};
use numbers::{NumberLexeme, is_number_char};
pub use options::ParserOptions;
use tracing::{debug, trace};

use crate::value::{Array, Map, Value};

pub(crate) struct Parser<'src> {
    cursor: Cursor<'src>,
    options: ParserOptions,
    depth: usize,
}

impl<'src> Parser<'src> {
    pub(crate) fn new(text: &'src str, options: ParserOptions) -> Self {
        Self {
            cursor: Cursor::new(text),
            options,
            depth: 0,
        }
    }

    /// Parses the first object or array in the input.
    ///
    /// Returns `Ok(None)` if the input ends before a `{` or `[` is found.
    pub(crate) fn parse_document(mut self) -> Result<Option<Value>, ParserError> {
        loop {
            match self.cursor.read() {
                Some('{') => return self.parse_object().map(|map| Some(Value::Object(map))),
                Some('[') => return self.parse_array().map(|arr| Some(Value::Array(arr))),
                Some('/') => self.skip_comment()?,
                None => return Ok(None),
                // Text before the root container carries nothing.
                Some(c) => {
                    if !c.is_whitespace() {
                        trace!(?c, "ignoring character before root container");
                    }
                }
            }
        }
    }

    /// Value dispatcher. Returns `None` when facing a closing delimiter or the
    /// end of input.
    fn parse_value(&mut self) -> Result<Option<Value>, ParserError> {
        loop {
            let Some(c) = self.cursor.peek() else {
                return Ok(None);
            };
            match c {
                '/' => {
                    self.cursor.read();
                    self.skip_comment()?;
                }
                '-' | '0'..='9' => return self.parse_number().map(Some),
                ']' | '}' => return Ok(None),
                '[' => {
                    self.cursor.read();
                    return self.parse_array().map(|arr| Some(Value::Array(arr)));
                }
                '{' => {
                    self.cursor.read();
                    return self.parse_object().map(|map| Some(Value::Object(map)));
                }
                '"' => {
                    self.cursor.read();
                    return self.parse_string().map(|s| Some(Value::String(s)));
                }
                't' | 'f' | 'n' => return self.parse_keyword().map(Some),
                // Whitespace, separators and stray characters.
                _ => {
                    self.cursor.read();
                }
            }
        }
    }

    /// Called after the opening `{` was consumed.
    fn parse_object(&mut self) -> Result<Map, ParserError> {
        self.descend()?;
        let mut map = Map::new();
        loop {
            match self.cursor.read() {
                Some('/') => self.skip_comment()?,
                Some('}') => break,
                Some('"') => {
                    let key = self.parse_string()?;
                    if !self.seek_colon()? {
                        break;
                    }
                    match self.parse_value()? {
                        Some(value) => {
                            map.insert(key, value);
                        }
                        // `{"a":}` stores null; a key cut off by the end of
                        // input is dropped.
                        None if self.cursor.peek().is_some() => {
                            map.insert(key, Value::Null);
                        }
                        None => {}
                    }
                }
                None => {
                    self.end_of_input("object")?;
                    break;
                }
                Some(c) if c.is_whitespace() || c == ',' => {}
                Some(c) => trace!(?c, "ignoring character in object"),
            }
        }
        self.depth -= 1;
        Ok(map)
    }

    /// Called after the opening `[` was consumed.
    fn parse_array(&mut self) -> Result<Array, ParserError> {
        self.descend()?;
        let mut arr = Array::new();
        loop {
            match self.cursor.peek() {
                Some('/') => {
                    self.cursor.read();
                    self.skip_comment()?;
                }
                Some(']') => {
                    self.cursor.read();
                    break;
                }
                // The dispatcher stops at `}` without consuming it.
                Some('}') => {
                    self.cursor.read();
                    trace!("ignoring '}}' in array");
                }
                None => {
                    self.end_of_input("array")?;
                    break;
                }
                Some(_) => {
                    if let Some(value) = self.parse_value()? {
                        arr.push(value);
                    }
                }
            }
        }
        self.depth -= 1;
        Ok(arr)
    }

    /// Consumes up to and including the `:` after an object key. Returns
    /// `false` if the input ended first.
    fn seek_colon(&mut self) -> Result<bool, ParserError> {
        loop {
            match self.cursor.read() {
                Some(':') => return Ok(true),
                Some('/') => self.skip_comment()?,
                Some(_) => {}
                None => {
                    self.end_of_input("object key")?;
                    return Ok(false);
                }
            }
        }
    }

    /// Called after the opening quote was consumed.
    fn parse_string(&mut self) -> Result<String, ParserError> {
        let mut out = String::new();
        let mut joiner = SurrogateJoiner::new();
        loop {
            match self.cursor.read() {
                Some('"') => break,
                Some('\\') => self.parse_escape(&mut out, &mut joiner)?,
                Some(c) => {
                    joiner.flush(&mut out);
                    out.push(c);
                    self.cursor.read_while(&mut out, |c| c != '"' && c != '\\');
                }
                None => {
                    self.end_of_input("string")?;
                    break;
                }
            }
        }
        joiner.flush(&mut out);
        Ok(out)
    }

    /// Called after a backslash inside a string was consumed.
    fn parse_escape(
        &mut self,
        out: &mut String,
        joiner: &mut SurrogateJoiner,
    ) -> Result<(), ParserError> {
        match self.cursor.peek() {
            Some('u') => {
                self.cursor.read();
                let mut escape = UnicodeEscapeBuffer::new();
                loop {
                    let position = self.cursor.position();
                    // An escape cut off by the end of input is dropped; the
                    // string loop applies the truncation policy.
                    let Some(c) = self.cursor.read() else {
                        return Ok(());
                    };
                    match escape.feed(c) {
                        Ok(Some(unit)) => {
                            joiner.push(out, unit);
                            return Ok(());
                        }
                        Ok(None) => {}
                        Err(err) => return Err(self.syntax_error_at(err, position)),
                    }
                }
            }
            next => {
                joiner.flush(out);
                out.push('\\');
                if let Some(c) = next {
                    self.cursor.read();
                    out.push(c);
                }
                Ok(())
            }
        }
    }

    fn parse_number(&mut self) -> Result<Value, ParserError> {
        let position = self.cursor.position();
        let mut literal = String::new();
        self.cursor.read_while(&mut literal, is_number_char);
        NumberLexeme::classify(&literal)
            .into_value()
            .map_err(|err| self.syntax_error_at(err, position))
    }

    /// Reads a fixed four-character window to tell `true`, `false` and `null`
    /// apart.
    fn parse_keyword(&mut self) -> Result<Value, ParserError> {
        let position = self.cursor.position();
        let mut window = ExpectedLiteralBuffer::new();
        while !window.is_full() {
            match self.cursor.read() {
                Some(c) => window.push(c),
                None => break,
            }
        }

        match window.classify() {
            Some(ExpectedLiteralValue::Null) => Ok(Value::Null),
            Some(ExpectedLiteralValue::True) => Ok(Value::Boolean(true)),
            Some(ExpectedLiteralValue::FalsePrefix) => match self.cursor.read() {
                Some('e') => Ok(Value::Boolean(false)),
                next => {
                    let mut text = window.into_string();
                    text.extend(next);
                    Err(self.syntax_error_at(SyntaxError::InvalidLiteral(text), position))
                }
            },
            None => Err(self.syntax_error_at(
                SyntaxError::InvalidLiteral(window.into_string()),
                position,
            )),
        }
    }

    /// Called after a `/` was consumed. Does nothing unless `*` follows.
    fn skip_comment(&mut self) -> Result<(), ParserError> {
        if !self.cursor.eat('*') {
            return Ok(());
        }
        let (line, column) = self.cursor.position();
        loop {
            match self.cursor.read() {
                Some('*') if self.cursor.eat('/') => {
                    trace!(line, column, "skipped comment");
                    return Ok(());
                }
                Some(_) => {}
                None => return self.end_of_input("comment"),
            }
        }
    }

    fn descend(&mut self) -> Result<(), ParserError> {
        self.depth += 1;
        match self.options.max_depth {
            Some(limit) if self.depth > limit => {
                Err(self.syntax_error(SyntaxError::DepthLimitExceeded(limit)))
            }
            _ => Ok(()),
        }
    }

    /// Applies the truncation policy when the input ends inside `context`.
    fn end_of_input(&self, context: &'static str) -> Result<(), ParserError> {
        if self.options.reject_truncated_input {
            return Err(self.syntax_error(SyntaxError::UnexpectedEndOfInput));
        }
        debug!(context, "end of input closes unterminated {context}");
        Ok(())
    }

    fn syntax_error(&self, err: SyntaxError) -> ParserError {
        self.syntax_error_at(err, self.cursor.position())
    }

    fn syntax_error_at(&self, err: SyntaxError, (line, column): (usize, usize)) -> ParserError {
        let err = ParserError {
            source: err,
            line,
            column,
        };
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(!self.options.panic_on_error, "{err}");
        debug!(%err, "parse aborted");
        err
    }
}
