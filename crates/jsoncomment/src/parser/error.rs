use alloc::string::String;

use thiserror::Error;

/// A fault that aborted a parse, with the 1-based position where it was
/// detected.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{source} at {line}:{column}")]
pub struct ParserError {
    pub(crate) source: SyntaxError,
    /// Line of the fault, starting at 1.
    pub line: usize,
    /// Column of the fault, starting at 1, counted in characters.
    pub column: usize,
}

impl ParserError {
    /// The kind of fault.
    #[must_use]
    pub fn kind(&self) -> &SyntaxError {
        &self.source
    }
}

/// Kinds of fault the parser reports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyntaxError {
    /// A value starting with `t`, `f` or `n` is not `true`, `false` or `null`.
    #[error("invalid literal '{0}'")]
    InvalidLiteral(String),
    /// A `\u` escape contains a character that is not a hex digit.
    #[error("invalid unicode escape sequence at character: '{0}'")]
    InvalidUnicodeEscapeChar(char),
    /// A number literal could not be converted to an integer or a float.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    /// Objects and arrays are nested deeper than
    /// [`ParserOptions::max_depth`](crate::ParserOptions::max_depth).
    #[error("nesting depth exceeds the limit of {0}")]
    DepthLimitExceeded(usize),
    /// Input ended inside a string, comment, object or array while
    /// [`ParserOptions::reject_truncated_input`](crate::ParserOptions::reject_truncated_input)
    /// was set.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}
