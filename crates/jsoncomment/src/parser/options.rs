/// Configuration options for the parser.
///
/// # Examples
///
/// ```rust
/// use jsoncomment::{ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     reject_truncated_input: true,
///     max_depth: Some(64),
///     ..Default::default()
/// };
/// assert!(parse_with_options("[1, 2", options).is_err());
/// ```
///
/// # Default
///
/// Truncated input is accepted and nesting depth is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether running out of input inside a string, comment, object or array
    /// is a fault.
    ///
    /// When `false`, end of input closes whatever is open and the partial
    /// value is returned: `{"a": [1, 2` parses as `{"a": [1, 2]}`. A key that
    /// never reached its `:` and an unfinished `\u` escape are dropped.
    ///
    /// When `true`, the same inputs fail with
    /// [`SyntaxError::UnexpectedEndOfInput`](crate::SyntaxError::UnexpectedEndOfInput).
    ///
    /// # Default
    ///
    /// `false`
    pub reject_truncated_input: bool,

    /// Maximum nesting depth of objects and arrays.
    ///
    /// The root container is depth 1. Exceeding the limit fails with
    /// [`SyntaxError::DepthLimitExceeded`](crate::SyntaxError::DepthLimitExceeded).
    /// With `None`, depth is bounded only by the call stack, so adversarial
    /// input such as a long run of `[` can overflow it.
    ///
    /// # Default
    ///
    /// `None`
    pub max_depth: Option<usize>,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on faults instead of returning them.
    ///
    /// Enabled only in test and fuzzing builds to produce backtraces at the
    /// fault site.
    pub panic_on_error: bool,
}
