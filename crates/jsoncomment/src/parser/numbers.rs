use crate::{SyntaxError, Value};

/// Lexical hint used to pick the numeric representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberLexeme<'a> {
    Integer(&'a str), // no '.' and no exponent
    Float(&'a str),   // has '.' or exponent
}

/// Characters the number scanner consumes greedily.
#[inline]
pub(crate) fn is_number_char(c: char) -> bool {
    matches!(c, '0'..='9' | '.' | 'e' | 'E' | '+' | '-')
}

impl<'a> NumberLexeme<'a> {
    pub(crate) fn classify(literal: &'a str) -> Self {
        if literal.contains(['.', 'e', 'E']) {
            Self::Float(literal)
        } else {
            Self::Integer(literal)
        }
    }

    pub(crate) fn into_value(self) -> Result<Value, SyntaxError> {
        let parsed = match self {
            Self::Integer(s) => s.parse::<i64>().map(Value::Integer).map_err(|_| s),
            Self::Float(s) => s.parse::<f64>().map(Value::Float).map_err(|_| s),
        };
        parsed.map_err(|s| SyntaxError::InvalidNumber(s.into()))
    }
}
