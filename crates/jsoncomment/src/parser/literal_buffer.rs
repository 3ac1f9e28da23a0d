use alloc::string::String;

/// Number of characters read up front to tell `true`, `false` and `null`
/// apart.
pub(crate) const LOOKAHEAD: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExpectedLiteralValue {
    Null,
    True,
    /// `fals`: one more `e` must follow.
    FalsePrefix,
}

/// The fixed-width window of characters read for a keyword.
#[derive(Debug, Default)]
pub(crate) struct ExpectedLiteralBuffer(String);

impl ExpectedLiteralBuffer {
    pub(crate) fn new() -> Self {
        Self(String::with_capacity(LOOKAHEAD))
    }

    pub(crate) fn push(&mut self, c: char) {
        self.0.push(c);
    }

    pub(crate) fn is_full(&self) -> bool {
        self.0.chars().count() >= LOOKAHEAD
    }

    /// Classifies a full window. `None` means the keyword is malformed.
    pub(crate) fn classify(&self) -> Option<ExpectedLiteralValue> {
        match self.0.as_str() {
            "null" => Some(ExpectedLiteralValue::Null),
            "true" => Some(ExpectedLiteralValue::True),
            "fals" => Some(ExpectedLiteralValue::FalsePrefix),
            _ => None,
        }
    }

    pub(crate) fn into_string(self) -> String {
        self.0
    }
}
