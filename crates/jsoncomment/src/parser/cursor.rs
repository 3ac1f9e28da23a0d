use alloc::string::String;
use core::{iter::Peekable, str::Chars};

/// Single-character lookahead over the input text.
///
/// End of input is reported as `None` from both [`Cursor::peek`] and
/// [`Cursor::read`]; it is never an error at this layer.
#[derive(Debug)]
pub(crate) struct Cursor<'src> {
    chars: Peekable<Chars<'src>>,
    line: usize,
    column: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(text: &'src str) -> Self {
        Self {
            chars: text.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    #[inline]
    pub(crate) fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    #[inline]
    pub(crate) fn read(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consumes the next character if it equals `expected`.
    #[inline]
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.read();
            true
        } else {
            false
        }
    }

    /// Appends the longest prefix of characters matching `predicate` to `dst`
    /// and returns how many were copied.
    pub(crate) fn read_while<F>(&mut self, dst: &mut String, mut predicate: F) -> usize
    where
        F: FnMut(char) -> bool,
    {
        let mut copied = 0;
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.read();
            dst.push(ch);
            copied += 1;
        }
        copied
    }

    /// 1-based line and column of the next unread character.
    pub(crate) fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::Cursor;

    #[test]
    fn peek_does_not_advance() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.read(), Some('a'));
        assert_eq!(cursor.peek(), Some('b'));
    }

    #[test]
    fn end_of_input_is_repeatable() {
        let mut cursor = Cursor::new("x");
        assert_eq!(cursor.read(), Some('x'));
        assert_eq!(cursor.read(), None);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.read(), None);
    }

    #[test]
    fn tracks_lines_and_columns() {
        let mut cursor = Cursor::new("a\nbc");
        assert_eq!(cursor.position(), (1, 1));
        cursor.read();
        assert_eq!(cursor.position(), (1, 2));
        cursor.read();
        assert_eq!(cursor.position(), (2, 1));
        cursor.read();
        assert_eq!(cursor.position(), (2, 2));
    }

    #[test]
    fn read_while_stops_at_first_mismatch() {
        let mut cursor = Cursor::new("123,4");
        let mut dst = String::new();
        assert_eq!(cursor.read_while(&mut dst, |c| c.is_ascii_digit()), 3);
        assert_eq!(dst, "123");
        assert_eq!(cursor.peek(), Some(','));
    }

    #[test]
    fn eat_only_consumes_on_match() {
        let mut cursor = Cursor::new("*/");
        assert!(!cursor.eat('/'));
        assert!(cursor.eat('*'));
        assert!(cursor.eat('/'));
        assert!(!cursor.eat('/'));
    }

    #[test]
    fn counts_chars_not_bytes() {
        let mut cursor = Cursor::new("é€x");
        cursor.read();
        cursor.read();
        assert_eq!(cursor.position(), (1, 3));
        assert_eq!(cursor.read(), Some('x'));
    }
}
