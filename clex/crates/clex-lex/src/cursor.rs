//! Character cursor for traversing a single source line.
//!
//! The scanner never looks across a line boundary, so the cursor only ever
//! sees one physical line. It tracks the byte position into the line and the
//! 1-based character column for diagnostics.

/// A cursor over one line of source text.
///
/// # Example
///
/// ```
/// use clex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'n');
/// assert_eq!(cursor.column(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The line being traversed.
    source: &'a str,

    /// Current byte position in the line.
    position: usize,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `'\0'` at end of line.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the cursor.
    ///
    /// Returns `'\0'` past the end of the line.
    ///
    /// ```
    /// use clex_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<<=");
    /// assert_eq!(cursor.peek_char(0), '<');
    /// assert_eq!(cursor.peek_char(2), '=');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();
        let bytes = rest.as_bytes();

        // Fast path for ASCII (most common case)
        if offset < bytes.len() && bytes[..=offset].is_ascii() {
            return bytes[offset] as char;
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Advances past the current character.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
            self.column += 1;
        }
    }

    /// Advances past `n` characters.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Returns true once every character of the line has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current column (1-based, in characters).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The unconsumed rest of the line.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
