//! Read head over a single line of source text.
//!
//! The scanner is fed one line at a time, line terminator excluded. The
//! cursor tracks two byte offsets: `start`, where the token being built
//! began, and `pos`, the read head. Each call to
//! [`scan_one`](crate::scan_one) turns `start..pos` into exactly one token.
//!
//! # Columns
//!
//! Columns are visual and tab-aware: a tab advances to the next multiple
//! of the configured tab size, every other character counts as one column.
//! Byte offsets (`pos`, `start`) are always on `char` boundaries.

/// Compute the visual column reached after `text`, expanding tabs.
pub fn count_column(text: &str, tab_size: u32) -> u32 {
    let tab_size = tab_size.max(1);
    text.chars().fold(0u32, |col, ch| {
        if ch == '\t' {
            col + tab_size - (col % tab_size)
        } else {
            col + 1
        }
    })
}

/// Cursor over one line of text.
///
/// The cursor is [`Copy`], so the classifier can snapshot it before a
/// speculative match and restore it on failure.
#[derive(Clone, Copy, Debug)]
pub struct LineCursor<'a> {
    line: &'a str,
    /// Read head (byte offset into `line`).
    pos: usize,
    /// Start of the token currently being built.
    start: usize,
    tab_size: u32,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor at the start of `line`.
    ///
    /// `line` must not contain a line terminator; the document layer splits
    /// on `\n` and strips a trailing `\r` before handing lines over.
    pub fn new(line: &'a str, tab_size: u32) -> Self {
        debug_assert!(
            !line.contains('\n'),
            "line cursor must not span a line terminator"
        );
        Self {
            line,
            pos: 0,
            start: 0,
            tab_size: tab_size.max(1),
        }
    }

    /// The full line this cursor reads.
    #[inline]
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Current byte offset of the read head.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Byte offset where the current token started.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Tab width used for column computations.
    #[inline]
    pub fn tab_size(&self) -> u32 {
        self.tab_size
    }

    /// `true` while the read head sits at the very beginning of the line.
    #[inline]
    pub fn sol(&self) -> bool {
        self.pos == 0
    }

    /// `true` once the whole line has been consumed.
    #[inline]
    pub fn eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Unconsumed remainder of the line.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Character under the read head, if any.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character just before the read head, if any.
    #[inline]
    pub fn prev(&self) -> Option<char> {
        self.line[..self.pos].chars().next_back()
    }

    /// Character `n` positions past the read head.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Consume and return the character under the read head.
    #[inline]
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consume `ch` if it is the next character.
    #[inline]
    pub fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.pos += ch.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume the next character if `pred` accepts it.
    #[inline]
    pub fn eat_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(ch) if pred(ch) => {
                self.pos += ch.len_utf8();
                Some(ch)
            }
            _ => None,
        }
    }

    /// Advance while `pred` accepts the next character.
    ///
    /// Returns `true` if at least one character was consumed.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let before = self.pos;
        let consumed: usize = self
            .rest()
            .chars()
            .take_while(|&ch| pred(ch))
            .map(char::len_utf8)
            .sum();
        self.pos += consumed;
        self.pos > before
    }

    /// Consume `text` if the remainder starts with it.
    pub fn eat_str(&mut self, text: &str) -> bool {
        if self.rest().starts_with(text) {
            self.pos += text.len();
            true
        } else {
            false
        }
    }

    /// Returns `true` if the remainder starts with `text` (no consumption).
    #[inline]
    pub fn starts_with(&self, text: &str) -> bool {
        self.rest().starts_with(text)
    }

    /// Consume a run of whitespace. Returns `true` if any was consumed.
    #[inline]
    pub fn eat_space(&mut self) -> bool {
        self.eat_while(char::is_whitespace)
    }

    /// Consume the rest of the line.
    #[inline]
    pub fn skip_to_end(&mut self) {
        self.pos = self.line.len();
    }

    /// Advance to the next occurrence of either ASCII byte, using memchr.
    ///
    /// Returns the byte found (the read head is left on it), or `None`
    /// with the read head at end of line.
    pub fn skip_to_either(&mut self, a: u8, b: u8) -> Option<u8> {
        let remaining = &self.line.as_bytes()[self.pos..];
        if let Some(offset) = memchr::memchr2(a, b, remaining) {
            self.pos += offset;
            Some(remaining[offset])
        } else {
            self.pos = self.line.len();
            None
        }
    }

    /// Mark the read head as the start of the next token.
    #[inline]
    pub fn begin_token(&mut self) {
        self.start = self.pos;
    }

    /// Text of the token built so far (`start..pos`).
    #[inline]
    pub fn current(&self) -> &'a str {
        &self.line[self.start..self.pos]
    }

    /// Visual column where the current token started.
    pub fn column(&self) -> u32 {
        count_column(&self.line[..self.start], self.tab_size)
    }

    /// Visual column of the first non-whitespace character of the line.
    pub fn indentation(&self) -> u32 {
        let trimmed = self.line.trim_start();
        let leading = &self.line[..self.line.len() - trimmed.len()];
        count_column(leading, self.tab_size)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
