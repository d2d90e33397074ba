//! Line splitting and per-line scanning shared by [`lex`](crate::lex) and
//! [`Document`](crate::Document).
//!
//! A document of `n` newlines has `n + 1` lines; the last one is never
//! terminated and may be empty. A `\r` directly before the `\n` (or at the
//! very end of the document) belongs to the terminator, not to the line.

use smallvec::SmallVec;
use vy_lexer_core::{tokenize_line, Category, Punct, ScanState};

use crate::{LexError, LexedToken, Span};

/// Byte layout of one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LineRange {
    /// Absolute offset of the first byte.
    pub start: usize,
    /// Length of the line text, terminator excluded.
    pub len: usize,
    /// Length of the terminator (0, 1, or 2).
    pub terminator: usize,
}

impl LineRange {
    #[inline]
    pub fn text_end(&self) -> usize {
        self.start + self.len
    }

    /// Offset one past the terminator.
    #[inline]
    pub fn end(&self) -> usize {
        self.text_end() + self.terminator
    }

    #[inline]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.text_end()]
    }

    /// Whitespace token covering the terminator, if any.
    pub fn terminator_token(&self) -> Option<LexedToken> {
        (self.terminator > 0).then(|| LexedToken {
            span: span_of(self.text_end(), self.terminator),
            category: Category::Whitespace,
            punct: None,
        })
    }
}

/// Split `text`, which starts at absolute offset `base`, into lines.
///
/// With `tail` set, `text` runs to the end of the document and always
/// yields a final unterminated line. Otherwise `text` must end with a
/// terminator and no empty line is produced after it.
pub(crate) fn split_lines(text: &str, base: usize, tail: bool) -> Vec<LineRange> {
    let mut lines = Vec::new();
    let mut pos = 0;
    loop {
        let rest = &text[pos..];
        let Some(newline) = rest.find('\n') else {
            if tail || !rest.is_empty() {
                let len = rest.strip_suffix('\r').map_or(rest.len(), str::len);
                lines.push(LineRange {
                    start: base + pos,
                    len,
                    terminator: rest.len() - len,
                });
            }
            return lines;
        };
        let line = &rest[..newline];
        let len = line.strip_suffix('\r').map_or(line.len(), str::len);
        lines.push(LineRange {
            start: base + pos,
            len,
            terminator: newline + 1 - len,
        });
        pos += newline + 1;
    }
}

/// Token within a line, offset relative to the line start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LineToken {
    pub offset: u32,
    pub len: u32,
    pub category: Category,
    pub punct: Option<Punct>,
}

impl LineToken {
    pub fn absolute(self, line_start: usize) -> LexedToken {
        let start = to_u32(line_start) + self.offset;
        LexedToken {
            span: Span::new(start, start + self.len),
            category: self.category,
            punct: self.punct,
        }
    }
}

pub(crate) type LineTokens = SmallVec<[LineToken; 8]>;

/// Scan one line, continuing from `state`.
pub(crate) fn scan_line(state: &mut ScanState, text: &str, tab_size: u32) -> LineTokens {
    tokenize_line(state, text, tab_size)
        .map(|token| LineToken {
            offset: to_u32(token.start),
            len: to_u32(token.text.len()),
            category: token.category,
            punct: token.punct,
        })
        .collect()
}

/// Reject documents whose offsets would not fit a [`Span`].
pub(crate) fn check_size(len: usize) -> Result<(), LexError> {
    if u32::try_from(len).is_err() {
        return Err(LexError::SourceTooLarge { len });
    }
    Ok(())
}

/// Offsets are bounded by [`check_size`] before any span is built.
#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn span_of(start: usize, len: usize) -> Span {
    let start = to_u32(start);
    Span::new(start, start + to_u32(len))
}
