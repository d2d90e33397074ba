//! String and block-comment consumers.
//!
//! A sub-scanner owns the stream from its opening delimiter until its
//! terminator. When a line ends first, the sub-scanner is left in
//! [`ScanState::sub_scanner`](crate::ScanState::sub_scanner) and the next
//! line resumes inside it.
//!
//! # Strings
//!
//! `\` escapes the next character (except inside back-ticks). A `"` or
//! `'` literal only continues onto the next line when the line ends in an
//! escaping backslash; otherwise the line end closes it, so a stray quote
//! cannot swallow the rest of the document. Back-tick literals always
//! continue until their closing back-tick.
//!
//! # Block Comments
//!
//! Triple-quoted regions. The terminator is three consecutive quote
//! characters of the opening kind, tracked with a run counter. Inside the
//! comment, an `@word` at a word start becomes its own token classified
//! against the NatSpec tag table, and switches the grammar to
//! [`Grammar::Doc`] until the comment closes.

use tracing::trace;

use crate::category::{Category, ScanOutcome};
use crate::classifier::word_category;
use crate::cursor::LineCursor;
use crate::state::{Grammar, ScanState};
use crate::symbols::is_word_char;

/// Quote character of a literal or block comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quote {
    Double,
    Single,
    Backtick,
}

impl Quote {
    /// Quote kind for an opening character.
    pub fn from_char(ch: char) -> Option<Quote> {
        match ch {
            '"' => Some(Quote::Double),
            '\'' => Some(Quote::Single),
            '`' => Some(Quote::Backtick),
            _ => None,
        }
    }

    pub const fn char(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
            Quote::Backtick => '`',
        }
    }

    const fn byte(self) -> u8 {
        match self {
            Quote::Double => b'"',
            Quote::Single => b'\'',
            Quote::Backtick => b'`',
        }
    }
}

/// A continuation that owns the stream until its terminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubScanner {
    String { quote: Quote },
    BlockComment { quote: Quote },
}

/// Continue the active sub-scanner on a new token.
pub(crate) fn resume(
    sub: SubScanner,
    cursor: &mut LineCursor<'_>,
    state: &mut ScanState,
) -> ScanOutcome {
    match sub {
        SubScanner::String { quote } => scan_string(cursor, state, quote),
        SubScanner::BlockComment { quote } => scan_block_comment(cursor, state, quote),
    }
}

// ─── Strings ────────────────────────────────────────────────────

/// Consume string content up to and including the closing quote.
///
/// The opening quote, if any, has already been consumed by the caller.
pub(crate) fn scan_string(
    cursor: &mut LineCursor<'_>,
    state: &mut ScanState,
    quote: Quote,
) -> ScanOutcome {
    let escapes = quote != Quote::Backtick;
    loop {
        match cursor.skip_to_either(quote.byte(), b'\\') {
            Some(b'\\') => {
                cursor.next_char(); // consume '\'
                if escapes && cursor.next_char().is_none() {
                    // Escaped line end: the literal continues.
                    set_string_continuation(state, Some(SubScanner::String { quote }));
                    return ScanOutcome::of(Category::String);
                }
            }
            Some(_) => {
                cursor.next_char(); // consume closing quote
                set_string_continuation(state, None);
                return ScanOutcome::of(Category::String);
            }
            None => {
                let carry = (quote == Quote::Backtick).then_some(SubScanner::String { quote });
                set_string_continuation(state, carry);
                return ScanOutcome::of(Category::String);
            }
        }
    }
}

fn set_string_continuation(state: &mut ScanState, next: Option<SubScanner>) {
    if state.sub_scanner != next {
        trace!(from = ?state.sub_scanner, to = ?next, "string sub-scanner");
    }
    state.sub_scanner = next;
}

// ─── Block Comments ─────────────────────────────────────────────

/// Consume block-comment text.
///
/// Stops after a quote that directly follows another quote of the same
/// kind within this call (leaving the sub-scanner), before a NatSpec
/// `@word`, or at end of line (staying active). A third closing quote is
/// taken along so `"""` closes as one token.
pub(crate) fn scan_block_comment(
    cursor: &mut LineCursor<'_>,
    state: &mut ScanState,
    quote: Quote,
) -> ScanOutcome {
    if cursor.pos() == cursor.start() && at_doc_word(cursor) {
        cursor.next_char(); // consume '@'
        cursor.eat_while(is_word_char);
        if state.grammar != Grammar::Doc {
            trace!("entering doc grammar");
            state.grammar = Grammar::Doc;
        }
        return ScanOutcome::of(word_category(cursor, state.grammar));
    }

    let close = quote.char();
    let mut maybe_end = false;
    while let Some(ch) = cursor.peek() {
        if ch == '@' && cursor.pos() > cursor.start() && at_doc_word(cursor) {
            return ScanOutcome::of(Category::Comment);
        }
        cursor.next_char();
        if ch == close && maybe_end {
            // Third quote of a closing triple belongs to the comment.
            cursor.eat(close);
            trace!("block comment closed");
            state.sub_scanner = None;
            state.grammar = Grammar::Code;
            return ScanOutcome::of(Category::Comment);
        }
        maybe_end = ch == close;
    }
    ScanOutcome::of(Category::Comment)
}

/// `@` followed by a word character, at the start of a word.
fn at_doc_word(cursor: &LineCursor<'_>) -> bool {
    let word_start = match cursor.prev() {
        None => true,
        Some(prev) => prev.is_whitespace() || prev == '"' || prev == '\'',
    };
    word_start && cursor.peek() == Some('@') && cursor.peek_nth(1).is_some_and(is_word_char)
}

#[cfg(test)]
mod tests;
