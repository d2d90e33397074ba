//! Token driver.
//!
//! [`scan_one`] produces exactly one token per call and updates the scan
//! state around the classifier: line-start bookkeeping, whitespace runs,
//! sub-scanner hand-off, bracket context push/pop, and the signature
//! tracker. [`tokenize_line`] wraps it in an iterator over one line.

use crate::category::{Category, Punct, ScanOutcome};
use crate::classifier::scan_token;
use crate::context::{Alignment, Closer};
use crate::cursor::LineCursor;
use crate::signature::TokenHint;
use crate::state::ScanState;
use crate::sub_scanner;

/// One classified lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Exact source text of the token.
    pub text: &'a str,
    /// Byte offset of the token within its line.
    pub start: usize,
    pub category: Category,
    /// Punctuation signal, present exactly for [`Category::Punctuation`].
    pub punct: Option<Punct>,
}

impl Token<'_> {
    /// Byte offset one past the end of the token within its line.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Scan the next token from `cursor`, updating `state`.
///
/// Consumes at least one character unless the cursor is already at end
/// of line, in which case an empty [`Category::Whitespace`] token is
/// returned and `state` is left untouched. A blank line therefore leaves
/// the state exactly as it found it.
pub fn scan_one<'a>(state: &mut ScanState, cursor: &mut LineCursor<'a>) -> Token<'a> {
    cursor.begin_token();
    if cursor.eol() {
        return finish(cursor, ScanOutcome::of(Category::Whitespace), None);
    }

    if cursor.sol() {
        begin_line(state, cursor);
    }

    if cursor.eat_space() {
        return finish(cursor, ScanOutcome::of(Category::Whitespace), None);
    }

    let outcome = match state.sub_scanner {
        Some(sub) => sub_scanner::resume(sub, cursor, state),
        None => scan_token(cursor, state),
    };

    if outcome.category.is_comment_like() {
        return finish(cursor, outcome, None);
    }

    let contexts = &mut state.contexts;
    if contexts.top().align == Alignment::Unknown {
        contexts.top_mut().align = Alignment::Aligned;
    }

    let punct = match outcome.punct {
        Some(ch) => {
            let role = state.signature.observe_punct(ch);
            if let Some(closer) = Closer::for_opener(ch) {
                state.contexts.push(state.indented, cursor.column(), closer);
            } else if let Some(popped) = state.contexts.pop_matching(ch) {
                state.indented = popped.indented;
            }
            Some(Punct { ch, role })
        }
        None => {
            let hint = hint_for(outcome.category, cursor.current());
            state.signature.observe_token(hint);
            None
        }
    };

    state.start_of_line = false;
    finish(cursor, outcome, punct)
}

/// Line-start bookkeeping: an unresolved context becomes unaligned and the
/// indentation baseline moves to this line.
fn begin_line(state: &mut ScanState, cursor: &LineCursor<'_>) {
    let top = state.contexts.top_mut();
    if top.align == Alignment::Unknown {
        top.align = Alignment::Unaligned;
    }
    state.indented = i32::try_from(cursor.indentation()).unwrap_or(i32::MAX);
    state.start_of_line = true;
}

fn finish<'a>(cursor: &LineCursor<'a>, outcome: ScanOutcome, punct: Option<Punct>) -> Token<'a> {
    Token {
        text: cursor.current(),
        start: cursor.start(),
        category: outcome.category,
        punct,
    }
}

/// What the signature tracker needs to know about a non-punctuation token.
fn hint_for(category: Category, text: &str) -> Option<TokenHint> {
    match category {
        Category::Keyword if text == "def" => Some(TokenHint::Def),
        Category::TypeKeyword => Some(TokenHint::Type),
        Category::Operator if text == "->" => Some(TokenHint::Returns),
        Category::Identifier if text == "returns" => Some(TokenHint::Returns),
        Category::Identifier
        | Category::Builtin
        | Category::Constant
        | Category::Atom
        | Category::BlockOrTxProperty => Some(TokenHint::Name),
        _ => None,
    }
}

// ─── Line Iterator ──────────────────────────────────────────────

/// Iterator over the tokens of one line.
///
/// Borrows the scan state mutably; when the iterator is exhausted the
/// state is ready for the next line.
pub struct LineTokens<'s, 'a> {
    state: &'s mut ScanState,
    cursor: LineCursor<'a>,
}

impl<'a> Iterator for LineTokens<'_, 'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.cursor.eol() {
            return None;
        }
        Some(scan_one(self.state, &mut self.cursor))
    }
}

/// Tokenize `line` (without its terminator), continuing from `state`.
pub fn tokenize_line<'s, 'a>(
    state: &'s mut ScanState,
    line: &'a str,
    tab_size: u32,
) -> LineTokens<'s, 'a> {
    LineTokens {
        state,
        cursor: LineCursor::new(line, tab_size),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
