//! Default-mode token classifier.
//!
//! Consumes one token starting at a non-whitespace character and reports
//! its category. Dispatch is first-match-wins:
//!
//! 1. `#pragma` → rest of line, [`Category::MetaPragma`]
//! 2. `"""` / `'''` → block-comment sub-scanner
//! 3. `()[]{},;:.` → [`Category::Punctuation`] with a punctuation signal
//! 4. `#` → rest of line, [`Category::Comment`]
//! 5. `@word` → [`Category::Keyword`] for decorator modifiers, otherwise
//!    classified as a word (including its `@`)
//! 6. `0x` + hex digits → [`Category::Number`]
//! 7. digits → [`Category::Number`] (legacy octal, decimal, exponent)
//! 8. `"`, `'`, `` ` `` → string sub-scanner
//! 9. operator characters → [`Category::Operator`] (maximal munch)
//! 10. anything else → maximal word run, classified by the symbol tables;
//!     a lone non-word character becomes a one-character identifier
//!
//! Every path consumes at least one character.

use tracing::trace;

use crate::category::{Category, ScanOutcome};
use crate::cursor::LineCursor;
use crate::state::{Grammar, ScanState};
use crate::sub_scanner::{scan_block_comment, scan_string, Quote, SubScanner};
use crate::symbols::{
    block_tx_properties, is_atom, is_bare_block_tx_property, is_builtin, is_constant,
    is_control_keyword, is_decorator_modifier, is_keyword, is_natspec_tag, is_operator_char,
    is_punctuation_char, is_value_type, is_word_char,
};

/// Scan one default-mode token.
pub(crate) fn scan_token(cursor: &mut LineCursor<'_>, state: &mut ScanState) -> ScanOutcome {
    if cursor.eat_str("#pragma") {
        cursor.skip_to_end();
        return ScanOutcome::of(Category::MetaPragma);
    }

    if let Some(quote) = triple_quote(cursor) {
        cursor.eat_str(triple_quote_text(quote));
        trace!(?quote, "block comment opened");
        state.sub_scanner = Some(SubScanner::BlockComment { quote });
        return scan_block_comment(cursor, state, quote);
    }

    let Some(ch) = cursor.next_char() else {
        // Nothing left on the line; the driver never calls in this case.
        return ScanOutcome::of(Category::Whitespace);
    };

    if is_punctuation_char(ch) {
        return ScanOutcome::punctuation(ch);
    }

    match ch {
        '#' => {
            cursor.skip_to_end();
            ScanOutcome::of(Category::Comment)
        }
        '@' => {
            cursor.eat_while(is_word_char);
            if is_decorator_modifier(&cursor.current()[1..]) {
                ScanOutcome::of(Category::Keyword)
            } else {
                ScanOutcome::of(word_category(cursor, state.grammar))
            }
        }
        '0' if cursor.eat_if(|c| c == 'x' || c == 'X').is_some() => {
            cursor.eat_while(|c| c.is_ascii_hexdigit());
            ScanOutcome::of(Category::Number)
        }
        '0'..='9' => {
            eat_number(cursor, ch);
            ScanOutcome::of(Category::Number)
        }
        _ => {
            if let Some(quote) = Quote::from_char(ch) {
                return scan_string(cursor, state, quote);
            }
            if is_operator_char(ch) {
                cursor.eat_while(is_operator_char);
                return ScanOutcome::of(Category::Operator);
            }
            if is_word_char(ch) {
                cursor.eat_while(is_word_char);
            }
            ScanOutcome::of(word_category(cursor, state.grammar))
        }
    }
}

// ─── Words ──────────────────────────────────────────────────────

/// Classify the word in `cursor.current()`.
///
/// In [`Grammar::Doc`] only the NatSpec tag table applies. In code, the
/// tables are checked in priority order; a block/transaction object
/// (`block`, `msg`, `tx`) followed by `.property` consumes the suffix so
/// the whole access becomes one token.
pub(crate) fn word_category(cursor: &mut LineCursor<'_>, grammar: Grammar) -> Category {
    let word = cursor.current();

    if grammar == Grammar::Doc {
        return if is_natspec_tag(word) {
            Category::DocTag
        } else {
            Category::DocText
        };
    }

    if is_keyword(word) {
        Category::Keyword
    } else if is_control_keyword(word) {
        Category::ControlKeyword
    } else if is_constant(word) {
        Category::Constant
    } else if is_builtin(word) {
        Category::Builtin
    } else if is_value_type(word) {
        Category::TypeKeyword
    } else if is_bare_block_tx_property(word) || eat_property_suffix(cursor, word) {
        Category::BlockOrTxProperty
    } else if is_atom(word) {
        // Every atom is also a keyword, so this arm only guards the table.
        Category::Atom
    } else {
        Category::Identifier
    }
}

/// Consume `.property` after a block/transaction object, if it names a
/// known property and ends at a word boundary.
fn eat_property_suffix(cursor: &mut LineCursor<'_>, object: &str) -> bool {
    let Some(properties) = block_tx_properties(object) else {
        return false;
    };
    for property in properties {
        let mut probe = *cursor;
        if probe.eat('.') && probe.eat_str(property) && !probe.peek().is_some_and(is_word_char) {
            *cursor = probe;
            return true;
        }
    }
    false
}

// ─── Numbers ────────────────────────────────────────────────────

/// Consume the remainder of a numeric literal whose first digit is `first`.
///
/// A leading `0` followed by octal digits is a legacy octal literal.
/// Otherwise: `[0-9]*(\.[0-9]*)?([eE][+-]?[0-9]+)?`.
fn eat_number(cursor: &mut LineCursor<'_>, first: char) {
    if first == '0' && cursor.eat_while(|c| ('0'..='7').contains(&c)) {
        return;
    }
    cursor.eat_while(|c| c.is_ascii_digit());
    if cursor.eat('.') {
        cursor.eat_while(|c| c.is_ascii_digit());
    }
    eat_exponent(cursor);
}

/// Consume `[eE][+-]?[0-9]+` only when the digits are present.
fn eat_exponent(cursor: &mut LineCursor<'_>) {
    let mut probe = *cursor;
    if probe.eat_if(|c| c == 'e' || c == 'E').is_none() {
        return;
    }
    probe.eat_if(|c| c == '+' || c == '-');
    if probe.eat_while(|c| c.is_ascii_digit()) {
        *cursor = probe;
    }
}

// ─── Block Comment Openers ──────────────────────────────────────

fn triple_quote(cursor: &LineCursor<'_>) -> Option<Quote> {
    if cursor.starts_with("\"\"\"") {
        Some(Quote::Double)
    } else if cursor.starts_with("'''") {
        Some(Quote::Single)
    } else {
        None
    }
}

const fn triple_quote_text(quote: Quote) -> &'static str {
    match quote {
        Quote::Single => "'''",
        Quote::Double | Quote::Backtick => "\"\"\"",
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
