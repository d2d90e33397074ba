use super::*;
use pretty_assertions::assert_eq;

/// Classify the first token of `text` in default mode.
fn first(text: &str) -> (Category, &str) {
    let mut state = ScanState::new(4);
    let mut cursor = LineCursor::new(text, 4);
    let outcome = scan_token(&mut cursor, &mut state);
    (outcome.category, cursor.current())
}

fn category(text: &str) -> Category {
    first(text).0
}

// === Words ===

#[test]
fn word_tables_in_priority_order() {
    assert_eq!(category("def"), Category::Keyword);
    assert_eq!(category("elif"), Category::ControlKeyword);
    assert_eq!(category("MAX_UINT256"), Category::Constant);
    assert_eq!(category("keccak256"), Category::Builtin);
    assert_eq!(category("uint256"), Category::TypeKeyword);
    assert_eq!(category("HashMap"), Category::TypeKeyword);
    assert_eq!(category("now"), Category::BlockOrTxProperty);
    assert_eq!(category("balance"), Category::Identifier);
}

#[test]
fn keywords_win_over_control_words_and_atoms() {
    assert_eq!(category("if"), Category::Keyword);
    assert_eq!(category("and"), Category::Keyword);
    assert_eq!(category("True"), Category::Keyword);
}

#[test]
fn atoms_classify_as_keywords() {
    for atom in ["None", "True", "False"] {
        assert!(is_atom(atom));
        assert!(is_keyword(atom));
        assert_eq!(category(atom), Category::Keyword);
    }
}

#[test]
fn builtin_wins_over_bare_property() {
    assert_eq!(category("blockhash"), Category::Builtin);
}

#[test]
fn property_access_is_one_token() {
    assert_eq!(first("msg.sender,"), (Category::BlockOrTxProperty, "msg.sender"));
    assert_eq!(first("block.timestamp"), (Category::BlockOrTxProperty, "block.timestamp"));
    assert_eq!(first("tx.origin)"), (Category::BlockOrTxProperty, "tx.origin"));
}

#[test]
fn property_suffix_requires_word_boundary() {
    assert_eq!(first("msg.senders"), (Category::Identifier, "msg"));
    assert_eq!(first("msg.foo"), (Category::Identifier, "msg"));
    assert_eq!(first("block"), (Category::Identifier, "block"));
}

#[test]
fn word_with_unicode_and_dollar() {
    assert_eq!(first("café+1"), (Category::Identifier, "café"));
    assert_eq!(first("$x y"), (Category::Identifier, "$x"));
}

#[test]
fn unknown_symbol_is_a_one_char_identifier() {
    assert_eq!(first("\\x"), (Category::Identifier, "\\"));
    assert_eq!(first("?"), (Category::Identifier, "?"));
}

// === Decorators ===

#[test]
fn decorator_modifiers_are_keywords() {
    assert_eq!(first("@external"), (Category::Keyword, "@external"));
    assert_eq!(first("@nonreentrant(\"lock\")"), (Category::Keyword, "@nonreentrant"));
}

#[test]
fn other_decorators_are_identifiers() {
    assert_eq!(first("@deploy"), (Category::Identifier, "@deploy"));
    assert_eq!(first("@"), (Category::Identifier, "@"));
}

// === Numbers ===

#[test]
fn hex_literals() {
    assert_eq!(first("0x1A2b"), (Category::Number, "0x1A2b"));
    assert_eq!(first("0XFF)"), (Category::Number, "0XFF"));
    assert_eq!(first("0x"), (Category::Number, "0x"));
}

#[test]
fn decimal_literals() {
    assert_eq!(first("42"), (Category::Number, "42"));
    assert_eq!(first("1.5e-10"), (Category::Number, "1.5e-10"));
    assert_eq!(first("3.14)"), (Category::Number, "3.14"));
    assert_eq!(first("2E+8"), (Category::Number, "2E+8"));
    assert_eq!(first("0.5"), (Category::Number, "0.5"));
    assert_eq!(first("7."), (Category::Number, "7."));
}

#[test]
fn exponent_needs_digits() {
    assert_eq!(first("1e"), (Category::Number, "1"));
    assert_eq!(first("1e+x"), (Category::Number, "1"));
}

#[test]
fn legacy_octal() {
    assert_eq!(first("0755"), (Category::Number, "0755"));
    assert_eq!(first("089"), (Category::Number, "089"));
    assert_eq!(first("0"), (Category::Number, "0"));
}

// === Operators and Punctuation ===

#[test]
fn operator_runs_are_maximal() {
    assert_eq!(first("->"), (Category::Operator, "->"));
    assert_eq!(first("**=x"), (Category::Operator, "**="));
    assert_eq!(first("!= 0"), (Category::Operator, "!="));
}

#[test]
fn punctuation_signals_its_char() {
    for ch in ['(', ')', '[', ']', '{', '}', ',', ';', ':', '.'] {
        let text = ch.to_string();
        let mut state = ScanState::new(4);
        let mut cursor = LineCursor::new(&text, 4);
        let outcome = scan_token(&mut cursor, &mut state);
        assert_eq!(outcome, ScanOutcome::punctuation(ch));
    }
}

#[test]
fn colon_is_punctuation_not_operator() {
    assert_eq!(first(":="), (Category::Punctuation, ":"));
}

// === Comments and Pragmas ===

#[test]
fn pragma_takes_the_rest_of_the_line() {
    assert_eq!(
        first("#pragma version ^0.3.10"),
        (Category::MetaPragma, "#pragma version ^0.3.10")
    );
}

#[test]
fn hash_comment_takes_the_rest_of_the_line() {
    assert_eq!(first("# @version 0.3"), (Category::Comment, "# @version 0.3"));
    assert_eq!(first("#pragm"), (Category::Comment, "#pragm"));
}

#[test]
fn triple_quote_opens_block_comment() {
    let mut state = ScanState::new(4);
    let mut cursor = LineCursor::new("\"\"\" doc", 4);
    let outcome = scan_token(&mut cursor, &mut state);
    assert_eq!(outcome.category, Category::Comment);
    assert_eq!(
        state.sub_scanner,
        Some(SubScanner::BlockComment {
            quote: Quote::Double
        })
    );
}

#[test]
fn single_quote_string_is_not_a_block_comment() {
    let mut state = ScanState::new(4);
    let mut cursor = LineCursor::new("''", 4);
    let outcome = scan_token(&mut cursor, &mut state);
    assert_eq!(outcome.category, Category::String);
    assert_eq!(cursor.current(), "''");
    assert!(state.is_default_mode());
}

// === Totality ===

#[test]
fn every_token_consumes_input() {
    for text in ["a", "1", "@", "#", "\"", "`", "'", "+", "(", "\\", "\u{7}", "é", "0x"] {
        let mut state = ScanState::new(4);
        let mut cursor = LineCursor::new(text, 4);
        scan_token(&mut cursor, &mut state);
        assert!(cursor.pos() > 0, "{text:?} consumed nothing");
    }
}
