use super::*;
use crate::scanner::tokenize_line;
use pretty_assertions::assert_eq;

fn tokens<'a>(state: &mut ScanState, line: &'a str) -> Vec<(Category, &'a str)> {
    tokenize_line(state, line, 4)
        .map(|t| (t.category, t.text))
        .collect()
}

// === Strings ===

#[test]
fn double_quoted_string_with_other_quote_inside() {
    let mut state = ScanState::new(4);
    assert_eq!(tokens(&mut state, "\"it's\""), vec![(Category::String, "\"it's\"")]);
    assert!(state.is_default_mode());
}

#[test]
fn escaped_quote_does_not_close() {
    let mut state = ScanState::new(4);
    assert_eq!(
        tokens(&mut state, r"'a\'b' c"),
        vec![
            (Category::String, r"'a\'b'"),
            (Category::Whitespace, " "),
            (Category::Identifier, "c"),
        ]
    );
}

#[test]
fn unterminated_string_closes_at_line_end() {
    let mut state = ScanState::new(4);
    assert_eq!(tokens(&mut state, "\"abc"), vec![(Category::String, "\"abc")]);
    assert!(state.is_default_mode());
    assert_eq!(tokens(&mut state, "x"), vec![(Category::Identifier, "x")]);
}

#[test]
fn trailing_backslash_continues_string() {
    let mut state = ScanState::new(4);
    tokens(&mut state, r#"s = "abc\"#);
    assert_eq!(
        state.sub_scanner(),
        Some(SubScanner::String {
            quote: Quote::Double
        })
    );
    assert_eq!(
        tokens(&mut state, "   rest\""),
        vec![(Category::Whitespace, "   "), (Category::String, "rest\"")]
    );
    assert!(state.is_default_mode());
}

#[test]
fn backtick_string_spans_lines() {
    let mut state = ScanState::new(4);
    assert_eq!(tokens(&mut state, "`abc"), vec![(Category::String, "`abc")]);
    assert_eq!(
        state.sub_scanner(),
        Some(SubScanner::String {
            quote: Quote::Backtick
        })
    );
    assert_eq!(
        tokens(&mut state, "def` x"),
        vec![
            (Category::String, "def`"),
            (Category::Whitespace, " "),
            (Category::Identifier, "x"),
        ]
    );
    assert!(state.is_default_mode());
}

#[test]
fn backslash_does_not_escape_in_backticks() {
    let mut state = ScanState::new(4);
    assert_eq!(tokens(&mut state, r"`a\`"), vec![(Category::String, r"`a\`")]);
    assert!(state.is_default_mode());
}

// === Block Comments ===

#[test]
fn block_comment_ignores_other_quote_kind() {
    let mut state = ScanState::new(4);
    assert_eq!(
        tokens(&mut state, r#"'''a"""b'''"#),
        vec![(Category::Comment, r#"'''a"""b'''"#)]
    );
    assert!(state.is_default_mode());
}

#[test]
fn empty_block_comment_closes() {
    let mut state = ScanState::new(4);
    assert_eq!(
        tokens(&mut state, "\"\"\"\"\"\""),
        vec![(Category::Comment, "\"\"\"\"\"\"")]
    );
    assert!(state.is_default_mode());
}

#[test]
fn two_quotes_close_the_comment() {
    let mut state = ScanState::new(4);
    assert_eq!(
        tokens(&mut state, "\"\"\"a \"\" b"),
        vec![
            (Category::Comment, "\"\"\"a \"\""),
            (Category::Whitespace, " "),
            (Category::Identifier, "b"),
        ]
    );
    assert!(state.is_default_mode());
    assert_eq!(
        tokens(&mut state, "x = 1"),
        vec![
            (Category::Identifier, "x"),
            (Category::Whitespace, " "),
            (Category::Operator, "="),
            (Category::Whitespace, " "),
            (Category::Number, "1"),
        ]
    );
}

#[test]
fn two_single_quotes_close_a_single_quoted_comment() {
    let mut state = ScanState::new(4);
    assert_eq!(
        tokens(&mut state, "'''a '' b"),
        vec![
            (Category::Comment, "'''a ''"),
            (Category::Whitespace, " "),
            (Category::Identifier, "b"),
        ]
    );
    assert!(state.is_default_mode());
}

#[test]
fn quote_pair_split_across_lines_does_not_close() {
    let mut state = ScanState::new(4);
    tokens(&mut state, "\"\"\"a \"");
    assert!(!state.is_default_mode());
    assert_eq!(tokens(&mut state, "\" b"), vec![(Category::Comment, "\" b")]);
    assert!(!state.is_default_mode());
}

#[test]
fn natspec_tags_in_doc_comment() {
    let mut state = ScanState::new(4);
    assert_eq!(tokens(&mut state, "\"\"\""), vec![(Category::Comment, "\"\"\"")]);
    assert_eq!(state.grammar(), Grammar::Code);

    assert_eq!(
        tokens(&mut state, "@notice Transfer tokens"),
        vec![
            (Category::DocTag, "@notice"),
            (Category::Whitespace, " "),
            (Category::Comment, "Transfer tokens"),
        ]
    );
    assert_eq!(state.grammar(), Grammar::Doc);

    assert_eq!(
        tokens(&mut state, "    @custom thing"),
        vec![
            (Category::Whitespace, "    "),
            (Category::DocText, "@custom"),
            (Category::Whitespace, " "),
            (Category::Comment, "thing"),
        ]
    );

    assert_eq!(tokens(&mut state, "\"\"\""), vec![(Category::Comment, "\"\"\"")]);
    assert!(state.is_default_mode());
    assert_eq!(state.grammar(), Grammar::Code);
}

#[test]
fn tag_right_after_opening_quotes() {
    let mut state = ScanState::new(4);
    assert_eq!(
        tokens(&mut state, "\"\"\"@dev note\"\"\""),
        vec![
            (Category::Comment, "\"\"\""),
            (Category::DocTag, "@dev"),
            (Category::Whitespace, " "),
            (Category::Comment, "note\"\"\""),
        ]
    );
    assert_eq!(state.grammar(), Grammar::Code);
}

#[test]
fn tag_in_the_middle_of_text_splits_the_comment() {
    let mut state = ScanState::new(4);
    assert_eq!(
        tokens(&mut state, "'''see @param x'''"),
        vec![
            (Category::Comment, "'''see "),
            (Category::DocTag, "@param"),
            (Category::Whitespace, " "),
            (Category::Comment, "x'''"),
        ]
    );
}

#[test]
fn at_sign_inside_a_word_is_plain_text() {
    let mut state = ScanState::new(4);
    assert_eq!(
        tokens(&mut state, "\"\"\"mail a@b.c\"\"\""),
        vec![(Category::Comment, "\"\"\"mail a@b.c\"\"\"")]
    );
    assert_eq!(state.grammar(), Grammar::Code);
}
