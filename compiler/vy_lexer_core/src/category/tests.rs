use super::*;

#[test]
fn discriminants_match_all_order() {
    for (i, category) in Category::ALL.iter().enumerate() {
        assert_eq!(*category as usize, i, "{category:?} out of order");
    }
}

#[test]
fn category_is_one_byte() {
    assert_eq!(std::mem::size_of::<Category>(), 1);
}

#[test]
fn only_punctuation_and_whitespace_are_transparent() {
    let transparent: Vec<_> = Category::ALL
        .iter()
        .copied()
        .filter(|c| c.is_transparent())
        .collect();
    assert_eq!(
        transparent,
        vec![Category::Punctuation, Category::Whitespace]
    );
}

#[test]
fn styles_are_distinct() {
    let mut styles: Vec<_> = Category::ALL.iter().filter_map(|c| c.style()).collect();
    let before = styles.len();
    styles.sort_unstable();
    styles.dedup();
    assert_eq!(styles.len(), before);
}

#[test]
fn comment_like_categories() {
    assert!(Category::Comment.is_comment_like());
    assert!(Category::DocTag.is_comment_like());
    assert!(Category::DocText.is_comment_like());
    assert!(!Category::String.is_comment_like());
    assert!(!Category::MetaPragma.is_comment_like());
}

#[test]
fn outcome_constructors() {
    assert_eq!(ScanOutcome::of(Category::Number).punct, None);
    let punct = ScanOutcome::punctuation('(');
    assert_eq!(punct.category, Category::Punctuation);
    assert_eq!(punct.punct, Some('('));
}
