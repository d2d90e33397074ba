//! Editor-facing language metadata.

/// How an editor should compute fold ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoldStrategy {
    /// Fold between matching brackets.
    Brace,
}

/// Static description of the language for editor integrations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageInfo {
    pub name: &'static str,
    /// File extensions, without the leading dot.
    pub extensions: &'static [&'static str],
    pub line_comment: &'static str,
    /// Auto-closed `(open, close)` pairs.
    pub close_brackets: &'static [(char, char)],
    pub fold: FoldStrategy,
}

impl LanguageInfo {
    /// `true` if `path` ends in one of the language's extensions.
    pub fn matches_path(&self, path: &str) -> bool {
        path.rsplit_once('.')
            .is_some_and(|(_, ext)| self.extensions.contains(&ext))
    }

    /// Closing character auto-inserted after `open`, if any.
    pub fn closer_for(&self, open: char) -> Option<char> {
        self.close_brackets
            .iter()
            .find(|&&(o, _)| o == open)
            .map(|&(_, close)| close)
    }
}

pub const LANGUAGE: LanguageInfo = LanguageInfo {
    name: "vyper",
    extensions: &["vy", "vyi"],
    line_comment: "#",
    close_brackets: &[
        ('(', ')'),
        ('[', ']'),
        ('{', '}'),
        ('\'', '\''),
        ('"', '"'),
        ('`', '`'),
    ],
    fold: FoldStrategy::Brace,
};
