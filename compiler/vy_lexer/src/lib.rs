//! Document lexing for Vyper.
//!
//! Builds on the line-at-a-time engine in `vy_lexer_core`: splits a whole
//! source text into lines, attaches absolute [`Span`]s to every token, and
//! keeps a per-line state cache ([`Document`]) so edits only re-scan the
//! lines whose scan state actually changes.
//!
//! Line terminators are emitted as [`Category::Whitespace`] tokens, so
//! concatenating the text of all tokens reproduces the source exactly.

mod config;
mod document;
mod edit;
mod error;
mod lines;
mod span;

pub use config::{ConfigError, LexerConfig};
pub use document::Document;
pub use edit::TextEdit;
pub use error::LexError;
pub use span::Span;

pub use vy_lexer_core::{Category, Punct, PunctRole, ScanState};

use lines::{check_size, scan_line, split_lines};

/// A token with its absolute location in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexedToken {
    pub span: Span,
    pub category: Category,
    /// Punctuation signal, present exactly for [`Category::Punctuation`].
    pub punct: Option<Punct>,
}

impl LexedToken {
    /// Source text covered by this token.
    ///
    /// `source` must be the text the token was produced from.
    #[inline]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.range()]
    }
}

/// Result of lexing a whole document.
#[derive(Clone, Debug)]
pub struct LexOutput {
    pub tokens: Vec<LexedToken>,
    /// Scan state after the last line; non-default when a string or block
    /// comment is still open at end of input.
    pub final_state: ScanState,
    pub line_count: usize,
}

/// Lex `source` from a fresh state.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str, config: &LexerConfig) -> Result<LexOutput, LexError> {
    config.validate()?;
    check_size(source.len())?;

    let lines = split_lines(source, 0, true);
    let mut state = ScanState::new(config.indent_unit);
    let mut tokens = Vec::with_capacity(source.len() / 3);
    for line in &lines {
        let scanned = scan_line(&mut state, line.text(source), config.tab_size);
        tokens.extend(scanned.into_iter().map(|t| t.absolute(line.start)));
        tokens.extend(line.terminator_token());
    }

    tracing::debug!(tokens = tokens.len(), lines = lines.len(), "lexed");
    Ok(LexOutput {
        tokens,
        final_state: state,
        line_count: lines.len(),
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
