//! Incremental document lexer.
//!
//! A [`Document`] owns its text and caches, for every line, the scan state
//! at the start of the line plus the line's tokens. After an edit, only
//! the touched lines are re-scanned, followed by as many subsequent lines
//! as needed until a re-scanned line ends in exactly the state already
//! cached for the next line. From there on the old tokens are still valid.
//!
//! # Invariant
//!
//! After any sequence of edits, [`Document::tokens`] and
//! [`Document::final_state`] equal what [`lex`](crate::lex) produces for
//! [`Document::text`] from scratch.

use tracing::trace;
use vy_lexer_core::{compute_indent, ScanState};

use crate::lines::{check_size, scan_line, split_lines, LineRange, LineTokens};
use crate::{LexError, LexedToken, LexerConfig, TextEdit};

#[derive(Clone, Debug)]
struct LineEntry {
    range: LineRange,
    start_state: ScanState,
    tokens: LineTokens,
}

/// Source text with a per-line scan cache.
#[derive(Clone, Debug)]
pub struct Document {
    text: String,
    config: LexerConfig,
    /// Never empty: even an empty document has one line.
    lines: Vec<LineEntry>,
    final_state: ScanState,
}

impl Document {
    /// Lex `text` and build the line cache.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new(text: impl Into<String>, config: LexerConfig) -> Result<Self, LexError> {
        let text = text.into();
        config.validate()?;
        check_size(text.len())?;

        let mut state = ScanState::new(config.indent_unit);
        let lines = split_lines(&text, 0, true)
            .into_iter()
            .map(|range| {
                let start_state = state.clone();
                let tokens = scan_line(&mut state, range.text(&text), config.tab_size);
                LineEntry {
                    range,
                    start_state,
                    tokens,
                }
            })
            .collect::<Vec<_>>();

        trace!(lines = lines.len(), "document cache built");
        Ok(Document {
            text,
            config,
            lines,
            final_state: state,
        })
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn config(&self) -> LexerConfig {
        self.config
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of `line` (zero-based), terminator excluded.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(|entry| entry.range.text(&self.text))
    }

    /// Scan state at the end of the document.
    #[inline]
    pub fn final_state(&self) -> &ScanState {
        &self.final_state
    }

    /// Scan state at the start of `line`.
    pub fn state_at_line(&self, line: usize) -> Option<&ScanState> {
        self.lines.get(line).map(|entry| &entry.start_state)
    }

    /// All tokens with absolute spans, terminators included.
    pub fn tokens(&self) -> Vec<LexedToken> {
        let mut out = Vec::with_capacity(self.lines.iter().map(|l| l.tokens.len() + 1).sum());
        for entry in &self.lines {
            out.extend(entry.tokens.iter().map(|t| t.absolute(entry.range.start)));
            out.extend(entry.range.terminator_token());
        }
        out
    }

    /// Tokens of `line`, terminator excluded.
    pub fn line_tokens(&self, line: usize) -> Option<impl Iterator<Item = LexedToken> + '_> {
        let entry = self.lines.get(line)?;
        Some(entry.tokens.iter().map(|t| t.absolute(entry.range.start)))
    }

    /// Suggested indentation for `line`, judged from the state the previous
    /// line left behind and the line's own first character.
    ///
    /// `None` if `line` is out of range or sits inside a string or block
    /// comment.
    pub fn indent_for_line(&self, line: usize) -> Option<u32> {
        let entry = self.lines.get(line)?;
        compute_indent(
            &entry.start_state,
            entry.range.text(&self.text),
            self.config.indent_unit,
        )
    }

    /// Apply `edit` and re-scan what it invalidated.
    ///
    /// Returns the number of lines that were re-scanned.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(span = %edit.span, delta = edit.length_delta())
    )]
    pub fn apply_edit(&mut self, edit: &TextEdit) -> Result<usize, LexError> {
        let start = edit.span.start as usize;
        let end = edit.span.end as usize;
        if start > end || end > self.text.len() {
            return Err(LexError::EditOutOfBounds {
                start: edit.span.start,
                end: edit.span.end,
                len: self.text.len(),
            });
        }
        for offset in [edit.span.start, edit.span.end] {
            if !self.text.is_char_boundary(offset as usize) {
                return Err(LexError::NotCharBoundary { offset });
            }
        }
        let removed = end - start;
        let inserted = edit.new_text.len();
        check_size(self.text.len() - removed + inserted)?;

        let first = self.line_at(start);
        let last = self.line_at(end);
        let region_start = self.lines[first].range.start;
        let region_end = self.lines[last].range.end() - removed + inserted;
        let tail = last + 1 == self.lines.len();

        self.text.replace_range(start..end, &edit.new_text);

        // Lines before `first` are untouched, so its cached start state holds.
        let mut state = self.lines[first].start_state.clone();
        let tab_size = self.config.tab_size;
        let rescanned: Vec<LineEntry> =
            split_lines(&self.text[region_start..region_end], region_start, tail)
                .into_iter()
                .map(|range| {
                    let start_state = state.clone();
                    let tokens = scan_line(&mut state, range.text(&self.text), tab_size);
                    LineEntry {
                        range,
                        start_state,
                        tokens,
                    }
                })
                .collect();

        let mut relexed = rescanned.len();
        let mut next = first + rescanned.len();
        self.lines.splice(first..=last, rescanned).for_each(drop);
        for entry in &mut self.lines[next..] {
            entry.range.start = entry.range.start - removed + inserted;
        }

        while let Some(entry) = self.lines.get_mut(next) {
            if entry.start_state == state {
                trace!(line = next, relexed, "scan state converged");
                return Ok(relexed);
            }
            entry.start_state = state.clone();
            entry.tokens = scan_line(&mut state, entry.range.text(&self.text), tab_size);
            relexed += 1;
            next += 1;
        }

        self.final_state = state;
        trace!(relexed, "re-scanned to end of document");
        Ok(relexed)
    }

    /// Index of the last line starting at or before `offset`.
    fn line_at(&self, offset: usize) -> usize {
        self.lines
            .partition_point(|entry| entry.range.start <= offset)
            .saturating_sub(1)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
