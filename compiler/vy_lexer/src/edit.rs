//! Edits fed to [`Document::apply_edit`](crate::Document::apply_edit).

use crate::Span;

/// One change to a document's text: the bytes under `span` become
/// `new_text`. Offsets refer to the text before the change.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TextEdit {
    pub span: Span,
    pub new_text: String,
}

impl TextEdit {
    pub fn replace(span: Span, new_text: impl Into<String>) -> Self {
        TextEdit {
            span,
            new_text: new_text.into(),
        }
    }

    /// Typing: an empty span at `at`.
    pub fn insert(at: u32, text: impl Into<String>) -> Self {
        Self::replace(Span::new(at, at), text)
    }

    pub fn delete(span: Span) -> Self {
        Self::replace(span, String::new())
    }

    /// Bytes added minus bytes removed; recorded on the edit's trace span.
    pub fn length_delta(&self) -> i64 {
        // Computed before the span is validated, so it may be reversed.
        let removed = i64::from(self.span.end) - i64::from(self.span.start);
        let added = i64::try_from(self.new_text.len()).unwrap_or(i64::MAX);
        added - removed
    }
}
