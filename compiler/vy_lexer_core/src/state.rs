//! Per-document scanner state.
//!
//! A [`ScanState`] is everything that carries over from one token (and
//! one line) to the next. It is self-contained, cheap to clone, and
//! comparable, so a host can snapshot it at every line start and resume
//! scanning from any snapshot after an edit.

use crate::context::ContextStack;
use crate::signature::SignatureTracker;
use crate::sub_scanner::SubScanner;

/// Word classification mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// Ordinary code: words go through the keyword tables.
    #[default]
    Code,
    /// Inside a documentation comment that has produced a NatSpec tag:
    /// `@words` go through the tag table.
    Doc,
}

/// State persisted across [`scan_one`](crate::scan_one) calls.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScanState {
    pub(crate) sub_scanner: Option<SubScanner>,
    pub(crate) contexts: ContextStack,
    pub(crate) indented: i32,
    pub(crate) start_of_line: bool,
    pub(crate) grammar: Grammar,
    pub(crate) signature: SignatureTracker,
}

impl ScanState {
    /// Fresh state for a new document.
    ///
    /// `indent_unit` is the width of one indentation step; it positions the
    /// root context so that top-level lines indent to column zero.
    pub fn new(indent_unit: u32) -> Self {
        Self {
            sub_scanner: None,
            contexts: ContextStack::new(indent_unit),
            indented: 0,
            start_of_line: true,
            grammar: Grammar::Code,
            signature: SignatureTracker::default(),
        }
    }

    /// Active string/comment continuation, if any.
    #[inline]
    pub fn sub_scanner(&self) -> Option<SubScanner> {
        self.sub_scanner
    }

    /// `true` when no string or comment is carried over.
    #[inline]
    pub fn is_default_mode(&self) -> bool {
        self.sub_scanner.is_none()
    }

    /// The bracket context stack.
    #[inline]
    pub fn contexts(&self) -> &ContextStack {
        &self.contexts
    }

    /// Indentation baseline: the current line's indentation, or the
    /// indentation restored by the most recent closing bracket.
    #[inline]
    pub fn indented(&self) -> i32 {
        self.indented
    }

    /// `true` from a line start until the line's first token that is
    /// neither whitespace nor a comment.
    #[inline]
    pub fn at_line_start(&self) -> bool {
        self.start_of_line
    }

    #[inline]
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// Function signature tracker.
    #[inline]
    pub fn signature(&self) -> &SignatureTracker {
        &self.signature
    }
}
