//! Bracket/indent context stack.
//!
//! One [`Context`] per unmatched `(`, `[`, or `{`, recording where the
//! opener was and how the line containing it was indented. The bottom
//! entry is a `Top` sentinel that can never be popped, so the stack is
//! never empty.
//!
//! Closers are matched leniently: a closer that does not belong to the
//! top context leaves the stack untouched.

use tracing::trace;

/// Expected closing character of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Closer {
    /// Root sentinel; matches nothing.
    Top,
    Paren,
    Bracket,
    Brace,
}

impl Closer {
    /// Closer expected after the opening character `open`.
    pub fn for_opener(open: char) -> Option<Closer> {
        match open {
            '(' => Some(Closer::Paren),
            '[' => Some(Closer::Bracket),
            '{' => Some(Closer::Brace),
            _ => None,
        }
    }

    /// The closing character, or `None` for the root.
    pub const fn char(self) -> Option<char> {
        match self {
            Closer::Top => None,
            Closer::Paren => Some(')'),
            Closer::Bracket => Some(']'),
            Closer::Brace => Some('}'),
        }
    }
}

/// Whether continuation lines line up under the first token after the opener.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// No line boundary or content seen yet.
    #[default]
    Unknown,
    /// The opener ended its line; continuation lines use a flat indent.
    Unaligned,
    /// Content followed the opener on the same line.
    Aligned,
}

/// One open bracket scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Context {
    /// Indentation of the line the opener appeared on.
    pub indented: i32,
    /// Column of the opening character.
    pub column: u32,
    pub closer: Closer,
    pub align: Alignment,
}

/// Non-empty stack of contexts, root first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContextStack {
    entries: Vec<Context>,
}

impl ContextStack {
    /// Fresh stack holding only the root.
    ///
    /// The root is indented one unit to the left of column zero so that
    /// top-level continuation lines compute an indent of zero.
    pub fn new(indent_unit: u32) -> Self {
        let root = Context {
            indented: -i32::try_from(indent_unit).unwrap_or(i32::MAX),
            column: 0,
            closer: Closer::Top,
            align: Alignment::Unaligned,
        };
        Self {
            entries: vec![root],
        }
    }

    /// Innermost context.
    #[inline]
    pub fn top(&self) -> &Context {
        // The root is never removed, so `entries` is never empty.
        &self.entries[self.entries.len() - 1]
    }

    #[inline]
    pub(crate) fn top_mut(&mut self) -> &mut Context {
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    /// Number of open brackets (the root is not counted).
    #[inline]
    pub fn depth(&self) -> usize {
        self.entries.len() - 1
    }

    /// `true` when only the root remains.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.entries.len() == 1
    }

    /// Iterate contexts from the root outward.
    pub fn iter(&self) -> impl Iterator<Item = &Context> {
        self.entries.iter()
    }

    /// Open a new context for `closer` at `column` on a line indented `indented`.
    pub fn push(&mut self, indented: i32, column: u32, closer: Closer) {
        trace!(?closer, column, indented, depth = self.depth() + 1, "push context");
        self.entries.push(Context {
            indented,
            column,
            closer,
            align: Alignment::Unknown,
        });
    }

    /// Pop the top context if `ch` is its closer.
    ///
    /// Returns the popped context. Popping the root, or a closer that does
    /// not match, is a no-op.
    pub fn pop_matching(&mut self, ch: char) -> Option<Context> {
        if self.is_root() || self.top().closer.char() != Some(ch) {
            return None;
        }
        let popped = self.entries.pop();
        trace!(closer = ?ch, depth = self.depth(), "pop context");
        popped
    }
}
