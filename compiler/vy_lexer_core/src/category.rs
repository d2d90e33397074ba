//! Token categories and punctuation signals.
//!
//! A [`Category`] is the semantic class a host uses to pick a display
//! style. Punctuation and whitespace are *transparent*: they carry no
//! style of their own ([`Category::style`] returns `None`).
//!
//! Punctuation additionally produces a [`Punct`] signal, returned
//! explicitly from each scan so the driver can update the bracket stack
//! and the signature tracker without any shared side channel.

/// Semantic class of a scanned lexeme.
///
/// Discriminants are stable so hosts can index style tables by
/// `category as usize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Category {
    /// Reserved word (`def`, `return`, `struct`, decorator modifiers).
    Keyword = 0,
    /// Control-structure word not already covered by [`Category::Keyword`].
    ControlKeyword = 1,
    /// Named constant (`ZERO_ADDRESS`, `MAX_UINT256`).
    Constant = 2,
    /// Built-in function (`keccak256`, `raw_call`).
    Builtin = 3,
    /// Value-type name (`uint256`, `address`, `HashMap`).
    TypeKeyword = 4,
    /// Block or transaction property (`block.timestamp`, `msg.sender`).
    BlockOrTxProperty = 5,
    /// Literal atom.
    Atom = 6,
    /// Known NatSpec tag inside a documentation comment (`@notice`).
    DocTag = 7,
    /// Unknown `@word` inside a documentation comment.
    DocText = 8,
    /// `#pragma` line.
    MetaPragma = 9,
    /// Line or block comment text.
    Comment = 10,
    /// Numeric literal.
    Number = 11,
    /// String literal (any quoting).
    String = 12,
    /// Run of operator characters.
    Operator = 13,
    /// Anything word-like that matched no table.
    Identifier = 14,
    /// Bracket, separator, or `.`; transparent.
    Punctuation = 15,
    /// Whitespace run; transparent.
    Whitespace = 16,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 17;

    /// Every category, in discriminant order.
    pub const ALL: [Category; Self::COUNT] = [
        Category::Keyword,
        Category::ControlKeyword,
        Category::Constant,
        Category::Builtin,
        Category::TypeKeyword,
        Category::BlockOrTxProperty,
        Category::Atom,
        Category::DocTag,
        Category::DocText,
        Category::MetaPragma,
        Category::Comment,
        Category::Number,
        Category::String,
        Category::Operator,
        Category::Identifier,
        Category::Punctuation,
        Category::Whitespace,
    ];

    /// Style name a host maps to a color, or `None` for transparent
    /// categories.
    pub const fn style(self) -> Option<&'static str> {
        match self {
            Category::Keyword => Some("keyword"),
            Category::ControlKeyword => Some("controlKeyword"),
            Category::Constant => Some("constant"),
            Category::Builtin => Some("function"),
            Category::TypeKeyword => Some("typeName"),
            Category::BlockOrTxProperty => Some("special"),
            Category::Atom => Some("atom"),
            Category::DocTag => Some("docTag"),
            Category::DocText => Some("docText"),
            Category::MetaPragma => Some("meta"),
            Category::Comment => Some("comment"),
            Category::Number => Some("number"),
            Category::String => Some("string"),
            Category::Operator => Some("operator"),
            Category::Identifier => Some("variable"),
            Category::Punctuation | Category::Whitespace => None,
        }
    }

    /// Human-readable name, used by the CLI.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Keyword => "Keyword",
            Category::ControlKeyword => "ControlKeyword",
            Category::Constant => "Constant",
            Category::Builtin => "Builtin",
            Category::TypeKeyword => "TypeKeyword",
            Category::BlockOrTxProperty => "BlockOrTxProperty",
            Category::Atom => "Atom",
            Category::DocTag => "DocTag",
            Category::DocText => "DocText",
            Category::MetaPragma => "MetaPragma",
            Category::Comment => "Comment",
            Category::Number => "Number",
            Category::String => "String",
            Category::Operator => "Operator",
            Category::Identifier => "Identifier",
            Category::Punctuation => "Punctuation",
            Category::Whitespace => "Whitespace",
        }
    }

    /// Returns `true` for categories without a display style.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.style().is_none()
    }

    /// Comment-like tokens do not resolve bracket alignment.
    #[inline]
    pub const fn is_comment_like(self) -> bool {
        matches!(
            self,
            Category::Comment | Category::DocTag | Category::DocText
        )
    }
}

/// How a punctuation character was interpreted by the signature tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PunctRole {
    /// Ordinary grouping or separator.
    Grouping,
    /// `(` opening a function parameter list.
    ParameterOpen,
    /// `,` between parameters.
    ParameterSeparator,
    /// `)` closing a function parameter list.
    ParameterClose,
    /// `(` opening a tuple return clause.
    ReturnOpen,
    /// `,` between return types.
    ReturnSeparator,
    /// `)` closing a tuple return clause.
    ReturnClose,
    /// `(` directly after a type name, as in `address(0)`.
    ConversionOpen,
}

/// Punctuation signal produced by a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Punct {
    pub ch: char,
    pub role: PunctRole,
}

/// Result of one classifier or sub-scanner call.
///
/// `punct` is `Some` exactly when `category` is [`Category::Punctuation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOutcome {
    pub category: Category,
    pub punct: Option<char>,
}

impl ScanOutcome {
    /// Outcome for a non-punctuation token.
    #[inline]
    pub const fn of(category: Category) -> Self {
        Self {
            category,
            punct: None,
        }
    }

    /// Outcome for a punctuation character.
    #[inline]
    pub const fn punctuation(ch: char) -> Self {
        Self {
            category: Category::Punctuation,
            punct: Some(ch),
        }
    }
}

#[cfg(test)]
mod tests;
