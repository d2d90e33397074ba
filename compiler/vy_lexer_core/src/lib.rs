//! Incremental line-at-a-time scanner for Vyper.
//!
//! This crate is the scanning engine. It has no dependencies on the
//! document layer (`vy_lexer`) and can be embedded directly by editors and
//! highlighters.
//!
//! # Architecture
//!
//! A host keeps one [`ScanState`] per document and feeds it lines:
//!
//! ```text
//! line ──> LineCursor ──> scan_one ──> Token
//!                            │
//!             ┌──────────────┼───────────────┐
//!             ▼              ▼               ▼
//!        classifier     sub-scanners   context stack / signature tracker
//! ```
//!
//! Each [`scan_one`] call produces exactly one token. Strings and block
//! comments that run past a line end stay active in the state, so the
//! next line resumes inside them. [`compute_indent`] reads the state
//! reached at the end of a line to suggest the next line's indentation.
//!
//! # Totality
//!
//! The scanner never fails. Every character sequence receives some
//! [`Category`]; unbalanced brackets are ignored; unterminated literals
//! simply carry over.
//!
//! # Example
//!
//! ```
//! use vy_lexer_core::{tokenize_line, Category, ScanState};
//!
//! let mut state = ScanState::new(4);
//! let categories: Vec<Category> = tokenize_line(&mut state, "x: uint256 = 0x1f", 4)
//!     .filter(|t| t.category != Category::Whitespace)
//!     .map(|t| t.category)
//!     .collect();
//! assert_eq!(
//!     categories,
//!     [
//!         Category::Identifier,
//!         Category::Punctuation,
//!         Category::TypeKeyword,
//!         Category::Operator,
//!         Category::Number,
//!     ]
//! );
//! ```

mod category;
mod classifier;
mod context;
mod cursor;
mod indent;
mod language;
mod scanner;
mod signature;
mod state;
mod sub_scanner;
pub mod symbols;

pub use category::{Category, Punct, PunctRole, ScanOutcome};
pub use context::{Alignment, Closer, Context, ContextStack};
pub use cursor::{count_column, LineCursor};
pub use indent::compute_indent;
pub use language::{FoldStrategy, LanguageInfo, LANGUAGE};
pub use scanner::{scan_one, tokenize_line, LineTokens, Token};
pub use signature::{Signature, SignatureTracker, TokenHint};
pub use state::{Grammar, ScanState};
pub use sub_scanner::{Quote, SubScanner};
