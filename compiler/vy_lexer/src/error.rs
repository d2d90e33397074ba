use thiserror::Error;

use crate::config::ConfigError;

/// Errors from document-level lexing and editing.
///
/// Scanning itself never fails; these cover the inputs around it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
    #[error("source of {len} bytes exceeds the 4 GiB limit")]
    SourceTooLarge { len: usize },
    #[error("edit range {start}..{end} is outside the document (length {len})")]
    EditOutOfBounds { start: u32, end: u32, len: usize },
    #[error("edit offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: u32 },
}
