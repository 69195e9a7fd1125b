//! Typed errors for catalogue loading and lookup.

use thiserror::Error;

/// Structural problems in a catalogue source document.
///
/// Loading is atomic: any of these means no catalogue is produced.
/// Line numbers are 1-based positions in the source text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: entry heading has no title")]
    EmptyTitle { line: usize },

    #[error("line {line}: duplicate entry title {title:?}")]
    DuplicateTitle { title: String, line: usize },

    #[error("entry {title:?} (line {line}) has no explanation")]
    MissingExplanation { title: String, line: usize },

    #[error("line {line}: code fence is never closed")]
    UnterminatedFence { line: usize },
}

/// Exact-title lookup failed. Recoverable by callers.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no entry titled {title:?}")]
pub struct NotFoundError {
    pub title: String,
}
