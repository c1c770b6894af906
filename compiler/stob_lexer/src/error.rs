//! Errors returned by the scanner API.
//!
//! Scanning itself never fails; malformed input produces flagged tokens
//! (see [`ScanError`](stob_lexer_core::ScanError)). The only fallible
//! operation is restarting at a caller-supplied offset.

use thiserror::Error;

/// Invalid restart offset passed to [`Scanner::resume_at`](crate::Scanner::resume_at).
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum ResumeError {
    #[error("offset {offset} is past the end of the source ({len} bytes)")]
    OffsetOutOfBounds { offset: u32, len: u32 },
    #[error("offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: u32 },
}
