//! Scan error types.
//!
//! [`ScanError`] never aborts a scan. The scanner recovers locally and
//! attaches the error to the token covering the offending text, so a
//! highlighter can render it distinctly and keep going.

use thiserror::Error;

/// Lexical problem recorded on a recovered token.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum ScanError {
    /// No rule matches the character. The scanner skips exactly that one
    /// character as an `ERROR` token.
    #[error("unrecognized character")]
    UnrecognizedCharacter,
    /// Backslash followed by something other than a valid escape.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// Character literal that is empty or holds more than one character.
    #[error("character literal must contain exactly one character")]
    MalformedCharLiteral,
    /// String or character literal not closed before a line break or EOF.
    #[error("unterminated literal")]
    UnterminatedLiteral,
    /// `/* ...` with no closing `*/` before EOF.
    #[error("unterminated comment")]
    UnterminatedComment,
}

/// Misuse of the character stream. Internal: the scanner never lets it
/// escape.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum StreamError {
    /// `consume()` called with no characters left.
    #[error("character stream exhausted")]
    ExhaustedInput,
}
