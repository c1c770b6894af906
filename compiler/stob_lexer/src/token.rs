//! Tokens as seen by editor integrations.

use stob_lexer_core::{Category, Position, RawToken, ScanError, Span, TokenKind};

/// A classified span of source text.
///
/// Tokens are plain values: they hold no reference to the scanner or the
/// source, so they can be stored and compared freely.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte range in the source.
    pub span: Span,
    /// Length in characters.
    pub len: u32,
    pub start: Position,
    pub end: Position,
    /// Set when the token was produced by error recovery.
    pub error: Option<ScanError>,
}

impl Token {
    pub(crate) fn from_raw(raw: RawToken, start: Position, end: Position) -> Self {
        debug_assert_eq!(raw.span.start, start.offset);
        debug_assert_eq!(raw.span.end, end.offset);
        Token {
            kind: raw.kind,
            span: raw.span,
            len: raw.len,
            start,
            end,
            error: raw.error,
        }
    }

    /// Highlighting category. Any token carrying a scan error reports
    /// [`Category::Error`] whatever its kind.
    #[inline]
    pub fn category(&self) -> Category {
        if self.error.is_some() {
            Category::Error
        } else {
            self.kind.category()
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.category() == Category::Error
    }

    /// Whitespace or comment.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// The token's text in `source`, the text it was scanned from.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.to_range()).unwrap_or_default()
    }
}
