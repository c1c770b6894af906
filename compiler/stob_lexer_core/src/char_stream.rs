//! Character stream adapter beneath the scanner.
//!
//! Wraps borrowed source text and tracks the cursor as a [`Position`]
//! (byte offset, line, column). The scanner pulls characters one at a time
//! with [`peek`](CharStream::peek) / [`consume`](CharStream::consume) and
//! rewinds its lookahead with [`backup`](CharStream::backup) when a longer
//! match fails.
//!
//! # Token boundaries
//!
//! [`mark_token_boundary`](CharStream::mark_token_boundary) fixes the start
//! of the next token and resets the consumed counter. `backup(n)` may only
//! rewind characters consumed since the last boundary; rewinding further is
//! a programming error and panics.
//!
//! No per-character history is kept. A backup replays the token from its
//! start, so memory stays constant however long a token grows (a comment
//! spanning a whole file costs nothing extra). The scanner only backs up out
//! of short numeric and operator prefixes, so the replay is cheap.
//!
//! # Line breaks
//!
//! `\n`, `\r` and `\r\n` each count as exactly one line break. Lines and
//! columns are 1-based; a tab advances the column to the next tab stop.

use crate::error::StreamError;
use crate::span::Span;

/// Tab stop width used when none is configured.
pub const DEFAULT_TAB_WIDTH: u32 = 8;

/// A cursor location in the source.
///
/// `offset` is a byte offset and always lies on a `char` boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: u32,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column, counted in characters with tabs expanded.
    pub column: u32,
    /// The previous character was `\r`, so a following `\n` completes the
    /// same line break instead of starting a new one.
    pub(crate) after_cr: bool,
}

impl Position {
    /// Beginning of the source.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
        after_cr: false,
    };

    /// Position after stepping over `c`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8() is at most 4"
    )]
    pub(crate) fn advanced(self, c: char, tab_width: u32) -> Position {
        let offset = self.offset + c.len_utf8() as u32;
        match c {
            '\r' => Position {
                offset,
                line: self.line + 1,
                column: 1,
                after_cr: true,
            },
            '\n' if self.after_cr => Position {
                offset,
                after_cr: false,
                ..self
            },
            '\n' => Position {
                offset,
                line: self.line + 1,
                column: 1,
                after_cr: false,
            },
            '\t' => {
                let width = tab_width.max(1);
                Position {
                    offset,
                    line: self.line,
                    column: ((self.column - 1) / width + 1) * width + 1,
                    after_cr: false,
                }
            }
            _ => Position {
                offset,
                line: self.line,
                column: self.column + 1,
                after_cr: false,
            },
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

/// Cursor over borrowed source text with position tracking and bounded
/// rewind.
#[derive(Clone, Debug)]
pub struct CharStream<'a> {
    /// Source text, capped at `u32::MAX` bytes.
    text: &'a str,
    pos: Position,
    /// Where the current token started (last boundary).
    token_start: Position,
    /// Characters consumed since `token_start`.
    consumed: u32,
    tab_width: u32,
}

impl<'a> CharStream<'a> {
    /// Create a stream positioned at the start of `text`.
    ///
    /// Sources larger than `u32::MAX` bytes (~4 GiB) are accepted but only
    /// the first `u32::MAX` bytes (rounded down to a `char` boundary) are
    /// visible to the scanner.
    pub fn new(text: &'a str) -> Self {
        Self::at(text, Position::START)
    }

    /// Create a stream positioned at `start`.
    ///
    /// # Contract
    ///
    /// `start` must describe a location in `text` (for example one obtained
    /// from a previous scan of the same text, or from
    /// [`LineIndex::position`](crate::LineIndex::position)).
    pub fn at(text: &'a str, start: Position) -> Self {
        let text = cap_len(text);
        debug_assert!(
            text.is_char_boundary(start.offset as usize),
            "start offset {} is not a char boundary",
            start.offset
        );
        Self {
            text,
            pos: start,
            token_start: start,
            consumed: 0,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    /// Set the tab stop width used for column tracking. Zero acts as one.
    #[must_use]
    pub fn with_tab_width(mut self, tab_width: u32) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }

    /// The character under the cursor, or `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.text
            .get(self.pos.offset as usize..)
            .and_then(|rest| rest.chars().next())
    }

    /// Return the character under the cursor and advance past it.
    #[inline]
    pub fn consume(&mut self) -> Result<char, StreamError> {
        let c = self.peek().ok_or(StreamError::ExhaustedInput)?;
        self.pos = self.pos.advanced(c, self.tab_width);
        self.consumed += 1;
        Ok(c)
    }

    /// Rewind the cursor by `n` characters.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`consumed_len`](Self::consumed_len): the
    /// stream cannot rewind past the last token boundary.
    pub fn backup(&mut self, n: u32) {
        assert!(
            n <= self.consumed,
            "backup({n}) exceeds the {} characters consumed since the token boundary",
            self.consumed
        );
        if n == 0 {
            return;
        }
        let keep = self.consumed - n;
        let mut pos = self.token_start;
        let rest = self.text.get(pos.offset as usize..).unwrap_or_default();
        for c in rest.chars().take(keep as usize) {
            pos = pos.advanced(c, self.tab_width);
        }
        self.pos = pos;
        self.consumed = keep;
    }

    /// Characters consumed since the last token boundary.
    #[inline]
    pub fn consumed_len(&self) -> u32 {
        self.consumed
    }

    /// Start a new token at the current position.
    #[inline]
    pub fn mark_token_boundary(&mut self) {
        self.token_start = self.pos;
        self.consumed = 0;
    }

    /// Current cursor position.
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Position of the last token boundary.
    #[inline]
    pub fn token_start(&self) -> Position {
        self.token_start
    }

    /// Byte span from the last token boundary to the cursor.
    #[inline]
    pub fn token_span(&self) -> Span {
        Span::new(self.token_start.offset, self.pos.offset)
    }

    /// Text from the last token boundary to the cursor.
    pub fn token_text(&self) -> &'a str {
        self.text
            .get(self.token_span().to_range())
            .unwrap_or_default()
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos.offset as usize >= self.text.len()
    }

    /// The (possibly capped) source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.text
    }

    /// Length of the visible source in bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "text is capped at u32::MAX bytes on construction"
    )]
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.text.len() as u32
    }

    #[inline]
    pub fn tab_width(&self) -> u32 {
        self.tab_width
    }
}

/// Truncate `text` to at most `u32::MAX` bytes on a `char` boundary.
fn cap_len(text: &str) -> &str {
    let max = u32::MAX as usize;
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
