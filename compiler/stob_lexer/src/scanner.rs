//! The token stream editor integrations pull from.
//!
//! A [`Scanner`] wraps the core [`RawScanner`] and adds positions,
//! configuration, logging and restart support. It keeps no state between
//! tokens beyond the cursor, so any token boundary is a clean restart point:
//! unterminated comments and literals are recovered as tokens of their own
//! and never leave the scanner "inside" a construct.
//!
//! One scanner serves one source text. Scanners are cheap; create one per
//! document or view rather than sharing.

use stob_lexer_core::{CharStream, LineIndex, Position, RawScanner};
use tracing::{debug, trace};

use crate::config::ScanConfig;
use crate::error::ResumeError;
use crate::token::Token;

/// Saved cursor between two tokens.
///
/// Only meaningful for the text the scanner was reading when the checkpoint
/// was taken.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Checkpoint {
    position: Position,
    tab_width: u32,
}

impl Checkpoint {
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.position.offset
    }

    /// Tab width the checkpoint's column was computed with.
    #[inline]
    pub fn tab_width(&self) -> u32 {
        self.tab_width
    }
}

/// Token scanner over one source text.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    raw: RawScanner<'a>,
    config: ScanConfig,
}

impl<'a> Scanner<'a> {
    /// Scan `text` from the beginning with the default configuration.
    pub fn new(text: &'a str) -> Self {
        Self::with_config(text, ScanConfig::default())
    }

    pub fn with_config(text: &'a str, config: ScanConfig) -> Self {
        Self::starting_at(text, Position::START, config)
    }

    /// Restart at a checkpoint taken while scanning the same `text`.
    ///
    /// Yields exactly the tokens the earlier scan produced after the
    /// checkpoint. If `config` uses a different tab width, the column is
    /// recomputed so positions match a fresh scan with `config`.
    pub fn resume(text: &'a str, checkpoint: Checkpoint, config: ScanConfig) -> Self {
        let tab_width = config.effective_tab_width();
        let position = if checkpoint.tab_width == tab_width {
            checkpoint.position
        } else {
            LineIndex::new(text)
                .position(text, checkpoint.offset(), tab_width)
                .unwrap_or(checkpoint.position)
        };
        Self::starting_at(text, position, config)
    }

    /// Restart at an arbitrary byte offset.
    ///
    /// The offset should be a token boundary from an earlier scan. Starting
    /// elsewhere is allowed but scans from that character as if it began a
    /// token; the scanner carries no context such as "inside a comment".
    pub fn resume_at(text: &'a str, offset: u32, config: ScanConfig) -> Result<Self, ResumeError> {
        Self::resume_at_indexed(text, &LineIndex::new(text), offset, config)
    }

    /// [`resume_at`](Self::resume_at) with a prebuilt line index, for
    /// callers that restart repeatedly in the same text.
    pub fn resume_at_indexed(
        text: &'a str,
        lines: &LineIndex,
        offset: u32,
        config: ScanConfig,
    ) -> Result<Self, ResumeError> {
        let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
        if offset > len {
            return Err(ResumeError::OffsetOutOfBounds { offset, len });
        }
        let position = lines
            .position(text, offset, config.effective_tab_width())
            .ok_or(ResumeError::NotCharBoundary { offset })?;
        Ok(Self::starting_at(text, position, config))
    }

    fn starting_at(text: &'a str, start: Position, config: ScanConfig) -> Self {
        let stream = CharStream::at(text, start).with_tab_width(config.effective_tab_width());
        Self {
            raw: RawScanner::from_stream(stream),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> ScanConfig {
        self.config
    }

    /// Position of the next token.
    #[inline]
    pub fn position(&self) -> Position {
        self.raw.position()
    }

    /// Save the cursor so scanning can later resume from here.
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.raw.position(),
            tab_width: self.config.effective_tab_width(),
        }
    }

    /// Returns `true` once the whole input has been scanned.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.raw.is_eof()
    }

    /// Scan the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            let start = self.raw.position();
            let raw = self.raw.next_token()?;
            let token = Token::from_raw(raw, start, self.raw.position());

            if let Some(error) = token.error {
                debug!(
                    kind = %token.kind,
                    %error,
                    start = token.span.start,
                    end = token.span.end,
                    "recovered malformed input"
                );
            } else {
                trace!(
                    kind = %token.kind,
                    start = token.span.start,
                    end = token.span.end,
                    "token"
                );
            }

            if self.config.skips_trivia() && token.is_trivia() && token.error.is_none() {
                continue;
            }
            return Some(token);
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    #[inline]
    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

#[cfg(test)]
mod tests;
