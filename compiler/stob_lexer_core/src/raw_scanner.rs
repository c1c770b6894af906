//! Longest-match scanner producing [`RawToken`]s.
//!
//! The scanner drives the [automaton](crate::automaton) over a
//! [`CharStream`] one token at a time:
//!
//! 1. Mark a token boundary and start in `Start`.
//! 2. Peek the next character and look up the transition. If it is dead,
//!    stop without consuming the character; otherwise consume it and record
//!    the state if it accepts.
//! 3. When the automaton dies:
//!    - in a state with a recovery entry (open string, character literal or
//!      block comment), emit a flagged token covering everything consumed;
//!    - otherwise back up to the last accepting state and emit its token;
//!    - if nothing accepted, emit a one-character `ERROR` token.
//! 4. Identifiers are checked against the reserved word table.
//!
//! Every input character lands in exactly one token, and every token holds
//! at least one character, so the scan always makes progress and never
//! fails.

use crate::automaton::{self, Accept, State};
use crate::char_class::classify;
use crate::char_stream::{CharStream, Position};
use crate::error::ScanError;
use crate::keywords;
use crate::kind::TokenKind;
use crate::span::Span;

/// One scanned token.
///
/// `span` is in bytes, `len` in characters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub kind: TokenKind,
    pub span: Span,
    pub len: u32,
    /// Set when the token was produced by error recovery.
    pub error: Option<ScanError>,
}

const _: () = assert!(std::mem::size_of::<RawToken>() <= 16);

impl RawToken {
    /// Returns `true` for `ERROR` tokens and for any token carrying a
    /// [`ScanError`].
    #[inline]
    pub fn is_error(&self) -> bool {
        self.error.is_some() || self.kind == TokenKind::Error
    }

    /// The token's text in `source`.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.to_range()).unwrap_or_default()
    }
}

const UNRECOGNIZED: Accept = Accept {
    kind: TokenKind::Error,
    error: Some(ScanError::UnrecognizedCharacter),
};

/// Table-driven scanner over one source text.
#[derive(Clone, Debug)]
pub struct RawScanner<'a> {
    stream: CharStream<'a>,
}

impl<'a> RawScanner<'a> {
    /// Scan `text` from the beginning.
    pub fn new(text: &'a str) -> Self {
        Self::from_stream(CharStream::new(text))
    }

    /// Scan from wherever `stream` is positioned.
    pub fn from_stream(stream: CharStream<'a>) -> Self {
        Self { stream }
    }

    /// Position of the next token.
    #[inline]
    pub fn position(&self) -> Position {
        self.stream.position()
    }

    #[inline]
    pub fn source(&self) -> &'a str {
        self.stream.source()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.stream.is_eof()
    }

    /// Scan the next token, or `None` at end of input. Keeps returning
    /// `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<RawToken> {
        self.stream.mark_token_boundary();
        self.stream.peek()?;

        let mut state = State::Start;
        let mut last_accept: Option<(Accept, u32)> = None;
        while let Some(c) = self.stream.peek() {
            let next = automaton::step(state, classify(c));
            if next == State::Dead || self.stream.consume().is_err() {
                break;
            }
            state = next;
            if let Some(accept) = automaton::accepting(state) {
                last_accept = Some((accept, self.stream.consumed_len()));
            }
        }

        let accept = if let Some(recovered) = automaton::recovery(state) {
            recovered
        } else if let Some((accept, len)) = last_accept {
            self.stream.backup(self.stream.consumed_len() - len);
            accept
        } else {
            // Nothing matched: skip exactly one character.
            match self.stream.consumed_len() {
                0 => {
                    self.stream.consume().ok()?;
                }
                n => self.stream.backup(n - 1),
            }
            UNRECOGNIZED
        };

        let kind = match accept.kind {
            TokenKind::Identifier => {
                keywords::lookup(self.stream.token_text()).unwrap_or(TokenKind::Identifier)
            }
            kind => kind,
        };

        Some(RawToken {
            kind,
            span: self.stream.token_span(),
            len: self.stream.consumed_len(),
            error: accept.error,
        })
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    #[inline]
    fn next(&mut self) -> Option<RawToken> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for RawScanner<'_> {}

/// Scan all of `text` into a token vector.
pub fn tokenize(text: &str) -> Vec<RawToken> {
    RawScanner::new(text).collect()
}
