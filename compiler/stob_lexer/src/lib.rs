//! Syntax-highlighting scanner for the STOB language.
//!
//! Editor integrations create a [`Scanner`] over a document and pull
//! [`Token`]s from it. Each token carries its [`TokenKind`], byte span,
//! character length and line/column positions. Highlighters color by
//! [`Token::category`].
//!
//! ```
//! use stob_lexer::{create_scanner, Category};
//!
//! let source = "int x = 0x1F; // answer";
//! for token in create_scanner(source) {
//!     if token.category() == Category::Keyword {
//!         assert_eq!(token.text(source), "int");
//!     }
//! }
//! ```
//!
//! Scanning never fails. Malformed input (stray characters, unterminated
//! literals or comments, bad escapes) comes back as tokens flagged with a
//! [`ScanError`], and the scan carries on.
//!
//! # Tracing
//!
//! Call [`init_tracing`] and set `RUST_LOG=stob_lexer=trace` to log every
//! token, or `RUST_LOG=stob_lexer=debug` to log only error recovery.

use std::sync::Once;

mod config;
mod error;
mod language;
mod scanner;
mod token;

pub use config::{ScanConfig, Trivia};
pub use error::ResumeError;
pub use language::{LanguageInfo, STOB};
pub use scanner::{Checkpoint, Scanner};
pub use token::Token;

pub use stob_lexer_core::{Category, LineIndex, Position, ScanError, Span, TokenKind};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from the `RUST_LOG` environment variable.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Create a scanner over `text` with the default configuration.
pub fn create_scanner(text: &str) -> Scanner<'_> {
    Scanner::new(text)
}

/// Scan all of `text`.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn tokenize(text: &str) -> Vec<Token> {
    Scanner::new(text).collect()
}

/// Scan all of `text` with `config`.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn tokenize_with(text: &str, config: ScanConfig) -> Vec<Token> {
    Scanner::with_config(text, config).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }

    #[test]
    fn tokenize_with_config() {
        let all = tokenize("a b");
        let significant = tokenize_with("a b", ScanConfig::skipping_trivia());
        assert_eq!(all.len(), 3);
        assert_eq!(significant, vec![all[0], all[2]]);
    }
}
