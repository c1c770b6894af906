//! Table-driven tokenizer core for the STOB language.
//!
//! Standalone: no tracing or integration dependencies, so editor plugins and
//! other tools can embed it directly. The `stob_lexer` crate layers
//! positions, configuration and logging on top.
//!
//! # Pipeline
//!
//! ```text
//! &str ─► CharStream ─► classify ─► automaton ─► RawScanner ─► RawToken
//!                                                   │
//!                                                   └─► keywords::lookup
//! ```
//!
//! - [`CharStream`] tracks byte offset, line and column and rewinds the
//!   scanner's lookahead.
//! - [`classify`] maps each `char` to a [`CharClass`], the automaton's input
//!   alphabet.
//! - The automaton's transition, accept and recovery tables are `static`
//!   and built at compile time.
//! - [`RawScanner`] applies longest-match with backup and local error
//!   recovery, so scanning never fails.

mod automaton;
mod char_class;
mod char_stream;
mod error;
mod keywords;
mod kind;
mod line_index;
mod raw_scanner;
mod span;

pub use char_class::{classify, CharClass, CLASS_COUNT};
pub use char_stream::{CharStream, Position, DEFAULT_TAB_WIDTH};
pub use error::{ScanError, StreamError};
pub use keywords::lookup as lookup_keyword;
pub use kind::{Category, TokenKind};
pub use line_index::LineIndex;
pub use raw_scanner::{tokenize, RawScanner, RawToken};
pub use span::Span;
