//! Scanner configuration.

use stob_lexer_core::DEFAULT_TAB_WIDTH;

/// Whether whitespace and comments reach the caller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Trivia {
    /// Whitespace and comments are ordinary tokens (what a highlighter
    /// wants).
    #[default]
    Emit,
    /// Only significant tokens are yielded. Skipped tokens are still
    /// scanned, so spans of the remaining tokens are unaffected. Trivia
    /// carrying a scan error (an unterminated comment) is never skipped.
    Skip,
}

/// Configuration for a [`Scanner`](crate::Scanner).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScanConfig {
    /// Tab stop width for column numbers. Zero is treated as one.
    pub tab_width: u32,
    pub trivia: Trivia,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            trivia: Trivia::Emit,
        }
    }
}

impl ScanConfig {
    /// Default config with the given tab stop width.
    pub fn with_tab_width(tab_width: u32) -> Self {
        Self {
            tab_width,
            ..Default::default()
        }
    }

    /// Default config that drops whitespace and comments.
    pub fn skipping_trivia() -> Self {
        Self {
            trivia: Trivia::Skip,
            ..Default::default()
        }
    }

    /// Tab width actually used for column tracking.
    #[inline]
    pub fn effective_tab_width(&self) -> u32 {
        self.tab_width.max(1)
    }

    #[inline]
    pub fn skips_trivia(&self) -> bool {
        self.trivia == Trivia::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.tab_width, 8);
        assert_eq!(config.trivia, Trivia::Emit);
        assert!(!config.skips_trivia());
    }

    #[test]
    fn constructors() {
        assert_eq!(ScanConfig::with_tab_width(4).tab_width, 4);
        assert_eq!(ScanConfig::with_tab_width(4).trivia, Trivia::Emit);
        assert!(ScanConfig::skipping_trivia().skips_trivia());
        assert_eq!(ScanConfig::skipping_trivia().tab_width, 8);
    }

    #[test]
    fn zero_tab_width_is_one() {
        assert_eq!(ScanConfig::with_tab_width(0).effective_tab_width(), 1);
    }
}
