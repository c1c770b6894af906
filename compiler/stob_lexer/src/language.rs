//! Language registration data for editor integrations.
//!
//! The scanner does not route files itself. Hosts read these values to
//! register the language and to implement comment toggling.

/// Static description of a language as a host editor sees it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LanguageInfo {
    /// MIME type files of this language are registered under.
    pub mime_type: &'static str,
    /// Human-readable name.
    pub display_name: &'static str,
    pub line_comment_prefix: &'static str,
    /// Opening and closing block comment delimiters.
    pub block_comment: (&'static str, &'static str),
}

/// The STOB language.
pub const STOB: LanguageInfo = LanguageInfo {
    mime_type: "text/x-stob",
    display_name: "STOB",
    line_comment_prefix: "//",
    block_comment: ("/*", "*/"),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;
    use stob_lexer_core::TokenKind;

    #[test]
    fn registration_values() {
        assert_eq!(STOB.mime_type, "text/x-stob");
        assert_eq!(STOB.display_name, "STOB");
    }

    #[test]
    fn comment_delimiters_scan_as_comments() {
        let line = format!("{} note", STOB.line_comment_prefix);
        assert_eq!(tokenize(&line)[0].kind, TokenKind::SingleLineComment);

        let (open, close) = STOB.block_comment;
        let block = format!("{open} note {close}");
        let tokens = tokenize(&block);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::MultiLineComment);
    }
}
