//! Reserved word resolution.
//!
//! The automaton scans every word as an identifier; the scanner then asks
//! [`lookup`] whether the finished word is reserved. Resolving after the
//! longest match is what keeps `ifx` a single identifier instead of `if`
//! followed by `x`.
//!
//! The identifier's length is a first-pass filter (reserved words are 2-12
//! characters, all lower-case ASCII), then only the words of that length are
//! compared.

use crate::kind::TokenKind;

/// Resolve a scanned word to its keyword kind, or `None` for an ordinary
/// identifier.
#[inline]
pub fn lookup(word: &str) -> Option<TokenKind> {
    let bytes = word.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-12 chars and start with a lower-case letter
    if !(2..=12).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match word {
            "do" => Some(TokenKind::Do),
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match word {
            "for" => Some(TokenKind::For),
            "int" => Some(TokenKind::Int),
            "new" => Some(TokenKind::New),
            "try" => Some(TokenKind::Try),
            _ => None,
        },
        4 => match word {
            "byte" => Some(TokenKind::Byte),
            "case" => Some(TokenKind::Case),
            "char" => Some(TokenKind::Char),
            "else" => Some(TokenKind::Else),
            "enum" => Some(TokenKind::Enum),
            "goto" => Some(TokenKind::Goto),
            "long" => Some(TokenKind::Long),
            "null" => Some(TokenKind::Null),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            "void" => Some(TokenKind::Void),
            _ => None,
        },
        5 => match word {
            "break" => Some(TokenKind::Break),
            "catch" => Some(TokenKind::Catch),
            "class" => Some(TokenKind::Class),
            "const" => Some(TokenKind::Const),
            "false" => Some(TokenKind::False),
            "final" => Some(TokenKind::Final),
            "float" => Some(TokenKind::Float),
            "short" => Some(TokenKind::Short),
            "super" => Some(TokenKind::Super),
            "throw" => Some(TokenKind::Throw),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match word {
            "assert" => Some(TokenKind::Assert),
            "double" => Some(TokenKind::Double),
            "import" => Some(TokenKind::Import),
            "native" => Some(TokenKind::Native),
            "public" => Some(TokenKind::Public),
            "return" => Some(TokenKind::Return),
            "static" => Some(TokenKind::Static),
            "switch" => Some(TokenKind::Switch),
            "throws" => Some(TokenKind::Throws),
            _ => None,
        },
        7 => match word {
            "boolean" => Some(TokenKind::Boolean),
            "default" => Some(TokenKind::Default),
            "extends" => Some(TokenKind::Extends),
            "finally" => Some(TokenKind::Finally),
            "package" => Some(TokenKind::Package),
            "private" => Some(TokenKind::Private),
            _ => None,
        },
        8 => match word {
            "abstract" => Some(TokenKind::Abstract),
            "continue" => Some(TokenKind::Continue),
            "strictfp" => Some(TokenKind::Strictfp),
            "volatile" => Some(TokenKind::Volatile),
            _ => None,
        },
        9 => match word {
            "interface" => Some(TokenKind::Interface),
            "protected" => Some(TokenKind::Protected),
            "transient" => Some(TokenKind::Transient),
            _ => None,
        },
        10 => match word {
            "implements" => Some(TokenKind::Implements),
            "instanceof" => Some(TokenKind::Instanceof),
            _ => None,
        },
        12 => match word {
            "synchronized" => Some(TokenKind::Synchronized),
            _ => None,
        },
        _ => None,
    }
}
