//! Character classes: the input alphabet of the automaton.
//!
//! Every `char` maps to exactly one [`CharClass`]. Classes are as coarse as
//! the grammar allows: two characters share a class only if every automaton
//! state treats them the same way. Letters that double as hex digits,
//! exponent markers, suffixes or escape letters therefore get classes of
//! their own.
//!
//! ASCII goes through a 128-entry table; everything else is classified with
//! the Unicode `XID_Start` / `XID_Continue` properties plus the currency,
//! connector and ignorable ranges the identifier grammar adds.

use unicode_ident::{is_xid_continue, is_xid_start};

/// Input class of one character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CharClass {
    // === Digits ===
    Digit0,
    Digit1To3,
    Digit4To7,
    Digit89,

    // === Letters ===
    /// `a`, `c`, `A`, `B`, `C`: hex digits with no other role.
    LetterHex,
    /// `b`: hex digit and escape letter.
    LetterB,
    /// `d`, `D`: hex digit and float suffix.
    LetterD,
    /// `e`, `E`: hex digit and decimal exponent marker.
    LetterE,
    /// `f`: hex digit, float suffix and escape letter.
    LetterLowerF,
    /// `F`: hex digit and float suffix.
    LetterUpperF,
    /// `l`, `L`: integer suffix.
    LetterL,
    /// `p`, `P`: binary exponent marker.
    LetterP,
    /// `x`, `X`: hex prefix.
    LetterX,
    /// `n`, `r`, `t`: escape letters.
    LetterEscape,
    /// `u`: unicode escape marker.
    LetterU,
    /// Any other identifier-start character.
    Letter,
    /// Identifier-continue character that cannot start an identifier.
    PartLetter,

    // === Whitespace ===
    /// Space, tab, form feed.
    Blank,
    /// `\n` or `\r`.
    LineBreak,

    // === Punctuation ===
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Dot,
    At,
    Equals,
    Less,
    Greater,
    Bang,
    Tilde,
    Question,
    Colon,
    Plus,
    Minus,
    Star,
    Slash,
    Ampersand,
    Pipe,
    Caret,
    Percent,
    SingleQuote,
    DoubleQuote,
    Backslash,

    /// Anything else. Must stay last: it sizes [`CLASS_COUNT`].
    Other,
}

/// Number of character classes (width of the transition table).
pub const CLASS_COUNT: usize = CharClass::Other as usize + 1;

const fn classify_ascii(b: u8) -> CharClass {
    match b {
        b'0' => CharClass::Digit0,
        b'1'..=b'3' => CharClass::Digit1To3,
        b'4'..=b'7' => CharClass::Digit4To7,
        b'8' | b'9' => CharClass::Digit89,
        b'a' | b'c' | b'A' | b'B' | b'C' => CharClass::LetterHex,
        b'b' => CharClass::LetterB,
        b'd' | b'D' => CharClass::LetterD,
        b'e' | b'E' => CharClass::LetterE,
        b'f' => CharClass::LetterLowerF,
        b'F' => CharClass::LetterUpperF,
        b'l' | b'L' => CharClass::LetterL,
        b'p' | b'P' => CharClass::LetterP,
        b'x' | b'X' => CharClass::LetterX,
        b'n' | b'r' | b't' => CharClass::LetterEscape,
        b'u' => CharClass::LetterU,
        b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' => CharClass::Letter,
        b' ' | b'\t' | 0x0C => CharClass::Blank,
        b'\n' | b'\r' => CharClass::LineBreak,
        // Ignorable control characters continue identifiers.
        0x00..=0x08 | 0x0E..=0x1B | 0x7F => CharClass::PartLetter,
        b'(' => CharClass::LParen,
        b')' => CharClass::RParen,
        b'{' => CharClass::LBrace,
        b'}' => CharClass::RBrace,
        b'[' => CharClass::LBracket,
        b']' => CharClass::RBracket,
        b';' => CharClass::Semicolon,
        b',' => CharClass::Comma,
        b'.' => CharClass::Dot,
        b'@' => CharClass::At,
        b'=' => CharClass::Equals,
        b'<' => CharClass::Less,
        b'>' => CharClass::Greater,
        b'!' => CharClass::Bang,
        b'~' => CharClass::Tilde,
        b'?' => CharClass::Question,
        b':' => CharClass::Colon,
        b'+' => CharClass::Plus,
        b'-' => CharClass::Minus,
        b'*' => CharClass::Star,
        b'/' => CharClass::Slash,
        b'&' => CharClass::Ampersand,
        b'|' => CharClass::Pipe,
        b'^' => CharClass::Caret,
        b'%' => CharClass::Percent,
        b'\'' => CharClass::SingleQuote,
        b'"' => CharClass::DoubleQuote,
        b'\\' => CharClass::Backslash,
        _ => CharClass::Other,
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..128, always fits in u8"
)]
static ASCII_CLASSES: [CharClass; 128] = {
    let mut table = [CharClass::Other; 128];
    let mut i = 0;
    while i < 128 {
        table[i] = classify_ascii(i as u8);
        i += 1;
    }
    table
};

/// Classify one character.
#[inline]
pub fn classify(c: char) -> CharClass {
    if c.is_ascii() {
        ASCII_CLASSES[c as usize]
    } else {
        classify_non_ascii(c)
    }
}

fn classify_non_ascii(c: char) -> CharClass {
    if is_xid_start(c) || is_currency_symbol(c) || is_connector(c) {
        CharClass::Letter
    } else if is_xid_continue(c) || is_ignorable(c) {
        CharClass::PartLetter
    } else {
        CharClass::Other
    }
}

/// Unicode currency symbols (general category `Sc`) outside ASCII.
fn is_currency_symbol(c: char) -> bool {
    matches!(
        c,
        '\u{A2}'..='\u{A5}'
            | '\u{58F}'
            | '\u{60B}'
            | '\u{7FE}'..='\u{7FF}'
            | '\u{9F2}'..='\u{9F3}'
            | '\u{9FB}'
            | '\u{AF1}'
            | '\u{BF9}'
            | '\u{E3F}'
            | '\u{17DB}'
            | '\u{20A0}'..='\u{20C0}'
            | '\u{A838}'
            | '\u{FDFC}'
            | '\u{FE69}'
            | '\u{FF04}'
            | '\u{FFE0}'..='\u{FFE1}'
            | '\u{FFE5}'..='\u{FFE6}'
    )
}

/// Connector punctuation (`Pc`) outside ASCII. Starts identifiers like `_`.
fn is_connector(c: char) -> bool {
    matches!(
        c,
        '\u{203F}'..='\u{2040}' | '\u{2054}' | '\u{FE33}'..='\u{FE34}' | '\u{FE4D}'..='\u{FE4F}' | '\u{FF3F}'
    )
}

/// Format and C1 control characters that may appear inside identifiers.
fn is_ignorable(c: char) -> bool {
    matches!(
        c,
        '\u{80}'..='\u{9F}'
            | '\u{AD}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2063}'
            | '\u{FEFF}'
    )
}

// === Class groups used to build the transition table ===

pub(crate) const OCTAL_DIGITS: &[CharClass] =
    &[CharClass::Digit0, CharClass::Digit1To3, CharClass::Digit4To7];

pub(crate) const DIGITS: &[CharClass] = &[
    CharClass::Digit0,
    CharClass::Digit1To3,
    CharClass::Digit4To7,
    CharClass::Digit89,
];

pub(crate) const NONZERO_DIGITS: &[CharClass] =
    &[CharClass::Digit1To3, CharClass::Digit4To7, CharClass::Digit89];

pub(crate) const HEX_DIGITS: &[CharClass] = &[
    CharClass::Digit0,
    CharClass::Digit1To3,
    CharClass::Digit4To7,
    CharClass::Digit89,
    CharClass::LetterHex,
    CharClass::LetterB,
    CharClass::LetterD,
    CharClass::LetterE,
    CharClass::LetterLowerF,
    CharClass::LetterUpperF,
];

pub(crate) const FLOAT_SUFFIXES: &[CharClass] = &[
    CharClass::LetterD,
    CharClass::LetterLowerF,
    CharClass::LetterUpperF,
];

pub(crate) const SIGNS: &[CharClass] = &[CharClass::Plus, CharClass::Minus];

pub(crate) const LETTERS: &[CharClass] = &[
    CharClass::LetterHex,
    CharClass::LetterB,
    CharClass::LetterD,
    CharClass::LetterE,
    CharClass::LetterLowerF,
    CharClass::LetterUpperF,
    CharClass::LetterL,
    CharClass::LetterP,
    CharClass::LetterX,
    CharClass::LetterEscape,
    CharClass::LetterU,
    CharClass::Letter,
];

pub(crate) const PART_LETTERS: &[CharClass] = &[
    CharClass::LetterHex,
    CharClass::LetterB,
    CharClass::LetterD,
    CharClass::LetterE,
    CharClass::LetterLowerF,
    CharClass::LetterUpperF,
    CharClass::LetterL,
    CharClass::LetterP,
    CharClass::LetterX,
    CharClass::LetterEscape,
    CharClass::LetterU,
    CharClass::Letter,
    CharClass::PartLetter,
    CharClass::Digit0,
    CharClass::Digit1To3,
    CharClass::Digit4To7,
    CharClass::Digit89,
];

pub(crate) const WHITESPACE: &[CharClass] = &[CharClass::Blank, CharClass::LineBreak];

/// Single-character escapes: `\b \f \n \r \t \\ \' \"`.
///
/// `LetterB` and `LetterLowerF` only hold the lower-case letters, so `\B`
/// and `\F` correctly fall outside this set.
pub(crate) const SIMPLE_ESCAPES: &[CharClass] = &[
    CharClass::LetterB,
    CharClass::LetterLowerF,
    CharClass::LetterEscape,
    CharClass::Backslash,
    CharClass::SingleQuote,
    CharClass::DoubleQuote,
];
