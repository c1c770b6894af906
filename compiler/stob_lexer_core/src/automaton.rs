//! The recognition automaton.
//!
//! A deterministic finite automaton over [`CharClass`]es, held in three
//! static tables built at compile time:
//!
//! - `TRANSITIONS[state][class]` is the next state, or [`State::Dead`] when
//!   the class cannot extend the current match.
//! - `ACCEPT[state]` is the token produced if the match ends in `state`.
//! - `RECOVER[state]` is the flagged token produced if the automaton dies in
//!   `state` without reaching a closing delimiter (unterminated strings,
//!   character literals and block comments).
//!
//! The scanner drives the tables with longest-match semantics: it follows
//! transitions until the next one is dead, then falls back to the last
//! accepting state it passed through (see [`RawScanner`](crate::RawScanner)).
//!
//! Keywords are not states. Words are recognized as identifiers and resolved
//! afterwards, so the table stays small and `ifx` stays one word.

use crate::char_class::{
    CharClass, CLASS_COUNT, DIGITS, FLOAT_SUFFIXES, HEX_DIGITS, LETTERS, NONZERO_DIGITS,
    OCTAL_DIGITS, PART_LETTERS, SIGNS, SIMPLE_ESCAPES, WHITESPACE,
};
use crate::error::ScanError;
use crate::kind::TokenKind;

/// Automaton state. `Start` is the initial state of every token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub(crate) enum State {
    Start,

    // === Trivia ===
    Whitespace,
    LineComment,
    /// After `/*`.
    BlockOpen,
    /// After `/**`: `/` closes an empty block comment, anything else opens a
    /// documentation comment.
    BlockOpenStar,
    Block,
    BlockStar,
    BlockDone,
    Doc,
    DocStar,
    DocDone,

    Ident,

    // === Numbers ===
    /// A lone `0`. Octal by definition.
    Zero,
    Octal,
    OctalSuffix,
    /// `0` followed by digits including `8` or `9`: only valid if a fraction,
    /// exponent or float suffix follows.
    DecimalRun,
    Decimal,
    DecimalSuffix,
    Fraction,
    Exponent,
    ExponentSign,
    ExponentDigits,
    FloatSuffix,
    HexPrefix,
    Hex,
    HexSuffix,
    /// `0x` digits `.`
    HexDot,
    /// `0x.`
    HexDotLead,
    HexFraction,
    HexExponent,
    HexExponentSign,
    HexExponentDigits,
    HexFloatSuffix,

    // === Character literals ===
    CharOpen,
    CharEscape,
    /// After `\u`, `\uu`, ...: four hex digits follow.
    CharUnicode,
    CharUnicode1,
    CharUnicode2,
    CharUnicode3,
    /// After `\0`-`\3`: up to two more octal digits.
    CharOctalHigh,
    CharOctalHigh2,
    /// After `\4`-`\7`: up to one more octal digit.
    CharOctalLow,
    /// Exactly one character read; expecting the closing quote.
    CharOne,
    CharDone,
    CharTooLong,
    CharTooLongEscape,
    CharMalformedDone,
    CharBadEscape,
    CharBadEscapeEscape,
    CharBadEscapeDone,

    // === String literals ===
    StrBody,
    StrEscape,
    StrUnicode,
    StrUnicode1,
    StrUnicode2,
    StrUnicode3,
    StrDone,
    StrBad,
    StrBadEscape,
    StrBadDone,

    // === Operators & punctuation ===
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Dot,
    DotDot,
    Ellipsis,
    At,
    Assign,
    EqEq,
    Lt,
    Le,
    Shl,
    ShlAssign,
    Gt,
    Ge,
    Shr,
    ShrAssign,
    Ushr,
    UshrAssign,
    Bang,
    NotEq,
    Tilde,
    Hook,
    Colon,
    Plus,
    Incr,
    PlusAssign,
    Minus,
    Decr,
    MinusAssign,
    Star,
    StarAssign,
    Slash,
    SlashAssign,
    Amp,
    AndAnd,
    AndAssign,
    Pipe,
    OrOr,
    OrAssign,
    Caret,
    XorAssign,
    Percent,
    RemAssign,

    /// No transition. Must stay last: it sizes [`STATE_COUNT`].
    Dead,
}

pub(crate) const STATE_COUNT: usize = State::Dead as usize + 1;

/// Outcome of a match ending in some state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Accept {
    pub kind: TokenKind,
    pub error: Option<ScanError>,
}

type Table = [[State; CLASS_COUNT]; STATE_COUNT];

// === Table construction ===
//
// Each helper takes the table by value and returns it so construction can
// run in a `static` initializer.

const fn on(mut t: Table, from: State, classes: &[CharClass], to: State) -> Table {
    let mut i = 0;
    while i < classes.len() {
        t[from as usize][classes[i] as usize] = to;
        i += 1;
    }
    t
}

const fn on1(mut t: Table, from: State, class: CharClass, to: State) -> Table {
    t[from as usize][class as usize] = to;
    t
}

/// Send every class to `to`. Call before the more specific edges.
const fn any(mut t: Table, from: State, to: State) -> Table {
    let mut c = 0;
    while c < CLASS_COUNT {
        t[from as usize][c] = to;
        c += 1;
    }
    t
}

/// Body of a delimited literal: any class loops back to `body` except line
/// breaks, which end the literal unterminated.
const fn literal_body(t: Table, from: State, body: State) -> Table {
    on1(any(t, from, body), from, CharClass::LineBreak, State::Dead)
}

const fn ok(kind: TokenKind) -> Option<Accept> {
    Some(Accept { kind, error: None })
}

const fn flagged(kind: TokenKind, error: ScanError) -> Option<Accept> {
    Some(Accept {
        kind,
        error: Some(error),
    })
}

static TRANSITIONS: Table = {
    use CharClass as C;
    use State as S;

    let mut t = [[S::Dead; CLASS_COUNT]; STATE_COUNT];

    // Start
    t = on(t, S::Start, WHITESPACE, S::Whitespace);
    t = on(t, S::Start, LETTERS, S::Ident);
    t = on1(t, S::Start, C::Digit0, S::Zero);
    t = on(t, S::Start, NONZERO_DIGITS, S::Decimal);
    t = on1(t, S::Start, C::DoubleQuote, S::StrBody);
    t = on1(t, S::Start, C::SingleQuote, S::CharOpen);
    t = on1(t, S::Start, C::LParen, S::LParen);
    t = on1(t, S::Start, C::RParen, S::RParen);
    t = on1(t, S::Start, C::LBrace, S::LBrace);
    t = on1(t, S::Start, C::RBrace, S::RBrace);
    t = on1(t, S::Start, C::LBracket, S::LBracket);
    t = on1(t, S::Start, C::RBracket, S::RBracket);
    t = on1(t, S::Start, C::Semicolon, S::Semicolon);
    t = on1(t, S::Start, C::Comma, S::Comma);
    t = on1(t, S::Start, C::Dot, S::Dot);
    t = on1(t, S::Start, C::At, S::At);
    t = on1(t, S::Start, C::Equals, S::Assign);
    t = on1(t, S::Start, C::Less, S::Lt);
    t = on1(t, S::Start, C::Greater, S::Gt);
    t = on1(t, S::Start, C::Bang, S::Bang);
    t = on1(t, S::Start, C::Tilde, S::Tilde);
    t = on1(t, S::Start, C::Question, S::Hook);
    t = on1(t, S::Start, C::Colon, S::Colon);
    t = on1(t, S::Start, C::Plus, S::Plus);
    t = on1(t, S::Start, C::Minus, S::Minus);
    t = on1(t, S::Start, C::Star, S::Star);
    t = on1(t, S::Start, C::Slash, S::Slash);
    t = on1(t, S::Start, C::Ampersand, S::Amp);
    t = on1(t, S::Start, C::Pipe, S::Pipe);
    t = on1(t, S::Start, C::Caret, S::Caret);
    t = on1(t, S::Start, C::Percent, S::Percent);

    // Whitespace runs and identifiers
    t = on(t, S::Whitespace, WHITESPACE, S::Whitespace);
    t = on(t, S::Ident, PART_LETTERS, S::Ident);

    // Comments
    t = on1(t, S::Slash, C::Slash, S::LineComment);
    t = on1(t, S::Slash, C::Star, S::BlockOpen);
    t = on1(t, S::Slash, C::Equals, S::SlashAssign);
    t = literal_body(t, S::LineComment, S::LineComment);

    t = any(t, S::BlockOpen, S::Block);
    t = on1(t, S::BlockOpen, C::Star, S::BlockOpenStar);
    t = any(t, S::BlockOpenStar, S::Doc);
    t = on1(t, S::BlockOpenStar, C::Slash, S::BlockDone);
    t = on1(t, S::BlockOpenStar, C::Star, S::DocStar);

    t = any(t, S::Block, S::Block);
    t = on1(t, S::Block, C::Star, S::BlockStar);
    t = any(t, S::BlockStar, S::Block);
    t = on1(t, S::BlockStar, C::Star, S::BlockStar);
    t = on1(t, S::BlockStar, C::Slash, S::BlockDone);

    t = any(t, S::Doc, S::Doc);
    t = on1(t, S::Doc, C::Star, S::DocStar);
    t = any(t, S::DocStar, S::Doc);
    t = on1(t, S::DocStar, C::Star, S::DocStar);
    t = on1(t, S::DocStar, C::Slash, S::DocDone);

    // Decimal and octal integers
    t = on(t, S::Zero, OCTAL_DIGITS, S::Octal);
    t = on1(t, S::Zero, C::Digit89, S::DecimalRun);
    t = on1(t, S::Zero, C::LetterX, S::HexPrefix);
    t = on1(t, S::Zero, C::Dot, S::Fraction);
    t = on1(t, S::Zero, C::LetterE, S::Exponent);
    t = on(t, S::Zero, FLOAT_SUFFIXES, S::FloatSuffix);
    t = on1(t, S::Zero, C::LetterL, S::OctalSuffix);

    t = on(t, S::Octal, OCTAL_DIGITS, S::Octal);
    t = on1(t, S::Octal, C::Digit89, S::DecimalRun);
    t = on1(t, S::Octal, C::Dot, S::Fraction);
    t = on1(t, S::Octal, C::LetterE, S::Exponent);
    t = on(t, S::Octal, FLOAT_SUFFIXES, S::FloatSuffix);
    t = on1(t, S::Octal, C::LetterL, S::OctalSuffix);

    t = on(t, S::DecimalRun, DIGITS, S::DecimalRun);
    t = on1(t, S::DecimalRun, C::Dot, S::Fraction);
    t = on1(t, S::DecimalRun, C::LetterE, S::Exponent);
    t = on(t, S::DecimalRun, FLOAT_SUFFIXES, S::FloatSuffix);

    t = on(t, S::Decimal, DIGITS, S::Decimal);
    t = on1(t, S::Decimal, C::Dot, S::Fraction);
    t = on1(t, S::Decimal, C::LetterE, S::Exponent);
    t = on(t, S::Decimal, FLOAT_SUFFIXES, S::FloatSuffix);
    t = on1(t, S::Decimal, C::LetterL, S::DecimalSuffix);

    // Decimal floats
    t = on1(t, S::Dot, C::Dot, S::DotDot);
    t = on(t, S::Dot, DIGITS, S::Fraction);
    t = on1(t, S::DotDot, C::Dot, S::Ellipsis);

    t = on(t, S::Fraction, DIGITS, S::Fraction);
    t = on1(t, S::Fraction, C::LetterE, S::Exponent);
    t = on(t, S::Fraction, FLOAT_SUFFIXES, S::FloatSuffix);

    t = on(t, S::Exponent, SIGNS, S::ExponentSign);
    t = on(t, S::Exponent, DIGITS, S::ExponentDigits);
    t = on(t, S::ExponentSign, DIGITS, S::ExponentDigits);
    t = on(t, S::ExponentDigits, DIGITS, S::ExponentDigits);
    t = on(t, S::ExponentDigits, FLOAT_SUFFIXES, S::FloatSuffix);

    // Hex integers and floats
    t = on(t, S::HexPrefix, HEX_DIGITS, S::Hex);
    t = on1(t, S::HexPrefix, C::Dot, S::HexDotLead);

    t = on(t, S::Hex, HEX_DIGITS, S::Hex);
    t = on1(t, S::Hex, C::LetterL, S::HexSuffix);
    t = on1(t, S::Hex, C::Dot, S::HexDot);
    t = on1(t, S::Hex, C::LetterP, S::HexExponent);

    t = on(t, S::HexDot, HEX_DIGITS, S::HexFraction);
    t = on1(t, S::HexDot, C::LetterP, S::HexExponent);
    t = on(t, S::HexDotLead, HEX_DIGITS, S::HexFraction);
    t = on(t, S::HexFraction, HEX_DIGITS, S::HexFraction);
    t = on1(t, S::HexFraction, C::LetterP, S::HexExponent);

    t = on(t, S::HexExponent, SIGNS, S::HexExponentSign);
    t = on(t, S::HexExponent, DIGITS, S::HexExponentDigits);
    t = on(t, S::HexExponentSign, DIGITS, S::HexExponentDigits);
    t = on(t, S::HexExponentDigits, DIGITS, S::HexExponentDigits);
    t = on(t, S::HexExponentDigits, FLOAT_SUFFIXES, S::HexFloatSuffix);

    // Character literals
    t = literal_body(t, S::CharOpen, S::CharOne);
    t = on1(t, S::CharOpen, C::Backslash, S::CharEscape);
    t = on1(t, S::CharOpen, C::SingleQuote, S::CharMalformedDone);

    t = literal_body(t, S::CharEscape, S::CharBadEscape);
    t = on(t, S::CharEscape, SIMPLE_ESCAPES, S::CharOne);
    t = on1(t, S::CharEscape, C::Digit0, S::CharOctalHigh);
    t = on1(t, S::CharEscape, C::Digit1To3, S::CharOctalHigh);
    t = on1(t, S::CharEscape, C::Digit4To7, S::CharOctalLow);
    t = on1(t, S::CharEscape, C::LetterU, S::CharUnicode);

    let unicode = [
        S::CharUnicode,
        S::CharUnicode1,
        S::CharUnicode2,
        S::CharUnicode3,
        S::CharOne,
    ];
    let mut i = 0;
    while i < 4 {
        t = literal_body(t, unicode[i], S::CharBadEscape);
        t = on1(t, unicode[i], C::Backslash, S::CharBadEscapeEscape);
        t = on1(t, unicode[i], C::SingleQuote, S::CharBadEscapeDone);
        t = on(t, unicode[i], HEX_DIGITS, unicode[i + 1]);
        i += 1;
    }
    t = on1(t, S::CharUnicode, C::LetterU, S::CharUnicode);

    t = literal_body(t, S::CharOctalHigh, S::CharTooLong);
    t = on(t, S::CharOctalHigh, OCTAL_DIGITS, S::CharOctalHigh2);
    t = on1(t, S::CharOctalHigh, C::Backslash, S::CharTooLongEscape);
    t = on1(t, S::CharOctalHigh, C::SingleQuote, S::CharDone);

    t = literal_body(t, S::CharOctalHigh2, S::CharTooLong);
    t = on(t, S::CharOctalHigh2, OCTAL_DIGITS, S::CharOne);
    t = on1(t, S::CharOctalHigh2, C::Backslash, S::CharTooLongEscape);
    t = on1(t, S::CharOctalHigh2, C::SingleQuote, S::CharDone);

    t = literal_body(t, S::CharOctalLow, S::CharTooLong);
    t = on(t, S::CharOctalLow, OCTAL_DIGITS, S::CharOne);
    t = on1(t, S::CharOctalLow, C::Backslash, S::CharTooLongEscape);
    t = on1(t, S::CharOctalLow, C::SingleQuote, S::CharDone);

    t = literal_body(t, S::CharOne, S::CharTooLong);
    t = on1(t, S::CharOne, C::Backslash, S::CharTooLongEscape);
    t = on1(t, S::CharOne, C::SingleQuote, S::CharDone);

    t = literal_body(t, S::CharTooLong, S::CharTooLong);
    t = on1(t, S::CharTooLong, C::Backslash, S::CharTooLongEscape);
    t = on1(t, S::CharTooLong, C::SingleQuote, S::CharMalformedDone);
    t = literal_body(t, S::CharTooLongEscape, S::CharTooLong);

    t = literal_body(t, S::CharBadEscape, S::CharBadEscape);
    t = on1(t, S::CharBadEscape, C::Backslash, S::CharBadEscapeEscape);
    t = on1(t, S::CharBadEscape, C::SingleQuote, S::CharBadEscapeDone);
    t = literal_body(t, S::CharBadEscapeEscape, S::CharBadEscape);

    // String literals
    t = literal_body(t, S::StrBody, S::StrBody);
    t = on1(t, S::StrBody, C::Backslash, S::StrEscape);
    t = on1(t, S::StrBody, C::DoubleQuote, S::StrDone);

    t = literal_body(t, S::StrEscape, S::StrBad);
    t = on(t, S::StrEscape, SIMPLE_ESCAPES, S::StrBody);
    t = on(t, S::StrEscape, OCTAL_DIGITS, S::StrBody);
    t = on1(t, S::StrEscape, C::LetterU, S::StrUnicode);

    let unicode = [
        S::StrUnicode,
        S::StrUnicode1,
        S::StrUnicode2,
        S::StrUnicode3,
        S::StrBody,
    ];
    let mut i = 0;
    while i < 4 {
        t = literal_body(t, unicode[i], S::StrBad);
        t = on1(t, unicode[i], C::Backslash, S::StrBadEscape);
        t = on1(t, unicode[i], C::DoubleQuote, S::StrBadDone);
        t = on(t, unicode[i], HEX_DIGITS, unicode[i + 1]);
        i += 1;
    }
    t = on1(t, S::StrUnicode, C::LetterU, S::StrUnicode);

    t = literal_body(t, S::StrBad, S::StrBad);
    t = on1(t, S::StrBad, C::Backslash, S::StrBadEscape);
    t = on1(t, S::StrBad, C::DoubleQuote, S::StrBadDone);
    t = literal_body(t, S::StrBadEscape, S::StrBad);

    // Multi-character operators
    t = on1(t, S::Assign, C::Equals, S::EqEq);
    t = on1(t, S::Lt, C::Equals, S::Le);
    t = on1(t, S::Lt, C::Less, S::Shl);
    t = on1(t, S::Shl, C::Equals, S::ShlAssign);
    t = on1(t, S::Gt, C::Equals, S::Ge);
    t = on1(t, S::Gt, C::Greater, S::Shr);
    t = on1(t, S::Shr, C::Equals, S::ShrAssign);
    t = on1(t, S::Shr, C::Greater, S::Ushr);
    t = on1(t, S::Ushr, C::Equals, S::UshrAssign);
    t = on1(t, S::Bang, C::Equals, S::NotEq);
    t = on1(t, S::Plus, C::Plus, S::Incr);
    t = on1(t, S::Plus, C::Equals, S::PlusAssign);
    t = on1(t, S::Minus, C::Minus, S::Decr);
    t = on1(t, S::Minus, C::Equals, S::MinusAssign);
    t = on1(t, S::Star, C::Equals, S::StarAssign);
    t = on1(t, S::Amp, C::Ampersand, S::AndAnd);
    t = on1(t, S::Amp, C::Equals, S::AndAssign);
    t = on1(t, S::Pipe, C::Pipe, S::OrOr);
    t = on1(t, S::Pipe, C::Equals, S::OrAssign);
    t = on1(t, S::Caret, C::Equals, S::XorAssign);
    t = on1(t, S::Percent, C::Equals, S::RemAssign);

    t
};

static ACCEPT: [Option<Accept>; STATE_COUNT] = {
    use ScanError as E;
    use State as S;
    use TokenKind as K;

    let mut a = [None; STATE_COUNT];

    a[S::Whitespace as usize] = ok(K::Whitespace);
    a[S::LineComment as usize] = ok(K::SingleLineComment);
    a[S::BlockDone as usize] = ok(K::MultiLineComment);
    a[S::DocDone as usize] = ok(K::FormalComment);
    a[S::Ident as usize] = ok(K::Identifier);

    a[S::Zero as usize] = ok(K::OctalLiteral);
    a[S::Octal as usize] = ok(K::OctalLiteral);
    a[S::OctalSuffix as usize] = ok(K::OctalLiteral);
    a[S::Decimal as usize] = ok(K::DecimalLiteral);
    a[S::DecimalSuffix as usize] = ok(K::DecimalLiteral);
    a[S::Hex as usize] = ok(K::HexLiteral);
    a[S::HexSuffix as usize] = ok(K::HexLiteral);
    a[S::Fraction as usize] = ok(K::DecimalFloatingPointLiteral);
    a[S::ExponentDigits as usize] = ok(K::DecimalFloatingPointLiteral);
    a[S::FloatSuffix as usize] = ok(K::DecimalFloatingPointLiteral);
    a[S::HexExponentDigits as usize] = ok(K::HexadecimalFloatingPointLiteral);
    a[S::HexFloatSuffix as usize] = ok(K::HexadecimalFloatingPointLiteral);

    a[S::CharDone as usize] = ok(K::CharacterLiteral);
    a[S::CharMalformedDone as usize] = flagged(K::CharacterLiteral, E::MalformedCharLiteral);
    a[S::CharBadEscapeDone as usize] = flagged(K::CharacterLiteral, E::InvalidEscape);
    a[S::StrDone as usize] = ok(K::StringLiteral);
    a[S::StrBadDone as usize] = flagged(K::StringLiteral, E::InvalidEscape);

    a[S::LParen as usize] = ok(K::LParen);
    a[S::RParen as usize] = ok(K::RParen);
    a[S::LBrace as usize] = ok(K::LBrace);
    a[S::RBrace as usize] = ok(K::RBrace);
    a[S::LBracket as usize] = ok(K::LBracket);
    a[S::RBracket as usize] = ok(K::RBracket);
    a[S::Semicolon as usize] = ok(K::Semicolon);
    a[S::Comma as usize] = ok(K::Comma);
    a[S::Dot as usize] = ok(K::Dot);
    a[S::Ellipsis as usize] = ok(K::Ellipsis);
    a[S::At as usize] = ok(K::At);
    a[S::Assign as usize] = ok(K::Assign);
    a[S::EqEq as usize] = ok(K::Eq);
    a[S::Lt as usize] = ok(K::Lt);
    a[S::Le as usize] = ok(K::Le);
    a[S::Shl as usize] = ok(K::LShift);
    a[S::ShlAssign as usize] = ok(K::LShiftAssign);
    a[S::Gt as usize] = ok(K::Gt);
    a[S::Ge as usize] = ok(K::Ge);
    a[S::Shr as usize] = ok(K::RSignedShift);
    a[S::ShrAssign as usize] = ok(K::RSignedShiftAssign);
    a[S::Ushr as usize] = ok(K::RUnsignedShift);
    a[S::UshrAssign as usize] = ok(K::RUnsignedShiftAssign);
    a[S::Bang as usize] = ok(K::Bang);
    a[S::NotEq as usize] = ok(K::Ne);
    a[S::Tilde as usize] = ok(K::Tilde);
    a[S::Hook as usize] = ok(K::Hook);
    a[S::Colon as usize] = ok(K::Colon);
    a[S::Plus as usize] = ok(K::Plus);
    a[S::Incr as usize] = ok(K::Incr);
    a[S::PlusAssign as usize] = ok(K::PlusAssign);
    a[S::Minus as usize] = ok(K::Minus);
    a[S::Decr as usize] = ok(K::Decr);
    a[S::MinusAssign as usize] = ok(K::MinusAssign);
    a[S::Star as usize] = ok(K::Star);
    a[S::StarAssign as usize] = ok(K::StarAssign);
    a[S::Slash as usize] = ok(K::Slash);
    a[S::SlashAssign as usize] = ok(K::SlashAssign);
    a[S::Amp as usize] = ok(K::BitAnd);
    a[S::AndAnd as usize] = ok(K::ScAnd);
    a[S::AndAssign as usize] = ok(K::AndAssign);
    a[S::Pipe as usize] = ok(K::BitOr);
    a[S::OrOr as usize] = ok(K::ScOr);
    a[S::OrAssign as usize] = ok(K::OrAssign);
    a[S::Caret as usize] = ok(K::Xor);
    a[S::XorAssign as usize] = ok(K::XorAssign);
    a[S::Percent as usize] = ok(K::Rem);
    a[S::RemAssign as usize] = ok(K::RemAssign);

    a
};

static RECOVER: [Option<Accept>; STATE_COUNT] = {
    use ScanError as E;
    use State as S;
    use TokenKind as K;

    let mut r = [None; STATE_COUNT];

    let comment = flagged(K::MultiLineComment, E::UnterminatedComment);
    r[S::BlockOpen as usize] = comment;
    r[S::Block as usize] = comment;
    r[S::BlockStar as usize] = comment;

    let doc = flagged(K::FormalComment, E::UnterminatedComment);
    r[S::BlockOpenStar as usize] = doc;
    r[S::Doc as usize] = doc;
    r[S::DocStar as usize] = doc;

    let string = flagged(K::StringLiteral, E::UnterminatedLiteral);
    r[S::StrBody as usize] = string;
    r[S::StrEscape as usize] = string;
    r[S::StrUnicode as usize] = string;
    r[S::StrUnicode1 as usize] = string;
    r[S::StrUnicode2 as usize] = string;
    r[S::StrUnicode3 as usize] = string;
    r[S::StrBad as usize] = string;
    r[S::StrBadEscape as usize] = string;

    let character = flagged(K::CharacterLiteral, E::UnterminatedLiteral);
    r[S::CharOpen as usize] = character;
    r[S::CharEscape as usize] = character;
    r[S::CharUnicode as usize] = character;
    r[S::CharUnicode1 as usize] = character;
    r[S::CharUnicode2 as usize] = character;
    r[S::CharUnicode3 as usize] = character;
    r[S::CharOctalHigh as usize] = character;
    r[S::CharOctalHigh2 as usize] = character;
    r[S::CharOctalLow as usize] = character;
    r[S::CharOne as usize] = character;
    r[S::CharTooLong as usize] = character;
    r[S::CharTooLongEscape as usize] = character;
    r[S::CharBadEscape as usize] = character;
    r[S::CharBadEscapeEscape as usize] = character;

    r
};

/// Next state after reading a character of class `class` in `state`.
#[inline]
pub(crate) fn step(state: State, class: CharClass) -> State {
    TRANSITIONS[state as usize][class as usize]
}

/// Token produced if the match ends in `state`.
#[inline]
pub(crate) fn accepting(state: State) -> Option<Accept> {
    ACCEPT[state as usize]
}

/// Flagged token produced if the automaton dies in `state`.
#[inline]
pub(crate) fn recovery(state: State) -> Option<Accept> {
    RECOVER[state as usize]
}

#[cfg(test)]
mod tests;
