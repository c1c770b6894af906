//! Token kinds and their highlighting categories.
//!
//! The taxonomy is closed. Every kind has a stable ordinal (its `repr(u8)`
//! discriminant) and a unique upper-case name. Ordinals 2, 3 and 7 are
//! unassigned; they were lexical-state markers in the grammar the ordinals
//! come from and never label a token.
//!
//! The ordinal registry is a static table built at compile time, so lookups
//! need no initialization and are safe from any thread.

use std::fmt;

/// Coarse class of a token, used by highlighters to pick a color.
///
/// The scanner assigns categories; choosing colors is the caller's business.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Whitespace,
    Comment,
    Keyword,
    Literal,
    Identifier,
    Operator,
    /// Malformed input. Also reported for any token carrying a scan error.
    Error,
}

impl Category {
    /// Primary-category string an editor keys its color scheme on.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Whitespace => "whitespace",
            Category::Comment => "comment",
            Category::Keyword => "keyword",
            Category::Literal => "literal",
            Category::Identifier => "identifier",
            Category::Operator => "operator",
            Category::Error => "error",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generates [`TokenKind`] together with its name, category and lexeme tables
/// from a single list, so the four can never drift apart.
macro_rules! token_kinds {
    (
        $(
            $(#[$attr:meta])*
            $variant:ident = $ordinal:literal, $name:literal, $category:ident $(, $lexeme:literal)?;
        )*
    ) => {
        /// Kind of a lexical token.
        ///
        /// The discriminant is the kind's ordinal.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum TokenKind {
            $(
                $(#[$attr])*
                $variant = $ordinal,
            )*
        }

        impl TokenKind {
            /// Every kind, in ascending ordinal order.
            pub const ALL: &'static [TokenKind] = &[$(TokenKind::$variant,)*];

            /// Unique upper-case name (e.g. `LSHIFTASSIGN`).
            pub const fn name(self) -> &'static str {
                match self {
                    $(TokenKind::$variant => $name,)*
                }
            }

            /// Highlighting category.
            pub const fn category(self) -> Category {
                match self {
                    $(TokenKind::$variant => Category::$category,)*
                }
            }

            /// Fixed spelling for keywords and operators, `None` for kinds whose
            /// text varies (literals, identifiers, comments, whitespace).
            pub const fn lexeme(self) -> Option<&'static str> {
                match self {
                    $(TokenKind::$variant => token_kinds!(@lexeme $($lexeme)?),)*
                }
            }
        }
    };
    (@lexeme) => { None };
    (@lexeme $lexeme:literal) => { Some($lexeme) };
}

token_kinds! {
    // === Whitespace & comments ===
    /// End of input. Bookkeeping only: the scanner signals end of input by
    /// returning `None`, never with a token of this kind.
    Eof = 0, "EOF", Whitespace;
    Whitespace = 1, "WHITESPACE", Whitespace;
    SingleLineComment = 4, "SINGLE_LINE_COMMENT", Comment;
    /// Documentation comment `/** ... */`.
    FormalComment = 5, "FORMAL_COMMENT", Comment;
    MultiLineComment = 6, "MULTI_LINE_COMMENT", Comment;

    // === Keywords ===
    Abstract = 8, "ABSTRACT", Keyword, "abstract";
    Assert = 9, "ASSERT", Keyword, "assert";
    Boolean = 10, "BOOLEAN", Keyword, "boolean";
    Break = 11, "BREAK", Keyword, "break";
    Byte = 12, "BYTE", Keyword, "byte";
    Case = 13, "CASE", Keyword, "case";
    Catch = 14, "CATCH", Keyword, "catch";
    Char = 15, "CHAR", Keyword, "char";
    Class = 16, "CLASS", Keyword, "class";
    Const = 17, "CONST", Keyword, "const";
    Continue = 18, "CONTINUE", Keyword, "continue";
    Default = 19, "_DEFAULT", Keyword, "default";
    Do = 20, "DO", Keyword, "do";
    Double = 21, "DOUBLE", Keyword, "double";
    Else = 22, "ELSE", Keyword, "else";
    Enum = 23, "ENUM", Keyword, "enum";
    Extends = 24, "EXTENDS", Keyword, "extends";
    False = 25, "FALSE", Keyword, "false";
    Final = 26, "FINAL", Keyword, "final";
    Finally = 27, "FINALLY", Keyword, "finally";
    Float = 28, "FLOAT", Keyword, "float";
    For = 29, "FOR", Keyword, "for";
    Goto = 30, "GOTO", Keyword, "goto";
    If = 31, "IF", Keyword, "if";
    Implements = 32, "IMPLEMENTS", Keyword, "implements";
    Import = 33, "IMPORT", Keyword, "import";
    Instanceof = 34, "INSTANCEOF", Keyword, "instanceof";
    Int = 35, "INT", Keyword, "int";
    Interface = 36, "INTERFACE", Keyword, "interface";
    Long = 37, "LONG", Keyword, "long";
    Native = 38, "NATIVE", Keyword, "native";
    New = 39, "NEW", Keyword, "new";
    Null = 40, "NULL", Keyword, "null";
    Package = 41, "PACKAGE", Keyword, "package";
    Private = 42, "PRIVATE", Keyword, "private";
    Protected = 43, "PROTECTED", Keyword, "protected";
    Public = 44, "PUBLIC", Keyword, "public";
    Return = 45, "RETURN", Keyword, "return";
    Short = 46, "SHORT", Keyword, "short";
    Static = 47, "STATIC", Keyword, "static";
    Strictfp = 48, "STRICTFP", Keyword, "strictfp";
    Super = 49, "SUPER", Keyword, "super";
    Switch = 50, "SWITCH", Keyword, "switch";
    Synchronized = 51, "SYNCHRONIZED", Keyword, "synchronized";
    This = 52, "THIS", Keyword, "this";
    Throw = 53, "THROW", Keyword, "throw";
    Throws = 54, "THROWS", Keyword, "throws";
    Transient = 55, "TRANSIENT", Keyword, "transient";
    True = 56, "TRUE", Keyword, "true";
    Try = 57, "TRY", Keyword, "try";
    Void = 58, "VOID", Keyword, "void";
    Volatile = 59, "VOLATILE", Keyword, "volatile";
    While = 60, "WHILE", Keyword, "while";

    // === Literals ===
    /// Umbrella for the integer forms. Never emitted: the scanner reports the
    /// specific decimal, hex or octal kind.
    IntegerLiteral = 61, "INTEGER_LITERAL", Literal;
    DecimalLiteral = 62, "DECIMAL_LITERAL", Literal;
    HexLiteral = 63, "HEX_LITERAL", Literal;
    OctalLiteral = 64, "OCTAL_LITERAL", Literal;
    /// Umbrella for the floating forms. Never emitted.
    FloatingPointLiteral = 65, "FLOATING_POINT_LITERAL", Literal;
    DecimalFloatingPointLiteral = 66, "DECIMAL_FLOATING_POINT_LITERAL", Literal;
    /// `e`/`E` exponent. Folded into the enclosing literal, never emitted.
    DecimalExponent = 67, "DECIMAL_EXPONENT", Literal;
    HexadecimalFloatingPointLiteral = 68, "HEXADECIMAL_FLOATING_POINT_LITERAL", Literal;
    /// `p`/`P` binary exponent. Folded into the enclosing literal, never emitted.
    HexadecimalExponent = 69, "HEXADECIMAL_EXPONENT", Literal;
    CharacterLiteral = 70, "CHARACTER_LITERAL", Literal;
    StringLiteral = 71, "STRING_LITERAL", Literal;

    // === Identifiers ===
    Identifier = 72, "IDENTIFIER", Identifier;
    /// Identifier-start character class. Grammar primitive, never emitted.
    Letter = 73, "LETTER", Identifier;
    /// Identifier-continue character class. Grammar primitive, never emitted.
    PartLetter = 74, "PART_LETTER", Identifier;

    // === Operators & punctuation ===
    LParen = 75, "LPAREN", Operator, "(";
    RParen = 76, "RPAREN", Operator, ")";
    LBrace = 77, "LBRACE", Operator, "{";
    RBrace = 78, "RBRACE", Operator, "}";
    LBracket = 79, "LBRACKET", Operator, "[";
    RBracket = 80, "RBRACKET", Operator, "]";
    Semicolon = 81, "SEMICOLON", Operator, ";";
    Comma = 82, "COMMA", Operator, ",";
    Dot = 83, "DOT", Operator, ".";
    At = 84, "AT", Operator, "@";
    Assign = 85, "ASSIGN", Operator, "=";
    Lt = 86, "LT", Operator, "<";
    Bang = 87, "BANG", Operator, "!";
    Tilde = 88, "TILDE", Operator, "~";
    Hook = 89, "HOOK", Operator, "?";
    Colon = 90, "COLON", Operator, ":";
    Eq = 91, "EQ", Operator, "==";
    Le = 92, "LE", Operator, "<=";
    Ge = 93, "GE", Operator, ">=";
    Ne = 94, "NE", Operator, "!=";
    ScOr = 95, "SC_OR", Operator, "||";
    ScAnd = 96, "SC_AND", Operator, "&&";
    Incr = 97, "INCR", Operator, "++";
    Decr = 98, "DECR", Operator, "--";
    Plus = 99, "PLUS", Operator, "+";
    Minus = 100, "MINUS", Operator, "-";
    Star = 101, "STAR", Operator, "*";
    Slash = 102, "SLASH", Operator, "/";
    BitAnd = 103, "BIT_AND", Operator, "&";
    BitOr = 104, "BIT_OR", Operator, "|";
    Xor = 105, "XOR", Operator, "^";
    Rem = 106, "REM", Operator, "%";
    LShift = 107, "LSHIFT", Operator, "<<";
    PlusAssign = 108, "PLUSASSIGN", Operator, "+=";
    MinusAssign = 109, "MINUSASSIGN", Operator, "-=";
    StarAssign = 110, "STARASSIGN", Operator, "*=";
    SlashAssign = 111, "SLASHASSIGN", Operator, "/=";
    AndAssign = 112, "ANDASSIGN", Operator, "&=";
    OrAssign = 113, "ORASSIGN", Operator, "|=";
    XorAssign = 114, "XORASSIGN", Operator, "^=";
    RemAssign = 115, "REMASSIGN", Operator, "%=";
    LShiftAssign = 116, "LSHIFTASSIGN", Operator, "<<=";
    RSignedShiftAssign = 117, "RSIGNEDSHIFTASSIGN", Operator, ">>=";
    RUnsignedShiftAssign = 118, "RUNSIGNEDSHIFTASSIGN", Operator, ">>>=";
    Ellipsis = 119, "ELLIPSIS", Operator, "...";
    RUnsignedShift = 120, "RUNSIGNEDSHIFT", Operator, ">>>";
    RSignedShift = 121, "RSIGNEDSHIFT", Operator, ">>";
    Gt = 122, "GT", Operator, ">";

    // === Recovery ===
    /// A character no rule matches. Always one character long.
    Error = 123, "ERROR", Error;
}

/// Ordinal → kind lookup, indexed by the `u8` ordinal.
static BY_ORDINAL: [Option<TokenKind>; 256] = {
    let mut table = [None; 256];
    let mut i = 0;
    while i < TokenKind::ALL.len() {
        let kind = TokenKind::ALL[i];
        table[kind as usize] = Some(kind);
        i += 1;
    }
    table
};

impl TokenKind {
    /// The kind's stable ordinal.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look up a kind by ordinal. Returns `None` for unassigned ordinals.
    #[inline]
    pub fn from_ordinal(ordinal: u8) -> Option<TokenKind> {
        BY_ORDINAL[ordinal as usize]
    }

    /// Look up a kind by its upper-case name.
    pub fn from_name(name: &str) -> Option<TokenKind> {
        TokenKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Whitespace and comments.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::SingleLineComment
                | TokenKind::FormalComment
                | TokenKind::MultiLineComment
        )
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self.category(), Category::Keyword)
    }

    /// Kinds that exist for grammar bookkeeping and are never emitted by the
    /// scanner.
    pub const fn is_internal(self) -> bool {
        matches!(
            self,
            TokenKind::Eof
                | TokenKind::IntegerLiteral
                | TokenKind::FloatingPointLiteral
                | TokenKind::DecimalExponent
                | TokenKind::HexadecimalExponent
                | TokenKind::Letter
                | TokenKind::PartLetter
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
