//! Token kinds.
//!
//! [`TokenKind`] is a fieldless `#[repr(u8)]` enum: token payloads (text,
//! trivia, diagnostics) live on the tree's `SyntaxToken`, never in the kind.
//! That keeps kinds `Copy`, lets the parser build `u8`-indexed bitsets over
//! them, and makes `match` exhaustive in every consumer.
//!
//! Contextual keywords (`record`, `extension`, `await`, ...) are lexed as
//! [`TokenKind::Ident`] with a [`ContextualKeyword`] hint. The parser promotes
//! the token to the matching `Kw*` kind when it commits to the keyword reading.

use std::fmt;

/// Closed set of token kinds produced by the lexer and the parser.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // Reserved keywords
    KwAbstract,
    KwAs,
    KwBase,
    KwBool,
    KwBreak,
    KwByte,
    KwCase,
    KwCatch,
    KwChar,
    KwChecked,
    KwClass,
    KwConst,
    KwContinue,
    KwDecimal,
    KwDefault,
    KwDelegate,
    KwDo,
    KwDouble,
    KwElse,
    KwEnum,
    KwEvent,
    KwExplicit,
    KwExtern,
    KwFalse,
    KwFinally,
    KwFloat,
    KwFor,
    KwForeach,
    KwGoto,
    KwIf,
    KwImplicit,
    KwIn,
    KwInt,
    KwInterface,
    KwInternal,
    KwIs,
    KwLock,
    KwLong,
    KwNamespace,
    KwNew,
    KwNull,
    KwObject,
    KwOperator,
    KwOut,
    KwOverride,
    KwParams,
    KwPrivate,
    KwProtected,
    KwPublic,
    KwReadonly,
    KwRef,
    KwReturn,
    KwSbyte,
    KwSealed,
    KwShort,
    KwSizeof,
    KwStatic,
    KwString,
    KwStruct,
    KwSwitch,
    KwThis,
    KwThrow,
    KwTrue,
    KwTry,
    KwTypeof,
    KwUint,
    KwUlong,
    KwUnchecked,
    KwUnsafe,
    KwUshort,
    KwUsing,
    KwVirtual,
    KwVoid,
    KwVolatile,
    KwWhile,

    // Contextual keywords (only after promotion by the parser)
    KwAllows,
    KwAsync,
    KwAwait,
    KwExtension,
    KwFile,
    KwGet,
    KwGlobal,
    KwInit,
    KwPartial,
    KwRecord,
    KwRequired,
    KwScoped,
    KwSet,
    KwWhen,
    KwWhere,
    KwWith,
    KwYield,

    // Punctuation
    LBrace,          // {
    RBrace,          // }
    LParen,          // (
    RParen,          // )
    LBracket,        // [
    RBracket,        // ]
    Dot,             // .
    DotDot,          // ..
    Comma,           // ,
    Colon,           // :
    DoubleColon,     // ::
    Semicolon,       // ;
    Question,        // ?
    DoubleQuestion,  // ??
    FatArrow,        // =>

    // Operators
    Plus,            // +
    Minus,           // -
    Star,            // *
    Slash,           // /
    Percent,         // %
    Amp,             // &
    Pipe,            // |
    Caret,           // ^
    Bang,            // !
    Tilde,           // ~
    Eq,              // =
    Lt,              // <
    Gt,              // >
    PlusPlus,        // ++
    MinusMinus,      // --
    AmpAmp,          // &&
    PipePipe,        // ||
    EqEq,            // ==
    NotEq,           // !=
    LtEq,            // <=
    GtEq,            // >=
    Shl,             // <<
    PlusEq,          // +=
    MinusEq,         // -=
    StarEq,          // *=
    SlashEq,         // /=
    PercentEq,       // %=
    AmpEq,           // &=
    PipeEq,          // |=
    CaretEq,         // ^=
    ShlEq,           // <<=
    DoubleQuestionEq, // ??=

    // Composed by the parser from adjacent `>` tokens
    Shr,             // >>
    ShrEq,           // >>=
    UnsignedShr,     // >>>
    UnsignedShrEq,   // >>>=

    // Literals and names
    IntLiteral,
    RealLiteral,
    CharLiteral,
    StringLiteral,
    Ident,

    /// Input the lexer could not classify.
    BadToken,
    Eof,
}

impl TokenKind {
    /// Number of token kinds; bitsets over kinds need this many bits.
    pub const COUNT: usize = TokenKind::Eof as usize + 1;

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The exact source text of a token of this kind, for kinds whose text
    /// is fixed. `None` for names, literals, bad tokens and EOF.
    #[allow(clippy::enum_glob_use)]
    pub const fn fixed_text(self) -> Option<&'static str> {
        use TokenKind::*;
        Some(match self {
            KwAbstract => "abstract",
            KwAs => "as",
            KwBase => "base",
            KwBool => "bool",
            KwBreak => "break",
            KwByte => "byte",
            KwCase => "case",
            KwCatch => "catch",
            KwChar => "char",
            KwChecked => "checked",
            KwClass => "class",
            KwConst => "const",
            KwContinue => "continue",
            KwDecimal => "decimal",
            KwDefault => "default",
            KwDelegate => "delegate",
            KwDo => "do",
            KwDouble => "double",
            KwElse => "else",
            KwEnum => "enum",
            KwEvent => "event",
            KwExplicit => "explicit",
            KwExtern => "extern",
            KwFalse => "false",
            KwFinally => "finally",
            KwFloat => "float",
            KwFor => "for",
            KwForeach => "foreach",
            KwGoto => "goto",
            KwIf => "if",
            KwImplicit => "implicit",
            KwIn => "in",
            KwInt => "int",
            KwInterface => "interface",
            KwInternal => "internal",
            KwIs => "is",
            KwLock => "lock",
            KwLong => "long",
            KwNamespace => "namespace",
            KwNew => "new",
            KwNull => "null",
            KwObject => "object",
            KwOperator => "operator",
            KwOut => "out",
            KwOverride => "override",
            KwParams => "params",
            KwPrivate => "private",
            KwProtected => "protected",
            KwPublic => "public",
            KwReadonly => "readonly",
            KwRef => "ref",
            KwReturn => "return",
            KwSbyte => "sbyte",
            KwSealed => "sealed",
            KwShort => "short",
            KwSizeof => "sizeof",
            KwStatic => "static",
            KwString => "string",
            KwStruct => "struct",
            KwSwitch => "switch",
            KwThis => "this",
            KwThrow => "throw",
            KwTrue => "true",
            KwTry => "try",
            KwTypeof => "typeof",
            KwUint => "uint",
            KwUlong => "ulong",
            KwUnchecked => "unchecked",
            KwUnsafe => "unsafe",
            KwUshort => "ushort",
            KwUsing => "using",
            KwVirtual => "virtual",
            KwVoid => "void",
            KwVolatile => "volatile",
            KwWhile => "while",

            KwAllows => "allows",
            KwAsync => "async",
            KwAwait => "await",
            KwExtension => "extension",
            KwFile => "file",
            KwGet => "get",
            KwGlobal => "global",
            KwInit => "init",
            KwPartial => "partial",
            KwRecord => "record",
            KwRequired => "required",
            KwScoped => "scoped",
            KwSet => "set",
            KwWhen => "when",
            KwWhere => "where",
            KwWith => "with",
            KwYield => "yield",

            LBrace => "{",
            RBrace => "}",
            LParen => "(",
            RParen => ")",
            LBracket => "[",
            RBracket => "]",
            Dot => ".",
            DotDot => "..",
            Comma => ",",
            Colon => ":",
            DoubleColon => "::",
            Semicolon => ";",
            Question => "?",
            DoubleQuestion => "??",
            FatArrow => "=>",

            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Percent => "%",
            Amp => "&",
            Pipe => "|",
            Caret => "^",
            Bang => "!",
            Tilde => "~",
            Eq => "=",
            Lt => "<",
            Gt => ">",
            PlusPlus => "++",
            MinusMinus => "--",
            AmpAmp => "&&",
            PipePipe => "||",
            EqEq => "==",
            NotEq => "!=",
            LtEq => "<=",
            GtEq => ">=",
            Shl => "<<",
            PlusEq => "+=",
            MinusEq => "-=",
            StarEq => "*=",
            SlashEq => "/=",
            PercentEq => "%=",
            AmpEq => "&=",
            PipeEq => "|=",
            CaretEq => "^=",
            ShlEq => "<<=",
            DoubleQuestionEq => "??=",

            Shr => ">>",
            ShrEq => ">>=",
            UnsignedShr => ">>>",
            UnsignedShrEq => ">>>=",

            IntLiteral | RealLiteral | CharLiteral | StringLiteral | Ident | BadToken | Eof => {
                return None
            }
        })
    }

    /// Human-readable name used in diagnostics and tree dumps.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::IntLiteral => "integer literal",
            TokenKind::RealLiteral => "real literal",
            TokenKind::CharLiteral => "character literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::Ident => "identifier",
            TokenKind::BadToken => "bad token",
            TokenKind::Eof => "end of file",
            other => other.fixed_text().unwrap_or("token"),
        }
    }

    #[inline]
    pub fn is_reserved_keyword(self) -> bool {
        self <= TokenKind::KwWhile
    }

    #[inline]
    pub fn is_contextual_keyword(self) -> bool {
        (TokenKind::KwAllows..=TokenKind::KwYield).contains(&self)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        self <= TokenKind::KwYield
    }

    #[inline]
    pub fn is_punctuation_or_operator(self) -> bool {
        (TokenKind::LBrace..=TokenKind::UnsignedShrEq).contains(&self)
    }

    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral
                | TokenKind::RealLiteral
                | TokenKind::CharLiteral
                | TokenKind::StringLiteral
                | TokenKind::KwTrue
                | TokenKind::KwFalse
                | TokenKind::KwNull
        )
    }

    /// Keywords naming a built-in type (`int`, `string`, `void`, ...).
    pub fn is_predefined_type(self) -> bool {
        matches!(
            self,
            TokenKind::KwBool
                | TokenKind::KwByte
                | TokenKind::KwSbyte
                | TokenKind::KwShort
                | TokenKind::KwUshort
                | TokenKind::KwInt
                | TokenKind::KwUint
                | TokenKind::KwLong
                | TokenKind::KwUlong
                | TokenKind::KwChar
                | TokenKind::KwFloat
                | TokenKind::KwDouble
                | TokenKind::KwDecimal
                | TokenKind::KwString
                | TokenKind::KwObject
                | TokenKind::KwVoid
        )
    }

    /// Compound assignment and plain `=`.
    pub fn is_assignment_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Eq
                | TokenKind::PlusEq
                | TokenKind::MinusEq
                | TokenKind::StarEq
                | TokenKind::SlashEq
                | TokenKind::PercentEq
                | TokenKind::AmpEq
                | TokenKind::PipeEq
                | TokenKind::CaretEq
                | TokenKind::ShlEq
                | TokenKind::ShrEq
                | TokenKind::UnsignedShrEq
                | TokenKind::DoubleQuestionEq
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Words that are keywords only in particular syntactic positions.
///
/// The lexer attaches this hint to identifier tokens whose text matches; a
/// verbatim identifier (`@record`) never carries one.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ContextualKeyword {
    Allows,
    Async,
    Await,
    Extension,
    File,
    Get,
    Global,
    Init,
    Notnull,
    Partial,
    Record,
    Required,
    Scoped,
    Set,
    Unmanaged,
    Var,
    When,
    Where,
    With,
    Yield,
}

impl ContextualKeyword {
    pub const ALL: &[ContextualKeyword] = &[
        ContextualKeyword::Allows,
        ContextualKeyword::Async,
        ContextualKeyword::Await,
        ContextualKeyword::Extension,
        ContextualKeyword::File,
        ContextualKeyword::Get,
        ContextualKeyword::Global,
        ContextualKeyword::Init,
        ContextualKeyword::Notnull,
        ContextualKeyword::Partial,
        ContextualKeyword::Record,
        ContextualKeyword::Required,
        ContextualKeyword::Scoped,
        ContextualKeyword::Set,
        ContextualKeyword::Unmanaged,
        ContextualKeyword::Var,
        ContextualKeyword::When,
        ContextualKeyword::Where,
        ContextualKeyword::With,
        ContextualKeyword::Yield,
    ];

    pub const fn text(self) -> &'static str {
        match self {
            ContextualKeyword::Allows => "allows",
            ContextualKeyword::Async => "async",
            ContextualKeyword::Await => "await",
            ContextualKeyword::Extension => "extension",
            ContextualKeyword::File => "file",
            ContextualKeyword::Get => "get",
            ContextualKeyword::Global => "global",
            ContextualKeyword::Init => "init",
            ContextualKeyword::Notnull => "notnull",
            ContextualKeyword::Partial => "partial",
            ContextualKeyword::Record => "record",
            ContextualKeyword::Required => "required",
            ContextualKeyword::Scoped => "scoped",
            ContextualKeyword::Set => "set",
            ContextualKeyword::Unmanaged => "unmanaged",
            ContextualKeyword::Var => "var",
            ContextualKeyword::When => "when",
            ContextualKeyword::Where => "where",
            ContextualKeyword::With => "with",
            ContextualKeyword::Yield => "yield",
        }
    }

    /// The keyword kind the parser promotes to, if this word is ever
    /// promoted. `var`, `unmanaged` and `notnull` always stay names.
    pub const fn keyword_kind(self) -> Option<TokenKind> {
        Some(match self {
            ContextualKeyword::Allows => TokenKind::KwAllows,
            ContextualKeyword::Async => TokenKind::KwAsync,
            ContextualKeyword::Await => TokenKind::KwAwait,
            ContextualKeyword::Extension => TokenKind::KwExtension,
            ContextualKeyword::File => TokenKind::KwFile,
            ContextualKeyword::Get => TokenKind::KwGet,
            ContextualKeyword::Global => TokenKind::KwGlobal,
            ContextualKeyword::Init => TokenKind::KwInit,
            ContextualKeyword::Partial => TokenKind::KwPartial,
            ContextualKeyword::Record => TokenKind::KwRecord,
            ContextualKeyword::Required => TokenKind::KwRequired,
            ContextualKeyword::Scoped => TokenKind::KwScoped,
            ContextualKeyword::Set => TokenKind::KwSet,
            ContextualKeyword::When => TokenKind::KwWhen,
            ContextualKeyword::Where => TokenKind::KwWhere,
            ContextualKeyword::With => TokenKind::KwWith,
            ContextualKeyword::Yield => TokenKind::KwYield,
            ContextualKeyword::Notnull | ContextualKeyword::Unmanaged | ContextualKeyword::Var => {
                return None
            }
        })
    }

    pub fn from_text(text: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kw| kw.text() == text)
    }
}

impl fmt::Display for ContextualKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_fits_two_words() {
        assert!(TokenKind::COUNT <= 256);
        assert_eq!(TokenKind::COUNT, TokenKind::Eof.index() + 1);
    }

    #[test]
    fn keyword_ranges_are_disjoint() {
        assert!(TokenKind::KwClass.is_reserved_keyword());
        assert!(!TokenKind::KwClass.is_contextual_keyword());
        assert!(TokenKind::KwExtension.is_contextual_keyword());
        assert!(!TokenKind::KwExtension.is_reserved_keyword());
        assert!(TokenKind::KwYield.is_keyword());
        assert!(!TokenKind::LBrace.is_keyword());
        assert!(TokenKind::LBrace.is_punctuation_or_operator());
        assert!(TokenKind::UnsignedShrEq.is_punctuation_or_operator());
        assert!(!TokenKind::Ident.is_punctuation_or_operator());
    }

    #[test]
    fn fixed_text_covers_every_keyword_and_operator() {
        for (idx, kind) in ALL_FIXED.iter().enumerate() {
            assert_eq!(kind.index(), idx);
            assert!(kind.fixed_text().is_some(), "{kind:?} has no text");
        }
        assert_eq!(TokenKind::Ident.fixed_text(), None);
        assert_eq!(TokenKind::Eof.fixed_text(), None);
    }

    #[test]
    fn contextual_keywords_round_trip_through_text() {
        for &kw in ContextualKeyword::ALL {
            assert_eq!(ContextualKeyword::from_text(kw.text()), Some(kw));
            if let Some(kind) = kw.keyword_kind() {
                assert_eq!(kind.fixed_text(), Some(kw.text()));
                assert!(kind.is_contextual_keyword());
            }
        }
        assert_eq!(ContextualKeyword::from_text("class"), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(TokenKind::Semicolon.to_string(), ";");
        assert_eq!(TokenKind::Ident.to_string(), "identifier");
        assert_eq!(TokenKind::Eof.to_string(), "end of file");
    }

    // Every kind with fixed text, in declaration order.
    #[allow(clippy::enum_glob_use)]
    const ALL_FIXED: [TokenKind; TokenKind::UnsignedShrEq as usize + 1] = {
        use TokenKind::*;
        [
            KwAbstract, KwAs, KwBase, KwBool, KwBreak, KwByte, KwCase, KwCatch, KwChar,
            KwChecked, KwClass, KwConst, KwContinue, KwDecimal, KwDefault, KwDelegate, KwDo,
            KwDouble, KwElse, KwEnum, KwEvent, KwExplicit, KwExtern, KwFalse, KwFinally,
            KwFloat, KwFor, KwForeach, KwGoto, KwIf, KwImplicit, KwIn, KwInt, KwInterface,
            KwInternal, KwIs, KwLock, KwLong, KwNamespace, KwNew, KwNull, KwObject,
            KwOperator, KwOut, KwOverride, KwParams, KwPrivate, KwProtected, KwPublic,
            KwReadonly, KwRef, KwReturn, KwSbyte, KwSealed, KwShort, KwSizeof, KwStatic,
            KwString, KwStruct, KwSwitch, KwThis, KwThrow, KwTrue, KwTry, KwTypeof, KwUint,
            KwUlong, KwUnchecked, KwUnsafe, KwUshort, KwUsing, KwVirtual, KwVoid, KwVolatile,
            KwWhile, KwAllows, KwAsync, KwAwait, KwExtension, KwFile, KwGet, KwGlobal, KwInit,
            KwPartial, KwRecord, KwRequired, KwScoped, KwSet, KwWhen, KwWhere, KwWith,
            KwYield, LBrace, RBrace, LParen, RParen, LBracket, RBracket, Dot, DotDot, Comma,
            Colon, DoubleColon, Semicolon, Question, DoubleQuestion, FatArrow, Plus, Minus,
            Star, Slash, Percent, Amp, Pipe, Caret, Bang, Tilde, Eq, Lt, Gt, PlusPlus,
            MinusMinus, AmpAmp, PipePipe, EqEq, NotEq, LtEq, GtEq, Shl, PlusEq, MinusEq,
            StarEq, SlashEq, PercentEq, AmpEq, PipeEq, CaretEq, ShlEq, DoubleQuestionEq, Shr,
            ShrEq, UnsignedShr, UnsignedShrEq,
        ]
    };
}
