//! Error recovery for the parser.
//!
//! Provides token sets, the skipped-token machinery and list recovery.
//! Uses bitset-based O(1) membership testing inspired by Go's parser.
//!
//! Nothing is ever thrown away: a token the grammar cannot place is moved
//! into the pending skipped list and attached as [`Trivia::Skipped`] to the
//! next token the parser places, so the round trip stays lossless.
//!
//! [`Trivia::Skipped`]: keel_syntax::Trivia::Skipped

use keel_diagnostic::{Diagnostic, ErrorCode};
use keel_ir::TokenKind;
use keel_syntax::{NodeBuilder, SyntaxNode};
use tracing::debug;

use crate::Parser;

// TokenSet uses two u128 words; every kind index must fit in 0..256.
const _: () = assert!(
    TokenKind::COUNT <= 256,
    "TokenSet uses a 256-bit bitset; all kind indices must be < 256"
);

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// Bit `i` of the 256-bit set corresponds to the kind whose
/// [`TokenKind::index`] is `i`.
///
/// ```ignore
/// const CLOSERS: TokenSet = TokenSet::new()
///     .with(TokenKind::RParen)
///     .with(TokenKind::RBracket);
///
/// if CLOSERS.contains(TokenKind::RParen) {
///     // O(1) lookup
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet {
    lo: u128,
    hi: u128,
}

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        TokenSet { lo: 0, hi: 0 }
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        let idx = kind.index();
        if idx < 128 {
            TokenSet {
                lo: self.lo | (1u128 << idx),
                hi: self.hi,
            }
        } else {
            TokenSet {
                lo: self.lo,
                hi: self.hi | (1u128 << (idx - 128)),
            }
        }
    }

    /// Build a set from a slice of kinds.
    #[must_use]
    pub const fn of(kinds: &[TokenKind]) -> Self {
        let mut set = TokenSet::new();
        let mut i = 0;
        while i < kinds.len() {
            set = set.with(kinds[i]);
            i += 1;
        }
        set
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        TokenSet {
            lo: self.lo | other.lo,
            hi: self.hi | other.hi,
        }
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        let idx = kind.index();
        if idx < 128 {
            self.lo & (1u128 << idx) != 0
        } else {
            self.hi & (1u128 << (idx - 128)) != 0
        }
    }
}

/// Modifier keywords that are always reserved. The contextual modifiers
/// (`partial`, `async`, `required`, `file`) are recognised separately.
pub const MODIFIERS: TokenSet = TokenSet::of(&[
    TokenKind::KwPublic,
    TokenKind::KwPrivate,
    TokenKind::KwProtected,
    TokenKind::KwInternal,
    TokenKind::KwStatic,
    TokenKind::KwReadonly,
    TokenKind::KwConst,
    TokenKind::KwSealed,
    TokenKind::KwAbstract,
    TokenKind::KwVirtual,
    TokenKind::KwOverride,
    TokenKind::KwExtern,
    TokenKind::KwUnsafe,
    TokenKind::KwVolatile,
    TokenKind::KwNew,
    TokenKind::KwExplicit,
    TokenKind::KwImplicit,
]);

/// Keywords that introduce a type declaration.
pub const TYPE_KEYWORDS: TokenSet = TokenSet::of(&[
    TokenKind::KwClass,
    TokenKind::KwStruct,
    TokenKind::KwInterface,
    TokenKind::KwEnum,
    TokenKind::KwDelegate,
]);

pub const PREDEFINED_TYPES: TokenSet = TokenSet::of(&[
    TokenKind::KwBool,
    TokenKind::KwByte,
    TokenKind::KwSbyte,
    TokenKind::KwShort,
    TokenKind::KwUshort,
    TokenKind::KwInt,
    TokenKind::KwUint,
    TokenKind::KwLong,
    TokenKind::KwUlong,
    TokenKind::KwChar,
    TokenKind::KwFloat,
    TokenKind::KwDouble,
    TokenKind::KwDecimal,
    TokenKind::KwString,
    TokenKind::KwObject,
    TokenKind::KwVoid,
]);

/// Tokens that can begin a type.
pub const TYPE_START: TokenSet = PREDEFINED_TYPES.union(TokenSet::of(&[
    TokenKind::Ident,
    TokenKind::LParen,
    TokenKind::KwRef,
]));

pub const LITERALS: TokenSet = TokenSet::of(&[
    TokenKind::IntLiteral,
    TokenKind::RealLiteral,
    TokenKind::CharLiteral,
    TokenKind::StringLiteral,
    TokenKind::KwTrue,
    TokenKind::KwFalse,
    TokenKind::KwNull,
]);

/// Prefix operators.
pub const PREFIX_OPERATORS: TokenSet = TokenSet::of(&[
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Bang,
    TokenKind::Tilde,
    TokenKind::PlusPlus,
    TokenKind::MinusMinus,
    TokenKind::Caret,
    TokenKind::Amp,
    TokenKind::Star,
]);

/// Tokens that can begin an expression.
pub const EXPRESSION_START: TokenSet = LITERALS
    .union(PREDEFINED_TYPES)
    .union(PREFIX_OPERATORS)
    .union(TokenSet::of(&[
        TokenKind::Ident,
        TokenKind::LParen,
        TokenKind::LBracket,
        TokenKind::DotDot,
        TokenKind::KwThis,
        TokenKind::KwBase,
        TokenKind::KwNew,
        TokenKind::KwTypeof,
        TokenKind::KwDefault,
        TokenKind::KwSizeof,
        TokenKind::KwChecked,
        TokenKind::KwUnchecked,
        TokenKind::KwThrow,
    ]));

/// Keywords that begin a statement of their own.
pub const STATEMENT_KEYWORDS: TokenSet = TokenSet::of(&[
    TokenKind::KwIf,
    TokenKind::KwWhile,
    TokenKind::KwDo,
    TokenKind::KwFor,
    TokenKind::KwForeach,
    TokenKind::KwReturn,
    TokenKind::KwBreak,
    TokenKind::KwContinue,
    TokenKind::KwThrow,
    TokenKind::KwTry,
    TokenKind::KwSwitch,
    TokenKind::KwGoto,
    TokenKind::KwLock,
    TokenKind::KwUsing,
    TokenKind::KwUnsafe,
    TokenKind::KwChecked,
    TokenKind::KwUnchecked,
]);

pub const STATEMENT_START: TokenSet = EXPRESSION_START
    .union(STATEMENT_KEYWORDS)
    .union(MODIFIERS)
    .union(TokenSet::of(&[TokenKind::LBrace, TokenKind::Semicolon, TokenKind::KwRef]));

/// Tokens that can begin a member of a type body, besides names.
pub const MEMBER_START: TokenSet = MODIFIERS
    .union(TYPE_KEYWORDS)
    .union(TYPE_START)
    .union(TokenSet::of(&[
        TokenKind::LBracket,
        TokenKind::Tilde,
        TokenKind::KwEvent,
    ]));

/// Tokens after an operand that continue the expression.
pub const EXPRESSION_CONTINUATION: TokenSet = TokenSet::of(&[
    TokenKind::Dot,
    TokenKind::DotDot,
    TokenKind::Question,
    TokenKind::DoubleQuestion,
    TokenKind::DoubleQuestionEq,
    TokenKind::FatArrow,
    TokenKind::Semicolon,
    TokenKind::Comma,
    TokenKind::LBracket,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Star,
    TokenKind::Slash,
    TokenKind::Percent,
    TokenKind::Amp,
    TokenKind::Pipe,
    TokenKind::Caret,
    TokenKind::Eq,
    TokenKind::Lt,
    TokenKind::Gt,
    TokenKind::PlusPlus,
    TokenKind::MinusMinus,
    TokenKind::AmpAmp,
    TokenKind::PipePipe,
    TokenKind::EqEq,
    TokenKind::NotEq,
    TokenKind::LtEq,
    TokenKind::GtEq,
    TokenKind::Shl,
    TokenKind::PlusEq,
    TokenKind::MinusEq,
    TokenKind::StarEq,
    TokenKind::SlashEq,
    TokenKind::PercentEq,
    TokenKind::AmpEq,
    TokenKind::PipeEq,
    TokenKind::CaretEq,
    TokenKind::ShlEq,
    TokenKind::KwIs,
    TokenKind::KwAs,
]);

/// Where a production that lost its footing stops.
pub const ANCHORS: TokenSet = TokenSet::of(&[
    TokenKind::RBrace,
    TokenKind::Semicolon,
    TokenKind::Eof,
]);

/// How a separated list ends and recovers.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ListRules {
    /// Tokens that end the list normally. The caller consumes them.
    pub close: TokenSet,
    /// Tokens that abandon the list. `Eof` is always one.
    pub anchors: TokenSet,
    /// A `,` directly before the close token is accepted.
    pub trailing_separator: bool,
    /// The contextual `where` also ends the list (base lists).
    pub stop_at_where: bool,
}

impl ListRules {
    pub(crate) const fn closed_by(close: TokenKind) -> Self {
        ListRules {
            close: TokenSet::new().with(close),
            anchors: ANCHORS,
            trailing_separator: false,
            stop_at_where: false,
        }
    }

    #[must_use]
    pub(crate) const fn trailing(mut self) -> Self {
        self.trailing_separator = true;
        self
    }

    #[must_use]
    pub(crate) const fn anchors(mut self, anchors: TokenSet) -> Self {
        self.anchors = anchors;
        self
    }

    #[must_use]
    pub(crate) const fn until_where(mut self) -> Self {
        self.stop_at_where = true;
        self
    }
}

impl Parser {
    /// Move the current token into the pending skipped list.
    ///
    /// Never called at `Eof`: the end of input belongs to whoever owns the
    /// root.
    pub(crate) fn skip_token(&mut self, diagnostic: Option<Diagnostic>) {
        debug_assert!(!self.cursor.is_at_end(), "skipping past end of input");
        if self.cursor.is_at_end() {
            return;
        }
        let mut token = self.cursor.advance();
        debug!(kind = %token.kind(), text = token.text(), "skip");
        if let Some(diagnostic) = diagnostic {
            token = token.with_diagnostic(diagnostic);
        }
        self.skipped.push(token);
    }

    /// Skip the current token, reporting `code` with the token text as the
    /// argument when the code takes one.
    pub(crate) fn skip_with(&mut self, code: ErrorCode) {
        let current = self.cursor.current();
        let mut diagnostic = Diagnostic::new(code, current.span());
        if code.arity() > 0 {
            diagnostic = diagnostic.with_arg(current.text());
        }
        self.skip_token(Some(diagnostic));
    }

    fn list_ended(&self, rules: &ListRules) -> bool {
        let kind = self.current_kind();
        kind == TokenKind::Eof
            || rules.close.contains(kind)
            || rules.anchors.contains(kind)
            || (rules.stop_at_where && self.at_where_clause())
    }

    /// Parse a comma-separated list into `b`, stopping before the close
    /// token or an anchor.
    ///
    /// After an element, `,` continues and a token that can start an
    /// element gets a missing `,`. Anything else starts a skipped run: its
    /// first token reports `','` expected, the rest are skipped silently
    /// up to the next separator, element start, close token or anchor.
    pub(crate) fn separated_list(
        &mut self,
        b: &mut NodeBuilder,
        rules: &ListRules,
        starts_element: impl Fn(&Self) -> bool,
        mut element: impl FnMut(&mut Self) -> SyntaxNode,
    ) {
        if self.list_ended(rules) {
            return;
        }
        loop {
            let before = self.cursor.position();
            b.node(element(self));

            loop {
                if self.at(TokenKind::Comma) {
                    b.token(self.bump());
                    if rules.trailing_separator && self.list_ended(rules) {
                        return;
                    }
                    break;
                }
                if self.list_ended(rules) {
                    return;
                }
                if starts_element(self) {
                    if self.cursor.position() == before {
                        // The element parser could not use a token it
                        // claims to start with.
                        self.skip_with_expected(TokenKind::Comma);
                        continue;
                    }
                    b.token(self.missing(TokenKind::Comma));
                    break;
                }
                self.skip_with_expected(TokenKind::Comma);
                while !self.at(TokenKind::Comma) && !self.list_ended(rules) && !starts_element(self)
                {
                    self.skip_token(None);
                }
            }
        }
    }

    /// Skip the current token reporting `'<kind>' expected` at it.
    pub(crate) fn skip_with_expected(&mut self, kind: TokenKind) {
        let span = self.cursor.current().span();
        let text = kind.fixed_text().unwrap_or(kind.display_name());
        self.skip_token(Some(Diagnostic::expected(text, span)));
    }
}

#[cfg(test)]
mod tests;
