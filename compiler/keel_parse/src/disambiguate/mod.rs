//! Lookahead predicates for the grammar's ambiguous spots.
//!
//! Every function here is a pure scan over token offsets relative to the
//! current token: nothing is consumed and no diagnostic is produced. Scans
//! are bounded by the matching close token or the end of input, and each
//! returns a definite answer. Type scans also stop at a nesting limit.

use keel_ir::{ContextualKeyword, TokenKind};
use keel_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::recovery::{TokenSet, EXPRESSION_START, LITERALS, MODIFIERS, PREDEFINED_TYPES, TYPE_KEYWORDS};
use crate::Parser;

/// Type scans give up past this many nested type arguments, tuple
/// elements or `ref`s.
const MAX_SCAN_DEPTH: usize = 256;

/// Tokens after a type argument list that confirm a generic name.
const GENERIC_FOLLOW: TokenSet = TokenSet::of(&[
    TokenKind::LParen,
    TokenKind::RParen,
    TokenKind::RBracket,
    TokenKind::RBrace,
    TokenKind::Colon,
    TokenKind::Semicolon,
    TokenKind::Comma,
    TokenKind::Dot,
    TokenKind::Question,
    TokenKind::EqEq,
    TokenKind::NotEq,
    TokenKind::Pipe,
    TokenKind::Caret,
    TokenKind::AmpAmp,
    TokenKind::PipePipe,
    TokenKind::Amp,
    TokenKind::LBracket,
    TokenKind::FatArrow,
    TokenKind::Eof,
]);

/// Tokens after `(T)` that make it a cast of a named type.
const CAST_FOLLOW: TokenSet = LITERALS.union(PREDEFINED_TYPES).union(TokenSet::of(&[
    TokenKind::Ident,
    TokenKind::LParen,
    TokenKind::KwThis,
    TokenKind::KwBase,
    TokenKind::KwNew,
    TokenKind::KwTypeof,
    TokenKind::KwDefault,
    TokenKind::KwSizeof,
    TokenKind::KwChecked,
    TokenKind::KwUnchecked,
    TokenKind::Bang,
    TokenKind::Tilde,
]));

/// Tokens after `]` that keep a top-level `[...]` an expression.
const BRACKET_EXPRESSION_FOLLOW: TokenSet = TokenSet::of(&[
    TokenKind::Semicolon,
    TokenKind::Dot,
    TokenKind::DotDot,
    TokenKind::Question,
    TokenKind::DoubleQuestion,
    TokenKind::DoubleQuestionEq,
    TokenKind::Comma,
    TokenKind::LParen,
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
    TokenKind::Eof,
]);

/// What a `(` at expression start opens.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ParenShape {
    Lambda,
    Tuple,
    Cast,
    Parenthesized,
}

/// What a statement beginning with a type-like token declares.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum LocalShape {
    Variable,
    Function,
}

impl Parser {
    #[inline]
    fn kind_at(&self, offset: usize) -> TokenKind {
        self.cursor.peek_kind(offset)
    }

    /// Offset of the closer paired with the opener at `offset`. `None` when
    /// input ends first or the brackets do not pair.
    #[inline]
    pub(crate) fn matching_close(&self, offset: usize) -> Option<usize> {
        self.cursor.matching_close(offset)
    }

    /// Scan a type starting at `offset`; returns the offset just past it.
    ///
    /// A rank holding sizes (`int[2, 3] a`) is part of the type only when a
    /// name follows it.
    pub(crate) fn scan_type(&self, offset: usize) -> Option<usize> {
        self.scan_type_at(offset, 0)
    }

    fn scan_type_at(&self, offset: usize, depth: usize) -> Option<usize> {
        if depth > MAX_SCAN_DEPTH {
            debug!(offset, "type scan nested too deeply");
            return None;
        }
        ensure_sufficient_stack(|| {
            let mut at = match self.kind_at(offset) {
                kind if PREDEFINED_TYPES.contains(kind) => offset + 1,
                TokenKind::Ident => self.scan_name(offset, depth)?,
                TokenKind::LParen => self.scan_tuple_type(offset, depth)?,
                TokenKind::KwRef => {
                    let inner = if self.kind_at(offset + 1) == TokenKind::KwReadonly {
                        offset + 2
                    } else {
                        offset + 1
                    };
                    return self.scan_type_at(inner, depth + 1);
                }
                _ => return None,
            };
            let mut sized_rank = None;
            loop {
                match self.kind_at(at) {
                    TokenKind::Question => at += 1,
                    TokenKind::LBracket => {
                        let mut inner = at + 1;
                        while self.kind_at(inner) == TokenKind::Comma {
                            inner += 1;
                        }
                        if self.kind_at(inner) == TokenKind::RBracket {
                            at = inner + 1;
                            continue;
                        }
                        let Some(close) = self.matching_close(at) else {
                            return Some(sized_rank.unwrap_or(at));
                        };
                        sized_rank.get_or_insert(at);
                        at = close + 1;
                    }
                    kind => {
                        return match sized_rank {
                            Some(rank) if kind != TokenKind::Ident => Some(rank),
                            _ => Some(at),
                        };
                    }
                }
            }
        })
    }

    /// `A`, `A<T>`, `A.B<C>.D`, `global::A`.
    fn scan_name(&self, offset: usize, depth: usize) -> Option<usize> {
        let mut at = offset;
        if self.kind_at(at) != TokenKind::Ident {
            return None;
        }
        at += 1;
        if self.kind_at(at) == TokenKind::DoubleColon {
            if self.kind_at(at + 1) != TokenKind::Ident {
                return None;
            }
            at += 2;
        }
        loop {
            if self.kind_at(at) == TokenKind::Lt {
                at = self.scan_arguments_at(at, depth + 1)?;
            }
            if self.kind_at(at) == TokenKind::Dot && self.kind_at(at + 1) == TokenKind::Ident {
                at += 2;
            } else {
                return Some(at);
            }
        }
    }

    /// `<T, U>` at `offset`; returns the offset past `>`.
    pub(crate) fn scan_type_arguments(&self, offset: usize) -> Option<usize> {
        self.scan_arguments_at(offset, 0)
    }

    fn scan_arguments_at(&self, offset: usize, depth: usize) -> Option<usize> {
        debug_assert_eq!(self.kind_at(offset), TokenKind::Lt);
        let mut at = offset + 1;
        loop {
            at = self.scan_type_at(at, depth + 1)?;
            match self.kind_at(at) {
                TokenKind::Comma => at += 1,
                TokenKind::Gt => return Some(at + 1),
                _ => return None,
            }
        }
    }

    /// `(T a, U b)`: at least two elements, names optional.
    fn scan_tuple_type(&self, offset: usize, depth: usize) -> Option<usize> {
        let close = self.matching_close(offset)?;
        if !self.has_top_level_comma(offset + 1, close) {
            return None;
        }
        let mut at = offset + 1;
        let mut elements = 0;
        loop {
            at = self.scan_type_at(at, depth + 1)?;
            if self.kind_at(at) == TokenKind::Ident {
                at += 1;
            }
            elements += 1;
            match self.kind_at(at) {
                TokenKind::Comma => at += 1,
                TokenKind::RParen if elements > 1 => return Some(at + 1),
                _ => return None,
            }
        }
    }

    /// Whether the identifier at `offset` followed by `<` is a generic
    /// name. The argument list must close and be followed by a token
    /// consistent with a type; in declarations an identifier also counts.
    pub(crate) fn is_generic_name_at(&self, offset: usize, in_declaration: bool) -> bool {
        if self.kind_at(offset + 1) != TokenKind::Lt {
            return false;
        }
        let Some(after) = self.scan_type_arguments(offset + 1) else {
            return false;
        };
        let follow = self.kind_at(after);
        GENERIC_FOLLOW.contains(follow) || (in_declaration && follow == TokenKind::Ident)
    }

    /// Classify the `(` at the current token.
    pub(crate) fn paren_shape(&self) -> ParenShape {
        debug_assert_eq!(self.current_kind(), TokenKind::LParen);
        let Some(close) = self.matching_close(0) else {
            return ParenShape::Parenthesized;
        };
        let after = self.kind_at(close + 1);
        let shape = if after == TokenKind::FatArrow {
            ParenShape::Lambda
        } else if self.has_top_level_comma(1, close) {
            ParenShape::Tuple
        } else if self.scan_type(1) == Some(close) {
            let simple = close == 2 && PREDEFINED_TYPES.contains(self.kind_at(1));
            let decorated = matches!(self.kind_at(close - 1), TokenKind::Question | TokenKind::RBracket);
            let cast = CAST_FOLLOW.contains(after)
                || ((simple || decorated) && EXPRESSION_START.contains(after));
            if cast {
                ParenShape::Cast
            } else {
                ParenShape::Parenthesized
            }
        } else {
            ParenShape::Parenthesized
        };
        debug!(?shape, "paren shape");
        shape
    }

    /// A comma in `from..to` outside any nested bracket pair.
    fn has_top_level_comma(&self, from: usize, to: usize) -> bool {
        let mut at = from;
        while at < to {
            match self.kind_at(at) {
                TokenKind::Comma => return true,
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => {
                    at = self.matching_close(at).map_or(at + 1, |close| close + 1);
                }
                _ => at += 1,
            }
        }
        false
    }

    /// A statement starting at `offset` that reads as a declaration:
    /// a type followed by an identifier.
    pub(crate) fn local_shape_at(&self, offset: usize) -> Option<LocalShape> {
        let after_type = self.scan_type(offset)?;
        if self.kind_at(after_type) != TokenKind::Ident {
            return None;
        }
        match self.kind_at(after_type + 1) {
            TokenKind::LParen | TokenKind::Lt => Some(LocalShape::Function),
            _ => Some(LocalShape::Variable),
        }
    }

    /// Whether the contextual word at `offset` acts as a modifier: it must
    /// be followed by another modifier, a type introducer, or a type and a
    /// member name.
    pub(crate) fn is_contextual_modifier_at(&self, offset: usize) -> bool {
        let token = self.cursor.peek(offset);
        if token.kind() != TokenKind::Ident {
            return false;
        }
        let Some(keyword) = token.contextual_keyword() else {
            return false;
        };
        if !matches!(
            keyword,
            ContextualKeyword::Partial
                | ContextualKeyword::Async
                | ContextualKeyword::Required
                | ContextualKeyword::File
        ) {
            return false;
        }
        let next = self.cursor.peek(offset + 1);
        let next_kind = next.kind();
        if MODIFIERS.contains(next_kind)
            || TYPE_KEYWORDS.contains(next_kind)
            || next_kind == TokenKind::KwEvent
        {
            return true;
        }
        if next_kind == TokenKind::Ident
            && matches!(
                next.contextual_keyword(),
                Some(
                    ContextualKeyword::Partial
                        | ContextualKeyword::Async
                        | ContextualKeyword::Required
                        | ContextualKeyword::File
                        | ContextualKeyword::Record
                )
            )
            && matches!(self.kind_at(offset + 2), TokenKind::Ident | TokenKind::KwClass | TokenKind::KwStruct)
        {
            return true;
        }
        self.scan_type(offset + 1).is_some_and(|after| {
            matches!(
                self.kind_at(after),
                TokenKind::Ident | TokenKind::KwThis | TokenKind::KwOperator
            )
        })
    }

    /// Offset past a run of modifiers starting at `offset`.
    pub(crate) fn scan_modifiers(&self, offset: usize) -> usize {
        let mut at = offset;
        while MODIFIERS.contains(self.kind_at(at)) || self.is_contextual_modifier_at(at) {
            at += 1;
        }
        at
    }

    /// At top level, whether the `[` at the current token opens an
    /// expression (a collection expression statement) rather than
    /// attribute lists.
    pub(crate) fn bracket_starts_expression(&self) -> bool {
        let Some(close) = self.matching_close(0) else {
            return false;
        };
        BRACKET_EXPRESSION_FOLLOW.contains(self.kind_at(close + 1))
    }

    /// `record` introducing a record declaration: `record Name`,
    /// `record class Name`, `record struct Name`.
    pub(crate) fn is_record_at(&self, offset: usize) -> bool {
        if self.cursor.peek(offset).contextual_keyword() != Some(ContextualKeyword::Record)
            || self.kind_at(offset) != TokenKind::Ident
        {
            return false;
        }
        match self.kind_at(offset + 1) {
            TokenKind::Ident => true,
            TokenKind::KwClass | TokenKind::KwStruct => self.kind_at(offset + 2) == TokenKind::Ident,
            _ => false,
        }
    }

    /// `where T :` opening a constraint clause.
    pub(crate) fn at_where_clause(&self) -> bool {
        self.at_contextual(ContextualKeyword::Where)
            && self.kind_at(1) == TokenKind::Ident
            && self.kind_at(2) == TokenKind::Colon
    }
}

#[cfg(test)]
mod tests;
