//! Operator matching helpers.
//!
//! The lexer only produces `>` and `>=`; shift operators are composed here
//! from adjacent tokens so that `List<List<int>>` never needs re-lexing.

use keel_ir::{Feature, TokenKind};
use keel_syntax::SyntaxToken;

use crate::Parser;

/// Binding strength of binary operators, weakest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    Assignment,
    Conditional,
    Coalesce,
    ConditionalOr,
    ConditionalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Range,
    Unary,
}

impl Precedence {
    /// The next tighter level; right operands of left-associative
    /// operators parse at this level.
    pub(crate) fn tighter(self) -> Precedence {
        match self {
            Precedence::Assignment => Precedence::Conditional,
            Precedence::Conditional => Precedence::Coalesce,
            Precedence::Coalesce => Precedence::ConditionalOr,
            Precedence::ConditionalOr => Precedence::ConditionalAnd,
            Precedence::ConditionalAnd => Precedence::BitwiseOr,
            Precedence::BitwiseOr => Precedence::BitwiseXor,
            Precedence::BitwiseXor => Precedence::BitwiseAnd,
            Precedence::BitwiseAnd => Precedence::Equality,
            Precedence::Equality => Precedence::Relational,
            Precedence::Relational => Precedence::Shift,
            Precedence::Shift => Precedence::Additive,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative => Precedence::Range,
            Precedence::Range | Precedence::Unary => Precedence::Unary,
        }
    }
}

/// A binary operator found at the current token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct BinaryOperator {
    pub kind: TokenKind,
    pub precedence: Precedence,
    /// Source tokens making up the operator (more than one for composed
    /// shifts).
    pub tokens: usize,
}

impl Parser {
    /// The binary, assignment or conditional operator at the current token.
    pub(crate) fn match_binary_op(&self) -> Option<BinaryOperator> {
        let kind = self.current_kind();
        if kind == TokenKind::Gt {
            return Some(self.match_greater_than_op());
        }
        let precedence = match kind {
            kind if kind.is_assignment_operator() => Precedence::Assignment,
            TokenKind::Question => Precedence::Conditional,
            TokenKind::DoubleQuestion => Precedence::Coalesce,
            TokenKind::PipePipe => Precedence::ConditionalOr,
            TokenKind::AmpAmp => Precedence::ConditionalAnd,
            TokenKind::Pipe => Precedence::BitwiseOr,
            TokenKind::Caret => Precedence::BitwiseXor,
            TokenKind::Amp => Precedence::BitwiseAnd,
            TokenKind::EqEq | TokenKind::NotEq => Precedence::Equality,
            TokenKind::Lt
            | TokenKind::LtEq
            | TokenKind::GtEq
            | TokenKind::KwIs
            | TokenKind::KwAs => Precedence::Relational,
            TokenKind::Shl => Precedence::Shift,
            TokenKind::Plus | TokenKind::Minus => Precedence::Additive,
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Precedence::Multiplicative,
            TokenKind::DotDot => Precedence::Range,
            _ => return None,
        };
        Some(BinaryOperator {
            kind,
            precedence,
            tokens: 1,
        })
    }

    /// `>`, `>>`, `>>=`, `>>>`, `>>>=` from adjacent `>`/`>=` tokens.
    fn match_greater_than_op(&self) -> BinaryOperator {
        let op = |kind, precedence, tokens| BinaryOperator {
            kind,
            precedence,
            tokens,
        };
        if !self.cursor.adjacent(0) {
            return op(TokenKind::Gt, Precedence::Relational, 1);
        }
        match self.peek_kind(1) {
            TokenKind::GtEq => op(TokenKind::ShrEq, Precedence::Assignment, 2),
            TokenKind::Gt if self.cursor.adjacent(1) => match self.peek_kind(2) {
                TokenKind::Gt => op(TokenKind::UnsignedShr, Precedence::Shift, 3),
                TokenKind::GtEq => op(TokenKind::UnsignedShrEq, Precedence::Assignment, 3),
                _ => op(TokenKind::Shr, Precedence::Shift, 2),
            },
            TokenKind::Gt => op(TokenKind::Shr, Precedence::Shift, 2),
            _ => op(TokenKind::Gt, Precedence::Relational, 1),
        }
    }

    /// Consume `op`, composing its source tokens into one.
    pub(crate) fn bump_operator(&mut self, op: BinaryOperator) -> SyntaxToken {
        let mut token = self.bump();
        for _ in 1..op.tokens {
            let next = self.cursor.advance();
            token = token.compose(next, op.kind);
        }
        match op.kind {
            TokenKind::UnsignedShr | TokenKind::UnsignedShrEq => {
                self.check_feature(Feature::UnsignedRightShift, token)
            }
            _ => token,
        }
    }

    pub(crate) fn match_prefix_op(&self) -> Option<TokenKind> {
        match self.current_kind() {
            kind @ (TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Bang
            | TokenKind::Tilde
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus
            | TokenKind::Caret
            | TokenKind::Amp
            | TokenKind::Star) => Some(kind),
            _ => None,
        }
    }
}
