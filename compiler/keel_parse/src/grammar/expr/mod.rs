//! Expression parsing.
//!
//! Binary operators use precedence climbing over [`Precedence`]: each loop
//! iteration takes the operator at the current token if it binds at least
//! as tightly as the caller's minimum, then parses its right operand one
//! level tighter (or at the same level for the right-associative
//! assignment and `??`).
//!
//! # Module Structure
//!
//! - `operators.rs`: operator matching and `>` composition
//! - `primary.rs`: literals, names, parentheses, `new`, `typeof`, ...
//! - `postfix.rs`: member access, invocation, element access, arguments
//! - `lambda.rs`: simple and parenthesized lambdas
//! - `collection.rs`: collection expressions and their elements

mod collection;
mod lambda;
mod operators;
mod postfix;
mod primary;

use keel_ir::{ContextualKeyword, SyntaxKind, TokenKind};
use keel_syntax::{NodeBuilder, SyntaxNode};
use keel_stack::ensure_sufficient_stack;

use crate::disambiguate::ParenShape;
use crate::grammar::ty::TypeMode;
use crate::recovery::EXPRESSION_START;
use crate::Parser;

use operators::Precedence;

impl Parser {
    /// A full expression, assignment included.
    pub(crate) fn expression(&mut self) -> SyntaxNode {
        ensure_sufficient_stack(|| self.binary_expression(Precedence::Assignment))
    }

    /// Operators binding at least as tightly as `min`.
    fn binary_expression(&mut self, min: Precedence) -> SyntaxNode {
        let mut left = self.unary_expression();
        while let Some(op) = self.match_binary_op() {
            if op.precedence < min {
                break;
            }
            left = match op.kind {
                TokenKind::Question => self.conditional_rest(left),
                TokenKind::KwIs | TokenKind::KwAs => self.type_test_rest(left),
                TokenKind::DotDot => self.range_rest(Some(left)),
                _ => {
                    let (kind, right_min) = match op.precedence {
                        Precedence::Assignment => {
                            (SyntaxKind::AssignmentExpression, Precedence::Assignment)
                        }
                        Precedence::Coalesce => (SyntaxKind::BinaryExpression, Precedence::Coalesce),
                        other => (SyntaxKind::BinaryExpression, other.tighter()),
                    };
                    let mut b = NodeBuilder::new(kind);
                    b.node(left);
                    b.token(self.bump_operator(op));
                    b.node(self.binary_expression(right_min));
                    b.finish()
                }
            };
        }
        left
    }

    /// `cond ? a : b`, after `cond`.
    fn conditional_rest(&mut self, condition: SyntaxNode) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::ConditionalExpression);
        b.node(condition);
        b.token(self.bump());
        b.node(self.expression());
        b.token(self.expect(TokenKind::Colon));
        b.node(self.expression());
        b.finish()
    }

    /// `x is T` / `x as T`, after `x`.
    fn type_test_rest(&mut self, operand: SyntaxNode) -> SyntaxNode {
        let kind = if self.at(TokenKind::KwIs) {
            SyntaxKind::IsExpression
        } else {
            SyntaxKind::AsExpression
        };
        let mut b = NodeBuilder::new(kind);
        b.node(operand);
        b.token(self.bump());
        b.node(self.type_in(TypeMode::Expression));
        b.finish()
    }

    /// `a..b`, `a..`, `..b` and `..`. Both operands are optional.
    fn range_rest(&mut self, start: Option<SyntaxNode>) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::RangeExpression);
        b.opt_node(start);
        b.token(self.bump());
        if self.at_set(EXPRESSION_START) && !self.at(TokenKind::DotDot) {
            b.node(self.unary_expression());
        }
        b.finish()
    }

    /// Prefix operators, casts, `await`, `throw`, then a primary with its
    /// postfix chain.
    pub(crate) fn unary_expression(&mut self) -> SyntaxNode {
        ensure_sufficient_stack(|| {
            if self.match_prefix_op().is_some() {
                let mut b = NodeBuilder::new(SyntaxKind::PrefixUnaryExpression);
                b.token(self.bump());
                b.node(self.unary_expression());
                return b.finish();
            }
            match self.current_kind() {
                TokenKind::DotDot => self.range_rest(None),
                TokenKind::KwThrow => {
                    let mut b = NodeBuilder::new(SyntaxKind::ThrowExpression);
                    b.token(self.bump());
                    b.node(self.binary_expression(Precedence::Coalesce));
                    b.finish()
                }
                TokenKind::LParen if self.paren_shape() == ParenShape::Cast => self.cast_expression(),
                TokenKind::Ident if self.at_await_operator() => {
                    let mut b = NodeBuilder::new(SyntaxKind::AwaitExpression);
                    b.token(self.bump_contextual(ContextualKeyword::Await));
                    b.node(self.unary_expression());
                    b.finish()
                }
                _ => {
                    let primary = self.primary_expression();
                    self.postfix_expression(primary)
                }
            }
        })
    }

    /// `await` is the operator inside async code and top-level statements,
    /// and only when an operand follows.
    pub(crate) fn at_await_operator(&self) -> bool {
        self.context.allows_await()
            && self.at_contextual(ContextualKeyword::Await)
            && EXPRESSION_START.contains(self.peek_kind(1))
    }

    /// `(T)x`.
    fn cast_expression(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::CastExpression);
        b.token(self.bump());
        b.node(self.type_in(TypeMode::Expression));
        b.token(self.expect(TokenKind::RParen));
        b.node(self.unary_expression());
        b.finish()
    }
}

#[cfg(test)]
mod tests;
