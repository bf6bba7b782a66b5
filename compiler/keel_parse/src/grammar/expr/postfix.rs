//! Postfix expressions and argument lists.
//!
//! `a.b`, `f(x)`, `a[i]`, `x++`, `x--`, `x!`.

use keel_ir::{SyntaxKind, TokenKind};
use keel_syntax::{NodeBuilder, SyntaxNode};

use crate::disambiguate::LocalShape;
use crate::recovery::{ListRules, EXPRESSION_START};
use crate::Parser;

impl Parser {
    /// Apply postfix operators to `expr` until none follows.
    pub(crate) fn postfix_expression(&mut self, mut expr: SyntaxNode) -> SyntaxNode {
        loop {
            expr = match self.current_kind() {
                TokenKind::Dot => {
                    let mut b = NodeBuilder::new(SyntaxKind::MemberAccessExpression);
                    b.node(expr);
                    b.token(self.bump());
                    b.node(self.simple_name());
                    b.finish()
                }
                TokenKind::LParen => {
                    let mut b = NodeBuilder::new(SyntaxKind::InvocationExpression);
                    b.node(expr);
                    b.node(self.argument_list());
                    b.finish()
                }
                TokenKind::LBracket => {
                    let mut b = NodeBuilder::new(SyntaxKind::ElementAccessExpression);
                    b.node(expr);
                    b.node(self.bracketed_argument_list());
                    b.finish()
                }
                TokenKind::PlusPlus | TokenKind::MinusMinus => self.postfix_operator(expr),
                // Null-forgiving: only when no operand follows.
                TokenKind::Bang if !EXPRESSION_START.contains(self.peek_kind(1)) => {
                    self.postfix_operator(expr)
                }
                _ => return expr,
            };
        }
    }

    fn postfix_operator(&mut self, operand: SyntaxNode) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::PostfixUnaryExpression);
        b.node(operand);
        b.token(self.bump());
        b.finish()
    }

    /// `(a, ref b, name: c)`.
    pub(crate) fn argument_list(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::ArgumentList);
        b.token(self.expect(TokenKind::LParen));
        let rules = ListRules::closed_by(TokenKind::RParen);
        self.separated_list(&mut b, &rules, Parser::at_argument_start, Parser::argument);
        b.token(self.expect(TokenKind::RParen));
        b.finish()
    }

    /// `[a, b]` after an indexed expression.
    pub(crate) fn bracketed_argument_list(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::BracketedArgumentList);
        b.token(self.expect(TokenKind::LBracket));
        let rules = ListRules::closed_by(TokenKind::RBracket);
        self.separated_list(&mut b, &rules, Parser::at_argument_start, Parser::argument);
        b.token(self.expect(TokenKind::RBracket));
        b.finish()
    }

    pub(crate) fn at_argument_start(&self) -> bool {
        self.at_set(EXPRESSION_START)
            || matches!(
                self.current_kind(),
                TokenKind::KwRef | TokenKind::KwOut | TokenKind::KwIn
            )
    }

    /// An argument: optional `name:`, optional `ref`/`out`/`in`, then an
    /// expression or, after `out`, a declaration (`out var x`).
    pub(crate) fn argument(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::Argument);
        if self.at(TokenKind::Ident) && self.peek_kind(1) == TokenKind::Colon {
            b.token(self.bump());
            b.token(self.bump());
        }
        let by_ref = matches!(
            self.current_kind(),
            TokenKind::KwRef | TokenKind::KwOut | TokenKind::KwIn
        );
        if by_ref {
            b.token(self.bump());
        }
        if by_ref && self.local_shape_at(0) == Some(LocalShape::Variable) {
            let mut declaration = NodeBuilder::new(SyntaxKind::VariableDeclaration);
            declaration.node(self.parse_type());
            let mut declarator = NodeBuilder::new(SyntaxKind::VariableDeclarator);
            declarator.token(self.bump());
            declaration.node(declarator.finish());
            b.node(declaration.finish());
        } else {
            b.node(self.expression());
        }
        b.finish()
    }
}
