//! Lambda expressions: `x => e`, `(a, b) => e`, `async (int a) => { }`.

use keel_ir::{ContextualKeyword, SyntaxKind, TokenKind};
use keel_syntax::{NodeBuilder, SyntaxNode};

use crate::recovery::ListRules;
use crate::Parser;

impl Parser {
    /// Called at `async`, at a parameter identifier followed by `=>`, or
    /// at a `(` whose match is followed by `=>`.
    pub(crate) fn lambda_expression(&mut self) -> SyntaxNode {
        let modifier = self
            .at_contextual(ContextualKeyword::Async)
            .then(|| self.bump_contextual(ContextualKeyword::Async));
        let is_async = modifier.is_some();
        let kind = if self.at(TokenKind::LParen) {
            SyntaxKind::ParenthesizedLambdaExpression
        } else {
            SyntaxKind::SimpleLambdaExpression
        };
        let mut b = NodeBuilder::new(kind);
        if let Some(modifier) = modifier {
            b.token(modifier);
        }
        if kind == SyntaxKind::ParenthesizedLambdaExpression {
            b.node(self.lambda_parameter_list());
        } else {
            let mut parameter = NodeBuilder::new(SyntaxKind::Parameter);
            parameter.token(self.expect_identifier());
            b.node(parameter.finish());
        }
        b.token(self.expect(TokenKind::FatArrow));
        b.node(self.lambda_body(is_async));
        b.finish()
    }

    fn lambda_parameter_list(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::ParameterList);
        b.token(self.bump());
        let rules = ListRules::closed_by(TokenKind::RParen);
        self.separated_list(&mut b, &rules, Parser::at_parameter_start, |p| {
            // Implicitly typed: a bare name.
            if p.at(TokenKind::Ident) && matches!(p.peek_kind(1), TokenKind::Comma | TokenKind::RParen) {
                let mut parameter = NodeBuilder::new(SyntaxKind::Parameter);
                parameter.token(p.bump());
                parameter.finish()
            } else {
                p.parameter()
            }
        });
        b.token(self.expect(TokenKind::RParen));
        b.finish()
    }

    /// A block or an expression. `await` follows the lambda's own
    /// asyncness, not the enclosing code's.
    fn lambda_body(&mut self, is_async: bool) -> SyntaxNode {
        self.in_body(is_async, |p| {
            if p.at(TokenKind::LBrace) {
                p.block()
            } else {
                p.expression()
            }
        })
    }
}
