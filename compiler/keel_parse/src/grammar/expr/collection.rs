//! Collection expressions: `[a, ..b, with(c)]`.

use keel_ir::{ContextualKeyword, Feature, SyntaxKind, TokenKind};
use keel_syntax::{NodeBuilder, SyntaxNode};

use crate::recovery::{ListRules, EXPRESSION_START};
use crate::Parser;

impl Parser {
    pub(crate) fn collection_expression(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::CollectionExpression);
        let open = self.bump();
        b.token(self.check_feature(Feature::CollectionExpressions, open));
        let rules = ListRules::closed_by(TokenKind::RBracket).trailing();
        self.separated_list(
            &mut b,
            &rules,
            |p| p.at_set(EXPRESSION_START),
            Parser::collection_element,
        );
        b.token(self.expect(TokenKind::RBracket));
        b.finish()
    }

    fn collection_element(&mut self) -> SyntaxNode {
        if self.at(TokenKind::DotDot) {
            let mut b = NodeBuilder::new(SyntaxKind::SpreadElement);
            b.token(self.bump());
            b.node(self.expression());
            return b.finish();
        }
        if self.at_with_element() {
            let mut b = NodeBuilder::new(SyntaxKind::WithElement);
            b.token(self.bump_contextual(ContextualKeyword::With));
            b.node(self.argument_list());
            return b.finish();
        }
        let mut b = NodeBuilder::new(SyntaxKind::ExpressionElement);
        b.node(self.expression());
        b.finish()
    }

    /// `with(` opening collection arguments. Older versions read it as an
    /// ordinary invocation of something named `with`.
    fn at_with_element(&self) -> bool {
        self.supports(Feature::CollectionWithElement)
            && self.at_contextual(ContextualKeyword::With)
            && self.peek_kind(1) == TokenKind::LParen
    }
}
