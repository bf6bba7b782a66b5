//! Attribute lists.
//!
//! Grammar: `"[" [ target ":" ] attribute { "," attribute } "]"` where an
//! attribute is a name with an optional argument list. Arguments may be
//! named (`Name = value`, `name: value`).

use keel_ir::{SyntaxKind, TokenKind};
use keel_syntax::{NodeBuilder, SyntaxNode};

use crate::recovery::{ListRules, EXPRESSION_START};
use crate::Parser;

impl Parser {
    /// Consecutive attribute lists.
    pub(crate) fn attribute_lists(&mut self) -> Vec<SyntaxNode> {
        let mut lists = Vec::new();
        while self.at(TokenKind::LBracket) {
            lists.push(self.attribute_list());
        }
        lists
    }

    pub(crate) fn attribute_list(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::AttributeList);
        b.token(self.bump());
        if self.at_attribute_target() {
            let mut target = NodeBuilder::new(SyntaxKind::AttributeTargetSpecifier);
            target.token(self.bump());
            target.token(self.bump());
            b.node(target.finish());
        }
        let rules = ListRules::closed_by(TokenKind::RBracket).trailing();
        self.separated_list(&mut b, &rules, |p| p.at(TokenKind::Ident), Parser::attribute);
        b.token(self.expect(TokenKind::RBracket));
        b.finish()
    }

    /// `assembly:`, `return:`, `type:` and friends.
    fn at_attribute_target(&self) -> bool {
        self.peek_kind(1) == TokenKind::Colon
            && (self.at(TokenKind::Ident) || self.current_kind().is_keyword())
    }

    fn attribute(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::Attribute);
        b.node(self.type_name());
        if self.at(TokenKind::LParen) {
            b.node(self.attribute_argument_list());
        }
        b.finish()
    }

    fn attribute_argument_list(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::AttributeArgumentList);
        b.token(self.bump());
        let rules = ListRules::closed_by(TokenKind::RParen);
        self.separated_list(
            &mut b,
            &rules,
            |p| p.at_set(EXPRESSION_START),
            |p| {
                let mut argument = NodeBuilder::new(SyntaxKind::AttributeArgument);
                if p.at(TokenKind::Ident) && matches!(p.peek_kind(1), TokenKind::Eq | TokenKind::Colon) {
                    argument.token(p.bump());
                    argument.token(p.bump());
                }
                argument.node(p.expression());
                argument.finish()
            },
        );
        b.token(self.expect(TokenKind::RParen));
        b.finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use keel_ir::ParseOptions;
    use keel_lexer::lex;
    use pretty_assertions::assert_eq;

    use super::*;

    fn attribute_list(source: &str) -> SyntaxNode {
        Parser::new(lex(source), ParseOptions::default()).attribute_list()
    }

    #[test]
    fn target_and_arguments() {
        let list = attribute_list("[return: Obsolete(\"x\", Error = true)]");
        assert_eq!(list.text(), "[return: Obsolete(\"x\", Error = true)]");
        assert!(list.child_of_kind(SyntaxKind::AttributeTargetSpecifier).is_some());
        let arguments: Vec<_> = list
            .preorder()
            .filter(|n| n.kind() == SyntaxKind::AttributeArgument)
            .collect();
        assert_eq!(arguments.len(), 2);
        assert!(!list.contains_diagnostics());
    }

    #[test]
    fn several_attributes() {
        let list = attribute_list("[A, B.C, D<int>]");
        let attributes = list
            .child_nodes()
            .filter(|n| n.kind() == SyntaxKind::Attribute)
            .count();
        assert_eq!(attributes, 3);
    }

    #[test]
    fn unclosed_list() {
        let list = attribute_list("[A");
        assert!(list.contains_missing());
        assert_eq!(list.collect_diagnostics()[0].code, keel_diagnostic::ErrorCode::CS1003);
    }
}
