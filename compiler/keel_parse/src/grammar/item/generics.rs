//! Type parameters, constraint clauses and base lists.

use keel_ir::{ContextualKeyword, Feature, SyntaxKind, TokenKind};
use keel_syntax::{NodeBuilder, SyntaxNode};

use crate::missing::identifier_name;
use crate::recovery::{ListRules, TokenSet, ANCHORS};
use crate::Parser;

const TYPE_PARAMETER_ANCHORS: TokenSet = ANCHORS.union(TokenSet::of(&[
    TokenKind::LParen,
    TokenKind::LBrace,
    TokenKind::Colon,
]));

/// Tokens that end a constraint list.
const CONSTRAINT_END: TokenSet = TokenSet::of(&[
    TokenKind::LBrace,
    TokenKind::Semicolon,
    TokenKind::FatArrow,
    TokenKind::RBrace,
    TokenKind::Eof,
]);

impl Parser {
    /// `<in T, out U, V>`.
    pub(crate) fn type_parameter_list(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::TypeParameterList);
        b.token(self.bump());
        let rules = ListRules::closed_by(TokenKind::Gt).anchors(TYPE_PARAMETER_ANCHORS);
        self.separated_list(
            &mut b,
            &rules,
            |p| {
                matches!(
                    p.current_kind(),
                    TokenKind::Ident | TokenKind::LBracket | TokenKind::KwIn | TokenKind::KwOut
                )
            },
            |p| {
                let mut parameter = NodeBuilder::new(SyntaxKind::TypeParameter);
                for attribute in p.attribute_lists() {
                    parameter.node(attribute);
                }
                if let Some(variance) = p.eat(TokenKind::KwIn).or_else(|| p.eat(TokenKind::KwOut)) {
                    parameter.token(variance);
                }
                parameter.token(p.expect_identifier());
                parameter.finish()
            },
        );
        b.token(self.expect(TokenKind::Gt));
        b.finish()
    }

    /// Zero or more `where T : ...` clauses, appended to `b`.
    pub(crate) fn constraint_clauses(&mut self, b: &mut NodeBuilder) {
        while self.at_where_clause() {
            b.node(self.constraint_clause());
        }
    }

    fn constraint_clause(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::TypeParameterConstraintClause);
        b.token(self.bump_contextual(ContextualKeyword::Where));
        b.node(identifier_name(self.bump()));
        b.token(self.bump());
        loop {
            b.node(self.constraint());
            if self.at(TokenKind::Comma) {
                b.token(self.bump());
            } else {
                break;
            }
            if self.at_set(CONSTRAINT_END) || self.at_where_clause() {
                break;
            }
        }
        b.finish()
    }

    fn constraint(&mut self) -> SyntaxNode {
        match self.current_kind() {
            TokenKind::KwClass => {
                let mut b = NodeBuilder::new(SyntaxKind::ClassConstraint);
                b.token(self.bump());
                if let Some(question) = self.eat(TokenKind::Question) {
                    b.token(question);
                }
                b.finish()
            }
            TokenKind::KwStruct => {
                let mut b = NodeBuilder::new(SyntaxKind::StructConstraint);
                b.token(self.bump());
                b.finish()
            }
            TokenKind::KwNew => {
                let mut b = NodeBuilder::new(SyntaxKind::ConstructorConstraint);
                b.token(self.bump());
                b.token(self.expect(TokenKind::LParen));
                b.token(self.expect(TokenKind::RParen));
                b.finish()
            }
            TokenKind::Ident if self.at_contextual(ContextualKeyword::Allows) => self.allows_clause(),
            _ => {
                let mut b = NodeBuilder::new(SyntaxKind::TypeConstraint);
                b.node(self.parse_type());
                b.finish()
            }
        }
    }

    /// `allows ref struct`, gated on ref struct interfaces.
    fn allows_clause(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::AllowsConstraintClause);
        let allows = self.bump_contextual(ContextualKeyword::Allows);
        b.token(self.check_feature(Feature::RefStructInterfaces, allows));
        loop {
            let mut constraint = NodeBuilder::new(SyntaxKind::RefStructConstraint);
            constraint.token(self.expect(TokenKind::KwRef));
            constraint.token(self.expect(TokenKind::KwStruct));
            b.node(constraint.finish());
            if self.at(TokenKind::Comma) && self.peek_kind(1) == TokenKind::KwRef {
                b.token(self.bump());
            } else {
                break;
            }
        }
        b.finish()
    }

    /// `: A, B(args), C` up to the body, a `where` clause or an anchor.
    pub(crate) fn base_list(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::BaseList);
        b.token(self.bump());
        let rules = ListRules::closed_by(TokenKind::LBrace).until_where();
        self.separated_list(&mut b, &rules, Parser::at_type_start, |p| {
            let ty = p.parse_type();
            if p.at(TokenKind::LParen) {
                let mut base = NodeBuilder::new(SyntaxKind::PrimaryConstructorBaseType);
                base.node(ty);
                base.node(p.argument_list());
                base.finish()
            } else {
                let mut base = NodeBuilder::new(SyntaxKind::SimpleBaseType);
                base.node(ty);
                base.finish()
            }
        });
        b.finish()
    }
}
