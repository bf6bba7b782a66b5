//! Type declarations.
//!
//! Grammar (after the header):
//! ```text
//! class|struct|interface Name [<T>] [(params)] [: bases] {where ...} body
//! record [class|struct] Name [<T>] [(params)] [: bases] {where ...} body
//! extension Name [<T>] [for Type] [: bases] {where ...} { members } [;]
//! enum Name [: type] { A [= v], ... } [;]
//! delegate Type Name [<T>] (params) {where ...} ;
//! ```
//! where `body` is `{ members } [;]` or `;`.

use keel_ir::{ContextualKeyword, Feature, SyntaxKind, TokenKind};
use keel_syntax::{NodeBuilder, SyntaxNode};

use super::MemberHeader;
use crate::recovery::ListRules;
use crate::Parser;

impl Parser {
    pub(super) fn type_declaration(&mut self, header: MemberHeader) -> SyntaxNode {
        let kind = match self.current_kind() {
            TokenKind::KwStruct => SyntaxKind::StructDeclaration,
            TokenKind::KwInterface => SyntaxKind::InterfaceDeclaration,
            _ => SyntaxKind::ClassDeclaration,
        };
        let mut b = header.start(kind);
        b.token(self.bump());
        b.token(self.expect_identifier());
        self.type_declaration_rest(&mut b, Some(Feature::PrimaryConstructors));
        b.finish()
    }

    pub(super) fn record_declaration(&mut self, header: MemberHeader) -> SyntaxNode {
        let mut b = header.start(SyntaxKind::RecordDeclaration);
        b.token(self.bump_contextual(ContextualKeyword::Record));
        match self.current_kind() {
            TokenKind::KwStruct => {
                b.set_kind(SyntaxKind::RecordStructDeclaration);
                b.token(self.bump());
            }
            TokenKind::KwClass => {
                b.token(self.bump());
            }
            _ => {}
        }
        b.token(self.expect_identifier());
        self.type_declaration_rest(&mut b, None);
        b.finish()
    }

    /// Everything after the name. A parameter list is gated by `feature`
    /// when given (primary constructors on classes and structs); records
    /// always accept one.
    fn type_declaration_rest(&mut self, b: &mut NodeBuilder, feature: Option<Feature>) {
        if self.at(TokenKind::Lt) {
            b.node(self.type_parameter_list());
        }
        if self.at(TokenKind::LParen) && b.kind() != SyntaxKind::InterfaceDeclaration {
            let open = self.bump();
            let open = match feature {
                Some(feature) => self.check_feature(feature, open),
                None => open,
            };
            b.node(self.parameter_list_from(open));
        }
        if self.at(TokenKind::Colon) {
            b.node(self.base_list());
        }
        self.constraint_clauses(b);
        if self.at(TokenKind::Semicolon) {
            b.token(self.bump());
            return;
        }
        self.type_body(b);
        if let Some(semicolon) = self.eat(TokenKind::Semicolon) {
            b.token(semicolon);
        }
    }

    /// `explicit extension E for T : B { }`, after the header. The marker
    /// stays among the modifiers.
    pub(super) fn extension_declaration(&mut self, header: MemberHeader) -> SyntaxNode {
        let mut b = header.start(SyntaxKind::ExtensionDeclaration);
        b.token(self.bump_contextual(ContextualKeyword::Extension));
        b.token(self.expect_identifier());
        if self.at(TokenKind::Lt) {
            b.node(self.type_parameter_list());
        }
        if self.at(TokenKind::KwFor) {
            let mut for_type = NodeBuilder::new(SyntaxKind::ForType);
            for_type.token(self.bump());
            for_type.node(self.parse_type());
            b.node(for_type.finish());
        }
        if self.at(TokenKind::Colon) {
            b.node(self.base_list());
        }
        self.constraint_clauses(&mut b);
        if self.at(TokenKind::Semicolon) {
            // A body is required even when `;` ends the declaration.
            b.token(self.missing(TokenKind::LBrace));
            b.token(self.missing(TokenKind::RBrace));
            b.token(self.bump());
            return b.finish();
        }
        self.type_body(&mut b);
        if let Some(semicolon) = self.eat(TokenKind::Semicolon) {
            b.token(semicolon);
        }
        b.finish()
    }

    pub(super) fn enum_declaration(&mut self, header: MemberHeader) -> SyntaxNode {
        let mut b = header.start(SyntaxKind::EnumDeclaration);
        b.token(self.bump());
        b.token(self.expect_identifier());
        if self.at(TokenKind::Colon) {
            b.node(self.base_list());
        }
        b.token(self.expect(TokenKind::LBrace));
        let rules = ListRules::closed_by(TokenKind::RBrace).trailing();
        self.separated_list(
            &mut b,
            &rules,
            |p| p.at(TokenKind::Ident) || p.at(TokenKind::LBracket),
            Parser::enum_member,
        );
        b.token(self.expect(TokenKind::RBrace));
        if let Some(semicolon) = self.eat(TokenKind::Semicolon) {
            b.token(semicolon);
        }
        b.finish()
    }

    fn enum_member(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::EnumMemberDeclaration);
        for attribute in self.attribute_lists() {
            b.node(attribute);
        }
        b.token(self.expect_identifier());
        if self.at(TokenKind::Eq) {
            b.node(self.equals_value_clause());
        }
        b.finish()
    }

    pub(super) fn delegate_declaration(&mut self, header: MemberHeader) -> SyntaxNode {
        let mut b = header.start(SyntaxKind::DelegateDeclaration);
        b.token(self.bump());
        b.node(self.parse_type());
        b.token(self.expect_identifier());
        if self.at(TokenKind::Lt) {
            b.node(self.type_parameter_list());
        }
        b.node(self.parameter_list());
        self.constraint_clauses(&mut b);
        b.token(self.expect(TokenKind::Semicolon));
        b.finish()
    }
}
