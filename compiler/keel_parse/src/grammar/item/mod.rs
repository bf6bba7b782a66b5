//! Declarations: types and their members.
//!
//! A declaration is read as a header (attribute lists, then a maximal run
//! of modifiers) followed by a dispatch on the first token after the
//! header. `explicit` and `implicit` are read as ordinary modifiers; what
//! follows the last of them decides between an extension type, a
//! conversion operator, and the operator fallback.
//!
//! # Module Structure
//!
//! - `type_decl.rs`: class, struct, interface, record, enum, delegate,
//!   extension
//! - `member.rs`: fields, events, methods, constructors, properties,
//!   indexers, operators, incomplete members
//! - `generics.rs`: type parameters, constraint clauses, base lists
//! - `params.rs`: parameter lists

mod generics;
mod member;
mod params;
mod type_decl;

use keel_diagnostic::ErrorCode;
use keel_ir::{ContextualKeyword, Feature, SyntaxKind, TokenKind};
use keel_syntax::{NodeBuilder, SyntaxNode, SyntaxToken};
use tracing::debug;

use crate::context::ParseContext;
use crate::recovery::{MEMBER_START, MODIFIERS};
use crate::Parser;

/// Attribute lists and modifiers read before a declaration's introducer.
pub(crate) struct MemberHeader {
    attributes: Vec<SyntaxNode>,
    modifiers: Vec<SyntaxToken>,
}

impl MemberHeader {
    /// A builder for `kind` holding the header as its first children.
    fn start(self, kind: SyntaxKind) -> NodeBuilder {
        let mut b = NodeBuilder::new(kind);
        for attribute in self.attributes {
            b.node(attribute);
        }
        for modifier in self.modifiers {
            b.token(modifier);
        }
        b
    }

    fn is_async(&self) -> bool {
        self.modifiers.iter().any(|m| m.kind() == TokenKind::KwAsync)
    }

    /// The trailing `explicit`/`implicit`, removed from the modifiers.
    fn take_marker(&mut self) -> Option<SyntaxToken> {
        match self.modifiers.last().map(SyntaxToken::kind) {
            Some(TokenKind::KwExplicit | TokenKind::KwImplicit) => self.modifiers.pop(),
            _ => None,
        }
    }

    fn ends_with_marker(&self) -> bool {
        matches!(
            self.modifiers.last().map(SyntaxToken::kind),
            Some(TokenKind::KwExplicit | TokenKind::KwImplicit)
        )
    }
}

impl Parser {
    /// A maximal run of modifiers. Contextual modifiers are promoted to
    /// their keyword kinds; `file` and `required` are version-gated.
    pub(crate) fn modifiers(&mut self) -> Vec<SyntaxToken> {
        let mut modifiers = Vec::new();
        loop {
            if self.at_set(MODIFIERS) {
                modifiers.push(self.bump());
            } else if self.is_contextual_modifier_at(0) {
                modifiers.push(self.contextual_modifier());
            } else {
                return modifiers;
            }
        }
    }

    /// Consume the contextual modifier at the current token.
    pub(crate) fn contextual_modifier(&mut self) -> SyntaxToken {
        let Some(keyword) = self.current().contextual_keyword() else {
            return self.bump();
        };
        let token = self.bump_contextual(keyword);
        match keyword {
            ContextualKeyword::File => self.check_feature(Feature::FileTypes, token),
            ContextualKeyword::Required => self.check_feature(Feature::RequiredMembers, token),
            _ => token,
        }
    }

    /// A type or member declaration after its attribute lists.
    pub(crate) fn member_declaration(&mut self, attributes: Vec<SyntaxNode>) -> SyntaxNode {
        let modifiers = self.modifiers();
        let mut header = MemberHeader {
            attributes,
            modifiers,
        };

        if header.ends_with_marker() {
            if self.at_contextual(ContextualKeyword::Extension) && self.supports(Feature::ExtensionTypes) {
                return self.extension_declaration(header);
            }
            if let Some(marker) = header.take_marker() {
                if self.at(TokenKind::KwOperator) {
                    return self.conversion_operator_declaration(header, marker);
                }
                debug!(kind = %self.current_kind(), "marker without introducer, operator fallback");
                return self.operator_fallback(header, marker);
            }
        }

        match self.current_kind() {
            TokenKind::KwClass | TokenKind::KwStruct | TokenKind::KwInterface => {
                self.type_declaration(header)
            }
            TokenKind::KwEnum => self.enum_declaration(header),
            TokenKind::KwDelegate => self.delegate_declaration(header),
            TokenKind::Ident if self.is_record_at(0) => self.record_declaration(header),
            TokenKind::KwEvent => self.event_field_declaration(header),
            TokenKind::Tilde => self.destructor_declaration(header),
            TokenKind::Ident if self.peek_kind(1) == TokenKind::LParen => {
                self.constructor_declaration(header)
            }
            _ if self.at_type_start() => {
                let ty = self.parse_type();
                self.typed_member(header, ty)
            }
            _ => self.incomplete_member(header, None),
        }
    }

    /// `{ members }` of a type declaration.
    pub(crate) fn type_body(&mut self, b: &mut NodeBuilder) {
        b.token(self.expect(TokenKind::LBrace));
        self.without_context(ParseContext::TOP_LEVEL, |p| {
            p.with_context(ParseContext::IN_TYPE_BODY, |p| p.type_members(b));
        });
        b.token(self.expect(TokenKind::RBrace));
    }

    fn type_members(&mut self, b: &mut NodeBuilder) {
        while !self.at(TokenKind::RBrace) && !self.cursor.is_at_end() {
            let start = self.cursor.mark();
            if self.at(TokenKind::LBracket) || self.at_set(MEMBER_START) {
                let attributes = self.attribute_lists();
                b.node(self.member_declaration(attributes));
            } else {
                self.skip_with(ErrorCode::CS1519);
            }
            self.ensure_progress(start, ErrorCode::CS1519);
        }
    }
}
