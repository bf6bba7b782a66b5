//! Local declarations, local functions and statement attributes.
//!
//! A statement that does not start with a statement keyword is, in order
//! of preference:
//!
//! 1. a local declaration or local function when modifiers lead it (so
//!    `unsafe [A] x` declares rather than opening an unsafe block);
//! 2. a local function when a type, a name and `(` or `<` follow;
//! 3. a local declaration when a type and a name follow;
//! 4. an expression statement.

use keel_ir::{ContextualKeyword, SyntaxKind, TokenKind};
use keel_syntax::{NodeBuilder, SyntaxElement, SyntaxNode, SyntaxToken};
use tracing::debug;

use crate::disambiguate::LocalShape;
use crate::recovery::{TokenSet, EXPRESSION_CONTINUATION};
use crate::Parser;

/// Reserved modifiers read in front of a local. `new`, `explicit` and
/// `implicit` never start one.
const LOCAL_MODIFIERS: TokenSet = TokenSet::of(&[
    TokenKind::KwPublic,
    TokenKind::KwPrivate,
    TokenKind::KwProtected,
    TokenKind::KwInternal,
    TokenKind::KwStatic,
    TokenKind::KwReadonly,
    TokenKind::KwConst,
    TokenKind::KwSealed,
    TokenKind::KwAbstract,
    TokenKind::KwVirtual,
    TokenKind::KwOverride,
    TokenKind::KwExtern,
    TokenKind::KwUnsafe,
    TokenKind::KwVolatile,
]);

impl Parser {
    pub(super) fn declaration_or_expression_statement(&mut self) -> SyntaxNode {
        if self.at_local_modifier() {
            let modifiers = self.local_modifiers();
            return match self.local_shape_at(0) {
                Some(LocalShape::Function) => self.local_function_statement(modifiers),
                _ => self.local_declaration_statement(modifiers),
            };
        }
        if self.at_await_operator() {
            return self.expression_statement();
        }
        match self.local_shape_at(0) {
            Some(LocalShape::Function) => self.local_function_statement(Vec::new()),
            Some(LocalShape::Variable) => self.local_declaration_statement(Vec::new()),
            None => self.expression_statement(),
        }
    }

    fn at_local_modifier(&self) -> bool {
        self.at_set(LOCAL_MODIFIERS) || self.is_contextual_modifier_at(0) || self.at_scoped_modifier()
    }

    fn local_modifiers(&mut self) -> Vec<SyntaxToken> {
        let mut modifiers = Vec::new();
        loop {
            if self.at_set(LOCAL_MODIFIERS) {
                modifiers.push(self.bump());
            } else if self.is_contextual_modifier_at(0) {
                modifiers.push(self.contextual_modifier());
            } else if self.at_scoped_modifier() {
                modifiers.push(self.bump_contextual(ContextualKeyword::Scoped));
            } else {
                return modifiers;
            }
        }
    }

    /// `modifiers Type a = 1, b;`. The type may be missing.
    fn local_declaration_statement(&mut self, modifiers: Vec<SyntaxToken>) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::LocalDeclarationStatement);
        for modifier in modifiers {
            b.token(modifier);
        }
        let ty = self.parse_type();
        b.node(self.variable_declaration(ty));
        b.token(self.expect(TokenKind::Semicolon));
        b.finish()
    }

    /// `modifiers Type Name<T>(params) where ... body`.
    fn local_function_statement(&mut self, modifiers: Vec<SyntaxToken>) -> SyntaxNode {
        let is_async = modifiers.iter().any(|m| m.kind() == TokenKind::KwAsync);
        let mut b = NodeBuilder::new(SyntaxKind::LocalFunctionStatement);
        for modifier in modifiers {
            b.token(modifier);
        }
        b.node(self.parse_type());
        b.token(self.expect_identifier());
        if self.at(TokenKind::Lt) {
            b.node(self.type_parameter_list());
        }
        b.node(self.parameter_list());
        self.constraint_clauses(&mut b);
        self.member_body(&mut b, is_async);
        b.finish()
    }

    /// `Type a = 1, b` after its type. Used by fields, events, locals,
    /// `for` and `using`.
    pub(crate) fn variable_declaration(&mut self, ty: SyntaxNode) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::VariableDeclaration);
        b.node(ty);
        loop {
            let mut declarator = NodeBuilder::new(SyntaxKind::VariableDeclarator);
            declarator.token(self.expect_identifier());
            if self.at(TokenKind::Eq) {
                declarator.node(self.equals_value_clause());
            }
            b.node(declarator.finish());
            match self.eat(TokenKind::Comma) {
                Some(comma) => {
                    b.token(comma);
                }
                None => return b.finish(),
            }
        }
    }

    /// `= value`, where an array initializer `{ ... }` is also a value.
    pub(crate) fn equals_value_clause(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::EqualsValueClause);
        b.token(self.bump());
        if self.at(TokenKind::LBrace) {
            b.node(self.initializer_expression());
        } else {
            b.node(self.expression());
        }
        b.finish()
    }

    /// A statement at `[`: attribute lists on a statement, an array-typed
    /// local with a bogus rank, or a collection expression.
    pub(super) fn attributed_statement(&mut self) -> SyntaxNode {
        if let Some(attributes) = self.try_parse(Parser::statement_attributes) {
            debug!(count = attributes.len(), "attributes on a statement");
            let prefix = attributes.into_iter().map(SyntaxElement::from).collect();
            return self.statement().with_prefix(prefix);
        }
        let declares = self.look_ahead(|p| {
            p.parse_type();
            p.at(TokenKind::Ident)
        });
        if declares {
            debug!("bracket group read as an array type");
            self.local_declaration_statement(Vec::new())
        } else {
            self.expression_statement()
        }
    }

    /// Attribute lists that parse cleanly and are followed by something
    /// that starts a statement without continuing an expression.
    fn statement_attributes(&mut self) -> Option<Vec<SyntaxNode>> {
        let pending = self.skipped.len();
        let lists = self.attribute_lists();
        let clean = self.skipped.len() == pending && !lists.iter().any(SyntaxNode::contains_diagnostics);
        let follows = self.at_statement_start() && !self.at_set(EXPRESSION_CONTINUATION);
        (clean && follows).then_some(lists)
    }
}
