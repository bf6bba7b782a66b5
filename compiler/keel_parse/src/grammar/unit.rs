//! Compilation units, `using` directives and namespaces.
//!
//! At top level a member and a statement can start the same way. A run of
//! modifiers followed by a type keyword, or containing a modifier only a
//! member can carry, makes a member. So does a type followed by
//! `implicit` or `explicit`. Anything else that can start a statement
//! becomes a global statement.

use keel_diagnostic::ErrorCode;
use keel_ir::{ContextualKeyword, SyntaxKind, TokenKind};
use keel_syntax::{NodeBuilder, SyntaxElement, SyntaxNode};
use tracing::debug;

use crate::context::ParseContext;
use crate::recovery::{TokenSet, MEMBER_START, TYPE_KEYWORDS};
use crate::Parser;

/// Modifiers a local or a local function can never carry.
const MEMBER_ONLY_MODIFIERS: TokenSet = TokenSet::of(&[
    TokenKind::KwPublic,
    TokenKind::KwPrivate,
    TokenKind::KwProtected,
    TokenKind::KwInternal,
    TokenKind::KwVirtual,
    TokenKind::KwOverride,
    TokenKind::KwAbstract,
    TokenKind::KwSealed,
    TokenKind::KwReadonly,
    TokenKind::KwVolatile,
    TokenKind::KwExplicit,
    TokenKind::KwImplicit,
]);

impl Parser {
    /// The whole file. The `Eof` token is the last child.
    pub(crate) fn compilation_unit(&mut self) -> SyntaxNode {
        self.with_context(ParseContext::TOP_LEVEL, |p| {
            let mut b = NodeBuilder::new(SyntaxKind::CompilationUnit);
            p.namespace_members(&mut b, true);
            b.token(p.bump());
            b.finish()
        })
    }

    /// Usings and members up to `}` (inside a namespace) or the end of
    /// input. At top level, statements are accepted too and a stray `}`
    /// is skipped.
    fn namespace_members(&mut self, b: &mut NodeBuilder, top_level: bool) {
        loop {
            if self.cursor.is_at_end() || (!top_level && self.at(TokenKind::RBrace)) {
                return;
            }
            let start = self.cursor.mark();
            if self.at_using_directive() {
                b.node(self.using_directive());
            } else if self.at(TokenKind::KwNamespace) {
                b.node(self.namespace_declaration());
            } else if self.at(TokenKind::LBracket) {
                self.bracketed_member(b, top_level);
            } else if top_level && self.at_top_level_member() {
                b.node(self.member_declaration(Vec::new()));
            } else if top_level && self.at_statement_start() {
                b.node(self.global_statement(Vec::new()));
            } else if self.at_set(MEMBER_START) {
                b.node(self.member_declaration(Vec::new()));
            } else {
                self.skip_with(ErrorCode::CS1022);
            }
            self.ensure_progress(start, ErrorCode::CS1022);
        }
    }

    fn global_statement(&mut self, attributes: Vec<SyntaxNode>) -> SyntaxNode {
        let prefix = attributes.into_iter().map(SyntaxElement::from).collect();
        let statement = self.statement().with_prefix(prefix);
        let mut b = NodeBuilder::new(SyntaxKind::GlobalStatement);
        b.node(statement);
        b.finish()
    }

    /// A member, global statement or file attributes starting at `[`.
    fn bracketed_member(&mut self, b: &mut NodeBuilder, top_level: bool) {
        if top_level && self.bracket_starts_expression() {
            debug!("top-level bracket read as an expression");
            b.node(self.global_statement(Vec::new()));
            return;
        }
        let attributes = self.attribute_lists();
        if self.cursor.is_at_end() || self.at(TokenKind::RBrace) {
            for attribute in attributes {
                b.node(attribute);
            }
        } else if top_level && !self.at_top_level_member() && self.at_statement_start() {
            b.node(self.global_statement(attributes));
        } else {
            b.node(self.member_declaration(attributes));
        }
    }

    /// Whether a top-level position starts a member rather than a
    /// statement.
    fn at_top_level_member(&self) -> bool {
        let after = self.scan_modifiers(0);
        let introducer = self.peek_kind(after);
        if TYPE_KEYWORDS.contains(introducer) || introducer == TokenKind::KwEvent || self.is_record_at(after) {
            return true;
        }
        // `T implicit (...)`: an operator missing its `operator` keyword.
        if self.scan_type(after).is_some_and(|end| {
            matches!(self.peek_kind(end), TokenKind::KwExplicit | TokenKind::KwImplicit)
        }) {
            return true;
        }
        (0..after).any(|offset| {
            let token = self.cursor.peek(offset);
            MEMBER_ONLY_MODIFIERS.contains(token.kind())
                || (token.kind() == TokenKind::Ident
                    && matches!(
                        token.contextual_keyword(),
                        Some(ContextualKeyword::Partial | ContextualKeyword::Required | ContextualKeyword::File)
                    ))
        })
    }

    /// `using X;`, `using static X;`, `using A = X;`, `global using X;`.
    /// `using (` and `using T x` are statements.
    fn at_using_directive(&self) -> bool {
        let offset = if self.at_contextual(ContextualKeyword::Global) {
            if self.peek_kind(1) != TokenKind::KwUsing {
                return false;
            }
            1
        } else if self.at(TokenKind::KwUsing) {
            0
        } else {
            return false;
        };
        match self.peek_kind(offset + 1) {
            TokenKind::KwStatic => true,
            TokenKind::Ident if self.peek_kind(offset + 2) == TokenKind::Eq => true,
            _ => self
                .scan_type(offset + 1)
                .is_some_and(|after| self.peek_kind(after) == TokenKind::Semicolon),
        }
    }

    fn using_directive(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::UsingDirective);
        if self.at_contextual(ContextualKeyword::Global) {
            b.token(self.bump_contextual(ContextualKeyword::Global));
        }
        b.token(self.bump());
        if let Some(keyword) = self.eat(TokenKind::KwStatic) {
            b.token(keyword);
        }
        if self.at(TokenKind::Ident) && self.peek_kind(1) == TokenKind::Eq {
            let mut alias = NodeBuilder::new(SyntaxKind::NameEquals);
            alias.token(self.bump());
            alias.token(self.bump());
            b.node(alias.finish());
        }
        b.node(self.parse_type());
        b.token(self.expect(TokenKind::Semicolon));
        b.finish()
    }

    /// `namespace A.B { ... } [;]` or `namespace A.B;` followed by the
    /// rest of the file.
    fn namespace_declaration(&mut self) -> SyntaxNode {
        let namespace = self.bump();
        let name = self.type_name();
        if self.at(TokenKind::Semicolon) {
            let mut b = NodeBuilder::new(SyntaxKind::FileScopedNamespaceDeclaration);
            b.token(namespace).node(name).token(self.bump());
            self.without_context(ParseContext::TOP_LEVEL, |p| p.namespace_members(&mut b, false));
            return b.finish();
        }
        let mut b = NodeBuilder::new(SyntaxKind::NamespaceDeclaration);
        b.token(namespace).node(name);
        b.token(self.expect(TokenKind::LBrace));
        self.without_context(ParseContext::TOP_LEVEL, |p| p.namespace_members(&mut b, false));
        b.token(self.expect(TokenKind::RBrace));
        if let Some(semicolon) = self.eat(TokenKind::Semicolon) {
            b.token(semicolon);
        }
        b.finish()
    }
}
