//! Member declarations.
//!
//! Fields, events, methods, constructors, destructors, properties,
//! indexers, operators and conversion operators. A member whose shape
//! cannot be made out becomes an `IncompleteMember` holding what was read.

use keel_diagnostic::{Diagnostic, ErrorCode};
use keel_ir::{ContextualKeyword, SyntaxKind, TokenKind};
use keel_syntax::{NodeBuilder, SyntaxNode, SyntaxToken};
use tracing::debug;

use super::MemberHeader;
use crate::missing::identifier_name;
use crate::recovery::{TokenSet, MODIFIERS};
use crate::Parser;

/// Operators that may be declared with `operator`. `>` and its composed
/// shifts are matched separately.
const OVERLOADABLE_OPERATORS: TokenSet = TokenSet::of(&[
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Bang,
    TokenKind::Tilde,
    TokenKind::PlusPlus,
    TokenKind::MinusMinus,
    TokenKind::Star,
    TokenKind::Slash,
    TokenKind::Percent,
    TokenKind::Amp,
    TokenKind::Pipe,
    TokenKind::Caret,
    TokenKind::Shl,
    TokenKind::EqEq,
    TokenKind::NotEq,
    TokenKind::Lt,
    TokenKind::LtEq,
    TokenKind::GtEq,
    TokenKind::KwTrue,
    TokenKind::KwFalse,
]);

impl Parser {
    /// Dispatch on what follows a member's type.
    pub(super) fn typed_member(&mut self, header: MemberHeader, ty: SyntaxNode) -> SyntaxNode {
        match self.current_kind() {
            TokenKind::KwOperator => self.operator_declaration(header, ty),
            TokenKind::KwThis => self.indexer_declaration(header, ty),
            TokenKind::Ident => match self.peek_kind(1) {
                TokenKind::LParen | TokenKind::Lt => self.method_declaration(header, ty),
                TokenKind::LBrace | TokenKind::FatArrow => self.property_declaration(header, ty),
                _ => self.field_declaration(header, ty),
            },
            TokenKind::KwExplicit | TokenKind::KwImplicit => self.marker_after_type(header, ty),
            _ => self.incomplete_member(header, Some(ty)),
        }
    }

    /// What was read of a member that has no recognisable shape: the
    /// header and possibly a type. Reports the first missing piece.
    pub(super) fn incomplete_member(&mut self, header: MemberHeader, ty: Option<SyntaxNode>) -> SyntaxNode {
        let mut b = header.start(SyntaxKind::IncompleteMember);
        match ty {
            Some(ty) => {
                b.node(ty);
                b.token(self.missing(TokenKind::Ident));
                if let Some(semicolon) = self.eat(TokenKind::Semicolon) {
                    b.token(semicolon);
                }
            }
            None => {
                b.node(self.missing_type());
            }
        }
        b.finish()
    }

    fn field_declaration(&mut self, header: MemberHeader, ty: SyntaxNode) -> SyntaxNode {
        let mut b = header.start(SyntaxKind::FieldDeclaration);
        b.node(self.variable_declaration(ty));
        b.token(self.expect(TokenKind::Semicolon));
        b.finish()
    }

    pub(super) fn event_field_declaration(&mut self, header: MemberHeader) -> SyntaxNode {
        let mut b = header.start(SyntaxKind::EventFieldDeclaration);
        b.token(self.bump());
        let ty = self.parse_type();
        b.node(self.variable_declaration(ty));
        b.token(self.expect(TokenKind::Semicolon));
        b.finish()
    }

    fn method_declaration(&mut self, header: MemberHeader, ty: SyntaxNode) -> SyntaxNode {
        let is_async = header.is_async();
        let mut b = header.start(SyntaxKind::MethodDeclaration);
        b.node(ty);
        b.token(self.bump());
        if self.at(TokenKind::Lt) {
            b.node(self.type_parameter_list());
        }
        b.node(self.parameter_list());
        self.constraint_clauses(&mut b);
        self.member_body(&mut b, is_async);
        b.finish()
    }

    pub(super) fn constructor_declaration(&mut self, header: MemberHeader) -> SyntaxNode {
        let mut b = header.start(SyntaxKind::ConstructorDeclaration);
        b.token(self.bump());
        b.node(self.parameter_list());
        if self.at(TokenKind::Colon) {
            let mut initializer = NodeBuilder::new(SyntaxKind::ConstructorInitializer);
            initializer.token(self.bump());
            let target = if matches!(self.current_kind(), TokenKind::KwBase | TokenKind::KwThis) {
                self.bump()
            } else {
                self.missing(TokenKind::KwBase)
            };
            initializer.token(target);
            initializer.node(self.argument_list());
            b.node(initializer.finish());
        }
        self.member_body(&mut b, false);
        b.finish()
    }

    pub(super) fn destructor_declaration(&mut self, header: MemberHeader) -> SyntaxNode {
        let mut b = header.start(SyntaxKind::DestructorDeclaration);
        b.token(self.bump());
        b.token(self.expect_identifier());
        b.node(self.parameter_list());
        self.member_body(&mut b, false);
        b.finish()
    }

    fn property_declaration(&mut self, header: MemberHeader, ty: SyntaxNode) -> SyntaxNode {
        let mut b = header.start(SyntaxKind::PropertyDeclaration);
        b.node(ty);
        b.token(self.bump());
        if self.at(TokenKind::FatArrow) {
            b.node(self.arrow_expression_clause(false));
            b.token(self.expect(TokenKind::Semicolon));
            return b.finish();
        }
        b.node(self.accessor_list());
        if self.at(TokenKind::Eq) {
            b.node(self.equals_value_clause());
            b.token(self.expect(TokenKind::Semicolon));
        }
        b.finish()
    }

    fn indexer_declaration(&mut self, header: MemberHeader, ty: SyntaxNode) -> SyntaxNode {
        let mut b = header.start(SyntaxKind::IndexerDeclaration);
        b.node(ty);
        b.token(self.bump());
        b.node(self.bracketed_parameter_list());
        if self.at(TokenKind::FatArrow) {
            b.node(self.arrow_expression_clause(false));
            b.token(self.expect(TokenKind::Semicolon));
        } else {
            b.node(self.accessor_list());
        }
        b.finish()
    }

    /// A block, `=> expr;` or `;`. A `;` straight after a block in a type
    /// body is skipped with CS1597.
    pub(crate) fn member_body(&mut self, b: &mut NodeBuilder, is_async: bool) {
        match self.current_kind() {
            TokenKind::LBrace => {
                b.node(self.body_block(is_async));
                if self.at(TokenKind::Semicolon) && self.context.in_type_body() {
                    self.skip_with(ErrorCode::CS1597);
                }
            }
            TokenKind::FatArrow => {
                b.node(self.arrow_expression_clause(is_async));
                b.token(self.expect(TokenKind::Semicolon));
            }
            _ => {
                b.token(self.expect(TokenKind::Semicolon));
            }
        }
    }

    /// `=> expr`.
    fn arrow_expression_clause(&mut self, is_async: bool) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::ArrowExpressionClause);
        b.token(self.bump());
        b.node(self.in_body(is_async, Parser::expression));
        b.finish()
    }

    /// `{ get; private set => x = value; init { } }`.
    fn accessor_list(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::AccessorList);
        b.token(self.expect(TokenKind::LBrace));
        while !self.at(TokenKind::RBrace) && !self.cursor.is_at_end() {
            let start = self.cursor.mark();
            if self.at(TokenKind::Ident) || self.at(TokenKind::LBracket) || self.at_set(MODIFIERS) {
                b.node(self.accessor_declaration());
            } else {
                self.skip_with(ErrorCode::CS1519);
            }
            self.ensure_progress(start, ErrorCode::CS1519);
        }
        b.token(self.expect(TokenKind::RBrace));
        b.finish()
    }

    fn accessor_declaration(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::AccessorDeclaration);
        for attribute in self.attribute_lists() {
            b.node(attribute);
        }
        while self.at_set(MODIFIERS) {
            b.token(self.bump());
        }
        let keyword = match self.current().contextual_keyword() {
            Some(
                keyword @ (ContextualKeyword::Get | ContextualKeyword::Set | ContextualKeyword::Init),
            ) if self.at(TokenKind::Ident) => self.bump_contextual(keyword),
            _ => self.expect_identifier(),
        };
        b.token(keyword);
        self.member_body(&mut b, false);
        b.finish()
    }

    /// `T operator +(T a, T b) body`.
    fn operator_declaration(&mut self, header: MemberHeader, ty: SyntaxNode) -> SyntaxNode {
        let mut b = header.start(SyntaxKind::OperatorDeclaration);
        b.node(ty);
        b.token(self.bump());
        let op = self.overloadable_operator();
        b.token(op);
        b.node(self.parameter_list());
        self.member_body(&mut b, false);
        b.finish()
    }

    fn overloadable_operator(&mut self) -> SyntaxToken {
        if self.at(TokenKind::Gt) {
            if let Some(op) = self.match_binary_op() {
                if matches!(op.kind, TokenKind::Gt | TokenKind::Shr | TokenKind::UnsignedShr) {
                    return self.bump_operator(op);
                }
            }
        }
        if self.at_set(OVERLOADABLE_OPERATORS) {
            return self.bump();
        }
        let diagnostic = Diagnostic::new(ErrorCode::CS1037, self.missing_span());
        self.missing_with(TokenKind::Plus, diagnostic)
    }

    /// `implicit operator T(S s) body`, after the header.
    pub(super) fn conversion_operator_declaration(
        &mut self,
        header: MemberHeader,
        marker: SyntaxToken,
    ) -> SyntaxNode {
        let mut b = header.start(SyntaxKind::ConversionOperatorDeclaration);
        b.token(marker);
        b.token(self.bump());
        b.node(self.parse_type());
        b.node(self.parameter_list());
        self.member_body(&mut b, false);
        b.finish()
    }

    /// `explicit`/`implicit` followed by neither `operator` nor an enabled
    /// `extension`. The marker is read as the operator token of an
    /// operator declaration whose return type and `operator` keyword are
    /// missing, and the rest parses as that declaration's parameter list
    /// and body.
    pub(super) fn operator_fallback(&mut self, header: MemberHeader, marker: SyntaxToken) -> SyntaxNode {
        let span = marker.span();
        let ty = identifier_name(Parser::missing_before(
            &marker,
            TokenKind::Ident,
            Diagnostic::new(ErrorCode::CS1031, span),
        ));
        let keyword = Parser::missing_before(
            &marker,
            TokenKind::KwOperator,
            Diagnostic::new(ErrorCode::CS1553, span).with_arg("+"),
        )
        .with_diagnostic(Diagnostic::expected("operator", span));
        self.finish_operator_fallback(header, ty, keyword, marker)
    }

    /// `int implicit (C c)`: the return type came first and `operator` is
    /// missing after it. CS1553 goes on the type.
    fn marker_after_type(&mut self, header: MemberHeader, ty: SyntaxNode) -> SyntaxNode {
        debug!(kind = %self.current_kind(), "marker after a type, operator fallback");
        let ty = match ty.span() {
            Some(span) => ty.with_diagnostic(Diagnostic::new(ErrorCode::CS1553, span).with_arg("+")),
            None => ty,
        };
        let keyword = self.missing(TokenKind::KwOperator);
        let marker = self.bump();
        self.finish_operator_fallback(header, ty, keyword, marker)
    }

    /// Parameters, then the body. The parameter count picks the code
    /// reported on the marker.
    fn finish_operator_fallback(
        &mut self,
        header: MemberHeader,
        ty: SyntaxNode,
        keyword: SyntaxToken,
        marker: SyntaxToken,
    ) -> SyntaxNode {
        let span = marker.span();
        let parameters = self.parameter_list();
        let arity = parameters
            .child_nodes()
            .filter(|n| n.kind() == SyntaxKind::Parameter)
            .count();
        let code = match arity {
            1 => ErrorCode::CS1019,
            2 => ErrorCode::CS1020,
            _ => ErrorCode::CS1037,
        };
        let op = marker.with_diagnostic(Diagnostic::new(code, span));

        let mut b = header.start(SyntaxKind::OperatorDeclaration);
        b.node(ty).token(keyword).token(op).node(parameters);
        self.member_body(&mut b, false);
        b.finish()
    }
}
