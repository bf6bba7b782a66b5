//! Primary expressions.

use keel_ir::{ContextualKeyword, SyntaxKind, TokenKind};
use keel_syntax::{NodeBuilder, SyntaxNode, SyntaxToken};
use keel_stack::ensure_sufficient_stack;

use crate::disambiguate::ParenShape;
use crate::missing::identifier_name;
use crate::recovery::{ListRules, EXPRESSION_START, LITERALS, PREDEFINED_TYPES};
use crate::Parser;

impl Parser {
    pub(crate) fn primary_expression(&mut self) -> SyntaxNode {
        match self.current_kind() {
            kind if LITERALS.contains(kind) => self.single_token(SyntaxKind::LiteralExpression),
            kind if PREDEFINED_TYPES.contains(kind) => self.single_token(SyntaxKind::PredefinedType),
            TokenKind::KwThis => self.single_token(SyntaxKind::ThisExpression),
            TokenKind::KwBase => self.single_token(SyntaxKind::BaseExpression),
            TokenKind::Ident => self.name_expression(),
            TokenKind::LParen => match self.paren_shape() {
                ParenShape::Lambda => self.lambda_expression(),
                ParenShape::Tuple => self.tuple_expression(),
                ParenShape::Cast | ParenShape::Parenthesized => self.parenthesized_expression(),
            },
            TokenKind::LBracket => self.collection_expression(),
            TokenKind::KwNew => self.creation_expression(),
            TokenKind::KwTypeof => self.type_operator(SyntaxKind::TypeOfExpression),
            TokenKind::KwSizeof => self.type_operator(SyntaxKind::SizeOfExpression),
            TokenKind::KwDefault if self.peek_kind(1) == TokenKind::LParen => {
                self.type_operator(SyntaxKind::DefaultExpression)
            }
            TokenKind::KwDefault => self.single_token(SyntaxKind::LiteralExpression),
            TokenKind::KwChecked | TokenKind::KwUnchecked => {
                let mut b = NodeBuilder::new(SyntaxKind::CheckedExpression);
                b.token(self.bump());
                b.token(self.expect(TokenKind::LParen));
                b.node(self.expression());
                b.token(self.expect(TokenKind::RParen));
                b.finish()
            }
            _ => self.missing_expression(),
        }
    }

    fn single_token(&mut self, kind: SyntaxKind) -> SyntaxNode {
        let mut b = NodeBuilder::new(kind);
        b.token(self.bump());
        b.finish()
    }

    /// An identifier in expression position: a lambda parameter, an
    /// `async` lambda, a generic name, an alias-qualified name or a plain
    /// name.
    fn name_expression(&mut self) -> SyntaxNode {
        if self.peek_kind(1) == TokenKind::FatArrow || self.at_async_lambda() {
            return self.lambda_expression();
        }
        if self.peek_kind(1) == TokenKind::DoubleColon {
            return self.type_name();
        }
        self.simple_name()
    }

    /// `x` or `x<T>`, deciding generic arguments by lookahead.
    pub(crate) fn simple_name(&mut self) -> SyntaxNode {
        if self.at(TokenKind::Ident) && self.is_generic_name_at(0, false) {
            let mut b = NodeBuilder::new(SyntaxKind::GenericName);
            b.token(self.bump());
            b.node(self.type_argument_list());
            return b.finish();
        }
        identifier_name(self.expect_identifier())
    }

    fn at_async_lambda(&self) -> bool {
        if !self.at_contextual(ContextualKeyword::Async) {
            return false;
        }
        match self.peek_kind(1) {
            TokenKind::Ident => self.peek_kind(2) == TokenKind::FatArrow,
            TokenKind::LParen => self
                .matching_close(1)
                .is_some_and(|close| self.peek_kind(close + 1) == TokenKind::FatArrow),
            _ => false,
        }
    }

    fn parenthesized_expression(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::ParenthesizedExpression);
        b.token(self.bump());
        b.node(self.expression());
        b.token(self.expect(TokenKind::RParen));
        b.finish()
    }

    /// `(a, b: 1)`.
    fn tuple_expression(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::TupleExpression);
        b.token(self.bump());
        let rules = ListRules::closed_by(TokenKind::RParen);
        self.separated_list(&mut b, &rules, Parser::at_argument_start, Parser::argument);
        b.token(self.expect(TokenKind::RParen));
        b.finish()
    }

    /// `typeof(T)`, `sizeof(T)`, `default(T)`.
    fn type_operator(&mut self, kind: SyntaxKind) -> SyntaxNode {
        let mut b = NodeBuilder::new(kind);
        b.token(self.bump());
        b.token(self.expect(TokenKind::LParen));
        b.node(self.parse_type());
        b.token(self.expect(TokenKind::RParen));
        b.finish()
    }

    /// Everything introduced by `new`.
    fn creation_expression(&mut self) -> SyntaxNode {
        let new = self.bump();
        match self.current_kind() {
            TokenKind::LParen => {
                let mut b = NodeBuilder::new(SyntaxKind::ImplicitObjectCreationExpression);
                b.token(new);
                b.node(self.argument_list());
                if self.at(TokenKind::LBrace) {
                    b.node(self.initializer_expression());
                }
                b.finish()
            }
            TokenKind::LBracket => {
                let mut b = NodeBuilder::new(SyntaxKind::ImplicitArrayCreationExpression);
                b.token(new);
                b.node(self.rank_specifier(false));
                if self.at(TokenKind::LBrace) {
                    b.node(self.initializer_expression());
                }
                b.finish()
            }
            _ => {
                let mut ty = self.non_array_type();
                if self.at(TokenKind::Question) {
                    let mut nullable = NodeBuilder::new(SyntaxKind::NullableType);
                    nullable.node(ty).token(self.bump());
                    ty = nullable.finish();
                }
                if self.at(TokenKind::LBracket) {
                    return self.array_creation_rest(new, ty);
                }
                let mut b = NodeBuilder::new(SyntaxKind::ObjectCreationExpression);
                b.token(new).node(ty);
                let has_initializer = self.at(TokenKind::LBrace);
                if self.at(TokenKind::LParen) || !has_initializer {
                    b.node(self.argument_list());
                }
                if self.at(TokenKind::LBrace) {
                    b.node(self.initializer_expression());
                }
                b.finish()
            }
        }
    }

    /// `new T[n][]{...}`, after the element type. Only the first rank may
    /// carry sizes.
    fn array_creation_rest(&mut self, new: SyntaxToken, element: SyntaxNode) -> SyntaxNode {
        let mut array = NodeBuilder::new(SyntaxKind::ArrayType);
        array.node(element);
        array.node(self.rank_specifier(true));
        while self.at(TokenKind::LBracket) {
            array.node(self.rank_specifier(false));
        }
        let mut b = NodeBuilder::new(SyntaxKind::ArrayCreationExpression);
        b.token(new).node(array.finish());
        if self.at(TokenKind::LBrace) {
            b.node(self.initializer_expression());
        }
        b.finish()
    }

    /// `{ a, b, { c } }` for arrays, objects and collections.
    pub(crate) fn initializer_expression(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::InitializerExpression);
        b.token(self.expect(TokenKind::LBrace));
        let rules = ListRules::closed_by(TokenKind::RBrace).trailing();
        self.separated_list(
            &mut b,
            &rules,
            |p| p.at(TokenKind::LBrace) || p.at_set(EXPRESSION_START),
            |p| {
                if p.at(TokenKind::LBrace) {
                    ensure_sufficient_stack(|| p.initializer_expression())
                } else {
                    p.expression()
                }
            },
        );
        b.token(self.expect(TokenKind::RBrace));
        b.finish()
    }
}
