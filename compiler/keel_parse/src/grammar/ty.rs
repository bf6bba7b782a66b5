//! Types and names.
//!
//! `int`, `A.B<C>`, `global::A`, `T[]`, `T[,]`, `T?`, `(int a, string b)`,
//! `ref readonly T`. Array and nullable suffixes stack left to right, so
//! `int?[]` is an array of nullable.

use keel_diagnostic::{Diagnostic, ErrorCode};
use keel_ir::{ContextualKeyword, SyntaxKind, TokenKind};
use keel_syntax::{NodeBuilder, SyntaxNode};
use keel_stack::ensure_sufficient_stack;

use crate::missing::identifier_name;
use crate::recovery::{ListRules, TokenSet, EXPRESSION_START, PREDEFINED_TYPES, TYPE_START};
use crate::Parser;

/// Where a type appears.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum TypeMode {
    /// Declarations, parameters, type arguments. Rank specifiers may hold
    /// (bogus) sizes.
    Declaration,
    /// After `is`/`as`, in casts and `typeof`. `?` is nullable only when no
    /// operand follows, and `[` only opens an empty rank.
    Expression,
}

const TYPE_ARGUMENT_ANCHORS: TokenSet = TokenSet::of(&[
    TokenKind::Semicolon,
    TokenKind::LBrace,
    TokenKind::RBrace,
    TokenKind::RParen,
    TokenKind::RBracket,
    TokenKind::Eof,
]);

impl Parser {
    pub(crate) fn at_type_start(&self) -> bool {
        self.at_set(TYPE_START)
    }

    /// A type in a declaration. Reports CS1031 and yields a missing name
    /// when no type starts here.
    pub(crate) fn parse_type(&mut self) -> SyntaxNode {
        self.type_in(TypeMode::Declaration)
    }

    pub(crate) fn type_in(&mut self, mode: TypeMode) -> SyntaxNode {
        ensure_sufficient_stack(|| {
            let base = self.non_array_type();
            self.type_suffixes(base, mode)
        })
    }

    /// A type without `[]` or `?` suffixes.
    pub(crate) fn non_array_type(&mut self) -> SyntaxNode {
        match self.current_kind() {
            kind if PREDEFINED_TYPES.contains(kind) => {
                let mut b = NodeBuilder::new(SyntaxKind::PredefinedType);
                b.token(self.bump());
                b.finish()
            }
            TokenKind::Ident => self.type_name(),
            TokenKind::LParen => self.tuple_type(),
            TokenKind::KwRef => {
                let mut b = NodeBuilder::new(SyntaxKind::RefType);
                b.token(self.bump());
                if let Some(readonly) = self.eat(TokenKind::KwReadonly) {
                    b.token(readonly);
                }
                b.node(self.parse_type());
                b.finish()
            }
            _ => self.missing_type(),
        }
    }

    /// Apply `?` and rank suffixes to `base`.
    pub(crate) fn type_suffixes(&mut self, base: SyntaxNode, mode: TypeMode) -> SyntaxNode {
        let mut ty = base;
        loop {
            match self.current_kind() {
                TokenKind::Question if self.nullable_allowed(mode) => {
                    let mut b = NodeBuilder::new(SyntaxKind::NullableType);
                    b.node(ty).token(self.bump());
                    ty = b.finish();
                }
                TokenKind::LBracket if mode == TypeMode::Declaration || self.at_empty_rank() => {
                    let mut b = NodeBuilder::new(SyntaxKind::ArrayType);
                    b.node(ty);
                    while self.at(TokenKind::LBracket)
                        && (mode == TypeMode::Declaration || self.at_empty_rank())
                    {
                        b.node(self.rank_specifier(false));
                    }
                    ty = b.finish();
                }
                _ => return ty,
            }
        }
    }

    fn nullable_allowed(&self, mode: TypeMode) -> bool {
        match mode {
            TypeMode::Declaration => true,
            TypeMode::Expression => !EXPRESSION_START.contains(self.peek_kind(1)),
        }
    }

    /// `[` `,`* `]` at the current token.
    pub(crate) fn at_empty_rank(&self) -> bool {
        if !self.at(TokenKind::LBracket) {
            return false;
        }
        let mut offset = 1;
        while self.peek_kind(offset) == TokenKind::Comma {
            offset += 1;
        }
        self.peek_kind(offset) == TokenKind::RBracket
    }

    /// `[`, sizes separated by `,`, `]`. Sizes are only meaningful when
    /// creating an array; anywhere else each one reports CS0270.
    pub(crate) fn rank_specifier(&mut self, allow_sizes: bool) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::ArrayRankSpecifier);
        b.token(self.bump());
        loop {
            if matches!(self.current_kind(), TokenKind::Comma | TokenKind::RBracket) {
                b.node(NodeBuilder::new(SyntaxKind::OmittedArraySizeExpression).finish());
            } else if self.at_set(EXPRESSION_START) {
                let size = self.expression();
                b.node(match size.span() {
                    Some(span) if !allow_sizes => {
                        size.with_diagnostic(Diagnostic::new(ErrorCode::CS0270, span))
                    }
                    _ => size,
                });
            } else {
                break;
            }
            match self.eat(TokenKind::Comma) {
                Some(comma) => {
                    b.token(comma);
                }
                None => break,
            }
        }
        b.token(self.expect(TokenKind::RBracket));
        b.finish()
    }

    /// `A`, `A<T>`, `A.B`, `global::A.B<C>` in a type position.
    pub(crate) fn type_name(&mut self) -> SyntaxNode {
        let mut name = if self.peek_kind(1) == TokenKind::DoubleColon {
            let alias = if self.at_contextual(ContextualKeyword::Global) {
                self.bump_contextual(ContextualKeyword::Global)
            } else {
                self.bump()
            };
            let mut b = NodeBuilder::new(SyntaxKind::AliasQualifiedName);
            b.node(identifier_name(alias));
            b.token(self.bump());
            b.node(self.simple_type_name());
            b.finish()
        } else {
            self.simple_type_name()
        };
        while self.at(TokenKind::Dot) && self.peek_kind(1) == TokenKind::Ident {
            let mut b = NodeBuilder::new(SyntaxKind::QualifiedName);
            b.node(name);
            b.token(self.bump());
            b.node(self.simple_type_name());
            name = b.finish();
        }
        name
    }

    /// An identifier, with a type argument list when `<` follows.
    fn simple_type_name(&mut self) -> SyntaxNode {
        let ident = self.expect_identifier();
        if self.at(TokenKind::Lt) {
            let mut b = NodeBuilder::new(SyntaxKind::GenericName);
            b.token(ident);
            b.node(self.type_argument_list());
            b.finish()
        } else {
            identifier_name(ident)
        }
    }

    /// `<T, U>`.
    pub(crate) fn type_argument_list(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::TypeArgumentList);
        b.token(self.bump());
        let rules = ListRules::closed_by(TokenKind::Gt).anchors(TYPE_ARGUMENT_ANCHORS);
        self.separated_list(&mut b, &rules, Parser::at_type_start, Parser::parse_type);
        b.token(self.expect(TokenKind::Gt));
        b.finish()
    }

    /// `(int a, string b)`. Fewer than two elements report CS8124; `()`
    /// also gets a missing element type.
    fn tuple_type(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::TupleType);
        b.token(self.bump());
        let mut elements = 0usize;
        let rules = ListRules::closed_by(TokenKind::RParen);
        self.separated_list(&mut b, &rules, Parser::at_type_start, |p| {
            elements += 1;
            let mut element = NodeBuilder::new(SyntaxKind::TupleElement);
            element.node(p.parse_type());
            if p.at(TokenKind::Ident) {
                element.token(p.bump());
            }
            element.finish()
        });
        if elements == 0 {
            let mut element = NodeBuilder::new(SyntaxKind::TupleElement);
            element.node(self.missing_type());
            b.node(element.finish());
        }
        b.token(self.expect(TokenKind::RParen));
        let tuple = b.finish();
        if elements < 2 {
            if let Some(span) = tuple.span() {
                return tuple.with_diagnostic(Diagnostic::new(ErrorCode::CS8124, span));
            }
        }
        tuple
    }
}
