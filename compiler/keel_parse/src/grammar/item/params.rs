//! Parameter lists.
//!
//! Parameters keep going across stray tokens, so a `{` that shows up where
//! `)` belongs is skipped rather than taken as a body. Only `}`, `;`, a
//! type keyword, `namespace` and the end of input abandon the list; those
//! are left for the enclosing member loop.

use keel_ir::{ContextualKeyword, SyntaxKind, TokenKind};
use keel_syntax::{NodeBuilder, SyntaxNode, SyntaxToken};

use crate::recovery::{ListRules, TokenSet, ANCHORS, TYPE_KEYWORDS, TYPE_START};
use crate::Parser;

const PARAMETER_LIST_ANCHORS: TokenSet = ANCHORS
    .union(TYPE_KEYWORDS)
    .union(TokenSet::of(&[TokenKind::KwNamespace]));

impl Parser {
    /// `(params)`. A missing `(` is reported and the list still parsed. A
    /// single stray token right before `(` is skipped in its place.
    pub(crate) fn parameter_list(&mut self) -> SyntaxNode {
        let open = if !self.at(TokenKind::LParen)
            && self.peek_kind(1) == TokenKind::LParen
            && !self.at_parameter_start()
            && !self.at_set(PARAMETER_LIST_ANCHORS)
        {
            self.skip_with_expected(TokenKind::LParen);
            self.bump()
        } else {
            self.expect(TokenKind::LParen)
        };
        self.parameter_list_from(open)
    }

    /// The rest of a parameter list whose `(` is already consumed.
    pub(crate) fn parameter_list_from(&mut self, open: SyntaxToken) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::ParameterList);
        b.token(open);
        let rules = ListRules::closed_by(TokenKind::RParen).anchors(PARAMETER_LIST_ANCHORS);
        self.separated_list(&mut b, &rules, Parser::at_parameter_start, Parser::parameter);
        b.token(self.expect(TokenKind::RParen));
        b.finish()
    }

    /// `[params]` of an indexer.
    pub(crate) fn bracketed_parameter_list(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::BracketedParameterList);
        b.token(self.expect(TokenKind::LBracket));
        let rules = ListRules::closed_by(TokenKind::RBracket).anchors(PARAMETER_LIST_ANCHORS);
        self.separated_list(&mut b, &rules, Parser::at_parameter_start, Parser::parameter);
        b.token(self.expect(TokenKind::RBracket));
        b.finish()
    }

    pub(crate) fn at_parameter_start(&self) -> bool {
        self.at_set(TYPE_START)
            || self.at_parameter_modifier()
            || self.at(TokenKind::LBracket)
    }

    fn at_parameter_modifier(&self) -> bool {
        match self.current_kind() {
            TokenKind::KwRef
            | TokenKind::KwOut
            | TokenKind::KwIn
            | TokenKind::KwParams
            | TokenKind::KwThis
            | TokenKind::KwReadonly => true,
            TokenKind::Ident => self.at_scoped_modifier(),
            _ => false,
        }
    }

    /// `scoped` followed by `ref`/`out`/`in`, or by a type and a name.
    pub(crate) fn at_scoped_modifier(&self) -> bool {
        if !self.at_contextual(ContextualKeyword::Scoped) {
            return false;
        }
        matches!(
            self.peek_kind(1),
            TokenKind::KwRef | TokenKind::KwOut | TokenKind::KwIn
        ) || self
            .scan_type(1)
            .is_some_and(|after| self.peek_kind(after) == TokenKind::Ident)
    }

    /// `[attrs] modifiers Type name [= default]`.
    pub(crate) fn parameter(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::Parameter);
        for attribute in self.attribute_lists() {
            b.node(attribute);
        }
        while self.at_parameter_modifier() {
            let modifier = if self.at(TokenKind::Ident) {
                self.bump_contextual(ContextualKeyword::Scoped)
            } else {
                self.bump()
            };
            b.token(modifier);
        }
        b.node(self.parse_type());
        b.token(self.expect_identifier());
        if self.at(TokenKind::Eq) {
            b.node(self.equals_value_clause());
        }
        b.finish()
    }
}
