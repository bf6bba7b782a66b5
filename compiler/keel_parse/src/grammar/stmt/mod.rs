//! Statements.
//!
//! Keyword statements dispatch on their keyword. Everything else is a
//! local declaration, a local function or an expression statement,
//! decided by the lookahead in `disambiguate` (see `local.rs`).

mod local;

use keel_diagnostic::{Diagnostic, ErrorCode};
use keel_ir::{ContextualKeyword, SyntaxKind, TokenKind};
use keel_stack::ensure_sufficient_stack;
use keel_syntax::{NodeBuilder, SyntaxNode};

use crate::context::ParseContext;
use crate::disambiguate::LocalShape;
use crate::recovery::STATEMENT_START;
use crate::Parser;

impl Parser {
    /// Run `f` as the body of a method, local function or lambda: the
    /// enclosing type body, top level and asyncness no longer apply.
    pub(crate) fn in_body<T>(&mut self, is_async: bool, f: impl FnOnce(&mut Self) -> T) -> T {
        let enclosing = ParseContext::IN_TYPE_BODY
            .with(ParseContext::TOP_LEVEL)
            .with(ParseContext::IN_ASYNC);
        self.without_context(enclosing, |p| {
            if is_async {
                p.with_context(ParseContext::IN_ASYNC, f)
            } else {
                f(p)
            }
        })
    }

    pub(crate) fn body_block(&mut self, is_async: bool) -> SyntaxNode {
        self.in_body(is_async, Parser::block)
    }

    /// Tokens that may begin a statement inside a block.
    pub(crate) fn at_statement_start(&self) -> bool {
        self.at_set(STATEMENT_START)
            && !matches!(self.current_kind(), TokenKind::KwExplicit | TokenKind::KwImplicit)
    }

    /// `{ statements }`.
    pub(crate) fn block(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::Block);
        b.token(self.expect(TokenKind::LBrace));
        while !self.at(TokenKind::RBrace) && !self.cursor.is_at_end() {
            let start = self.cursor.mark();
            if self.at_statement_start() {
                b.node(self.statement());
            } else {
                self.skip_with(ErrorCode::CS1525);
            }
            self.ensure_progress(start, ErrorCode::CS1525);
        }
        b.token(self.expect(TokenKind::RBrace));
        b.finish()
    }

    pub(crate) fn statement(&mut self) -> SyntaxNode {
        ensure_sufficient_stack(|| match self.current_kind() {
            TokenKind::LBrace => self.block(),
            TokenKind::Semicolon => {
                let mut b = NodeBuilder::new(SyntaxKind::EmptyStatement);
                b.token(self.bump());
                b.finish()
            }
            TokenKind::LBracket => self.attributed_statement(),
            TokenKind::KwIf => self.if_statement(),
            TokenKind::KwWhile => self.while_statement(),
            TokenKind::KwDo => self.do_statement(),
            TokenKind::KwFor => self.for_statement(),
            TokenKind::KwForeach => self.foreach_statement(),
            TokenKind::KwReturn => self.jump_statement(SyntaxKind::ReturnStatement, true),
            TokenKind::KwThrow => self.jump_statement(SyntaxKind::ThrowStatement, true),
            TokenKind::KwBreak => self.jump_statement(SyntaxKind::BreakStatement, false),
            TokenKind::KwContinue => self.jump_statement(SyntaxKind::ContinueStatement, false),
            TokenKind::KwGoto => self.goto_statement(),
            TokenKind::KwTry => self.try_statement(),
            TokenKind::KwSwitch => self.switch_statement(),
            TokenKind::KwLock => self.lock_statement(),
            TokenKind::KwUsing => self.using_statement(),
            TokenKind::KwUnsafe if self.peek_kind(1) == TokenKind::LBrace => {
                self.keyword_block(SyntaxKind::UnsafeStatement)
            }
            TokenKind::KwChecked if self.peek_kind(1) == TokenKind::LBrace => {
                self.keyword_block(SyntaxKind::CheckedStatement)
            }
            TokenKind::KwUnchecked if self.peek_kind(1) == TokenKind::LBrace => {
                self.keyword_block(SyntaxKind::UncheckedStatement)
            }
            TokenKind::Ident if self.at_yield_statement() => self.yield_statement(),
            TokenKind::Ident if self.peek_kind(1) == TokenKind::Colon => self.labeled_statement(),
            _ => self.declaration_or_expression_statement(),
        })
    }

    /// `expr;`.
    pub(crate) fn expression_statement(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::ExpressionStatement);
        b.node(self.expression());
        b.token(self.expect(TokenKind::Semicolon));
        b.finish()
    }

    /// `( expr )` of `if`, `while`, `switch`, `lock`.
    fn parenthesized_condition(&mut self, b: &mut NodeBuilder) {
        b.token(self.expect(TokenKind::LParen));
        b.node(self.expression());
        b.token(self.expect(TokenKind::RParen));
    }

    fn if_statement(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::IfStatement);
        b.token(self.bump());
        self.parenthesized_condition(&mut b);
        b.node(self.statement());
        if self.at(TokenKind::KwElse) {
            let mut clause = NodeBuilder::new(SyntaxKind::ElseClause);
            clause.token(self.bump());
            clause.node(self.statement());
            b.node(clause.finish());
        }
        b.finish()
    }

    fn while_statement(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::WhileStatement);
        b.token(self.bump());
        self.parenthesized_condition(&mut b);
        b.node(self.statement());
        b.finish()
    }

    fn do_statement(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::DoStatement);
        b.token(self.bump());
        b.node(self.statement());
        b.token(self.expect(TokenKind::KwWhile));
        self.parenthesized_condition(&mut b);
        b.token(self.expect(TokenKind::Semicolon));
        b.finish()
    }

    /// `for (init; condition; increments) body`. The initializer is a
    /// declaration when it reads as one.
    fn for_statement(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::ForStatement);
        b.token(self.bump());
        b.token(self.expect(TokenKind::LParen));
        if self.local_shape_at(0) == Some(LocalShape::Variable) {
            let ty = self.parse_type();
            b.node(self.variable_declaration(ty));
        } else {
            self.expression_list(&mut b, TokenKind::Semicolon);
        }
        b.token(self.expect(TokenKind::Semicolon));
        if !self.at(TokenKind::Semicolon) {
            b.node(self.expression());
        }
        b.token(self.expect(TokenKind::Semicolon));
        self.expression_list(&mut b, TokenKind::RParen);
        b.token(self.expect(TokenKind::RParen));
        b.node(self.statement());
        b.finish()
    }

    /// Comma-separated expressions up to `end`, which is not consumed.
    fn expression_list(&mut self, b: &mut NodeBuilder, end: TokenKind) {
        if self.at(end) {
            return;
        }
        loop {
            b.node(self.expression());
            match self.eat(TokenKind::Comma) {
                Some(comma) => {
                    b.token(comma);
                }
                None => return,
            }
        }
    }

    fn foreach_statement(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::ForEachStatement);
        b.token(self.bump());
        b.token(self.expect(TokenKind::LParen));
        b.node(self.parse_type());
        b.token(self.expect_identifier());
        b.token(self.expect(TokenKind::KwIn));
        b.node(self.expression());
        b.token(self.expect(TokenKind::RParen));
        b.node(self.statement());
        b.finish()
    }

    /// `return [e];`, `throw [e];`, `break;`, `continue;`.
    fn jump_statement(&mut self, kind: SyntaxKind, takes_operand: bool) -> SyntaxNode {
        let mut b = NodeBuilder::new(kind);
        b.token(self.bump());
        if takes_operand && !self.at(TokenKind::Semicolon) {
            b.node(self.expression());
        }
        b.token(self.expect(TokenKind::Semicolon));
        b.finish()
    }

    /// `goto label;`, `goto case e;`, `goto default;`.
    fn goto_statement(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::GotoStatement);
        b.token(self.bump());
        match self.current_kind() {
            TokenKind::KwCase => {
                b.token(self.bump());
                b.node(self.expression());
            }
            TokenKind::KwDefault => {
                b.token(self.bump());
            }
            _ => {
                b.token(self.expect_identifier());
            }
        }
        b.token(self.expect(TokenKind::Semicolon));
        b.finish()
    }

    /// `try { } catch (E e) when (f) { } finally { }`. Without any clause
    /// the statement reports CS1524 where a clause should start.
    fn try_statement(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::TryStatement);
        b.token(self.bump());
        b.node(self.block());
        let mut clauses = 0usize;
        while self.at(TokenKind::KwCatch) {
            b.node(self.catch_clause());
            clauses += 1;
        }
        if self.at(TokenKind::KwFinally) {
            let mut finally = NodeBuilder::new(SyntaxKind::FinallyClause);
            finally.token(self.bump());
            finally.node(self.block());
            b.node(finally.finish());
            clauses += 1;
        }
        if clauses == 0 {
            b.diagnostic(Diagnostic::new(ErrorCode::CS1524, self.missing_span()));
        }
        b.finish()
    }

    fn catch_clause(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::CatchClause);
        b.token(self.bump());
        if self.at(TokenKind::LParen) {
            let mut declaration = NodeBuilder::new(SyntaxKind::CatchDeclaration);
            declaration.token(self.bump());
            declaration.node(self.parse_type());
            if let Some(name) = self.eat(TokenKind::Ident) {
                declaration.token(name);
            }
            declaration.token(self.expect(TokenKind::RParen));
            b.node(declaration.finish());
        }
        if self.at_contextual(ContextualKeyword::When) && self.peek_kind(1) == TokenKind::LParen {
            let mut filter = NodeBuilder::new(SyntaxKind::CatchFilterClause);
            filter.token(self.bump_contextual(ContextualKeyword::When));
            self.parenthesized_condition(&mut filter);
            b.node(filter.finish());
        }
        b.node(self.block());
        b.finish()
    }

    /// `switch (e) { case 1: default: ... }`.
    fn switch_statement(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::SwitchStatement);
        b.token(self.bump());
        self.parenthesized_condition(&mut b);
        b.token(self.expect(TokenKind::LBrace));
        while !self.at(TokenKind::RBrace) && !self.cursor.is_at_end() {
            let start = self.cursor.mark();
            if self.at_switch_label() {
                b.node(self.switch_section());
            } else {
                self.skip_with(ErrorCode::CS1525);
            }
            self.ensure_progress(start, ErrorCode::CS1525);
        }
        b.token(self.expect(TokenKind::RBrace));
        b.finish()
    }

    fn at_switch_label(&self) -> bool {
        match self.current_kind() {
            TokenKind::KwCase => true,
            TokenKind::KwDefault => self.peek_kind(1) == TokenKind::Colon,
            _ => false,
        }
    }

    /// One or more labels, then statements up to the next label.
    fn switch_section(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::SwitchSection);
        while self.at_switch_label() {
            let label = if self.at(TokenKind::KwCase) {
                let mut label = NodeBuilder::new(SyntaxKind::CaseSwitchLabel);
                label.token(self.bump());
                label.node(self.expression());
                label.token(self.expect(TokenKind::Colon));
                label
            } else {
                let mut label = NodeBuilder::new(SyntaxKind::DefaultSwitchLabel);
                label.token(self.bump());
                label.token(self.bump());
                label
            };
            b.node(label.finish());
        }
        while !self.at_switch_label() && !self.at(TokenKind::RBrace) && !self.cursor.is_at_end() {
            let start = self.cursor.mark();
            if self.at_statement_start() {
                b.node(self.statement());
            } else {
                self.skip_with(ErrorCode::CS1525);
            }
            self.ensure_progress(start, ErrorCode::CS1525);
        }
        b.finish()
    }

    fn lock_statement(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::LockStatement);
        b.token(self.bump());
        self.parenthesized_condition(&mut b);
        b.node(self.statement());
        b.finish()
    }

    /// `using (resource) body`, or the declaration form `using T x = e;`.
    fn using_statement(&mut self) -> SyntaxNode {
        if self.peek_kind(1) != TokenKind::LParen {
            let using = self.bump();
            let mut b = NodeBuilder::new(SyntaxKind::LocalDeclarationStatement);
            b.token(using);
            let ty = self.parse_type();
            b.node(self.variable_declaration(ty));
            b.token(self.expect(TokenKind::Semicolon));
            return b.finish();
        }
        let mut b = NodeBuilder::new(SyntaxKind::UsingStatement);
        b.token(self.bump());
        b.token(self.bump());
        if self.local_shape_at(0) == Some(LocalShape::Variable) {
            let ty = self.parse_type();
            b.node(self.variable_declaration(ty));
        } else {
            b.node(self.expression());
        }
        b.token(self.expect(TokenKind::RParen));
        b.node(self.statement());
        b.finish()
    }

    /// `unsafe { }`, `checked { }`, `unchecked { }`.
    fn keyword_block(&mut self, kind: SyntaxKind) -> SyntaxNode {
        let mut b = NodeBuilder::new(kind);
        b.token(self.bump());
        b.node(self.block());
        b.finish()
    }

    fn at_yield_statement(&self) -> bool {
        self.at_contextual(ContextualKeyword::Yield)
            && matches!(self.peek_kind(1), TokenKind::KwReturn | TokenKind::KwBreak)
    }

    /// `yield return e;`, `yield break;`.
    fn yield_statement(&mut self) -> SyntaxNode {
        let kind = if self.peek_kind(1) == TokenKind::KwReturn {
            SyntaxKind::YieldReturnStatement
        } else {
            SyntaxKind::YieldBreakStatement
        };
        let mut b = NodeBuilder::new(kind);
        b.token(self.bump_contextual(ContextualKeyword::Yield));
        b.token(self.bump());
        if kind == SyntaxKind::YieldReturnStatement {
            b.node(self.expression());
        }
        b.token(self.expect(TokenKind::Semicolon));
        b.finish()
    }

    fn labeled_statement(&mut self) -> SyntaxNode {
        let mut b = NodeBuilder::new(SyntaxKind::LabeledStatement);
        b.token(self.bump());
        b.token(self.bump());
        b.node(self.statement());
        b.finish()
    }
}
