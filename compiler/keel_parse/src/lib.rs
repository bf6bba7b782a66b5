//! Recursive descent parser for Keel.
//!
//! The parser turns the lexer's tokens into a lossless [`SyntaxNode`] tree.
//! It never fails: every malformed input still yields a tree covering all
//! of the text, with missing tokens synthesized, stray tokens kept as
//! skipped trivia, and a diagnostic for each repair.
//!
//! Layout:
//! - `cursor`, `snapshot`, `context`, `progress`: token navigation and
//!   parser state
//! - `recovery`, `missing`: skipped tokens, list recovery and the
//!   missing-token factory
//! - `disambiguate`: pure lookahead predicates for the ambiguous spots
//! - `grammar`: the productions
//! - `validator`: context checks over the finished tree

mod context;
mod cursor;
mod disambiguate;
mod feature;
mod grammar;
mod missing;
mod progress;
mod recovery;
mod snapshot;
mod validator;

use keel_diagnostic::Diagnostic;
use keel_ir::{ContextualKeyword, ParseOptions, TokenKind};
use keel_syntax::{SyntaxNode, SyntaxToken};
use tracing::debug;

use crate::context::ParseContext;
use crate::cursor::Cursor;
use crate::recovery::TokenSet;

pub use validator::validate;

/// Result of a parse: the tree plus the validator's findings.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// A `CompilationUnit` for [`parse`]; the fragment's own node for
    /// [`parse_expression`] and [`parse_statement`].
    pub root: SyntaxNode,
    /// End of input for fragment parses, carrying any trailing trivia and
    /// leftover tokens. A compilation unit owns its `Eof` as last child.
    pub eof: Option<SyntaxToken>,
    /// Diagnostics from the contextual validator.
    pub contextual: Vec<Diagnostic>,
}

impl ParseResult {
    /// All diagnostics, tree and contextual, ordered by span start.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut all = self.root.collect_diagnostics();
        if let Some(eof) = &self.eof {
            eof.collect_diagnostics(&mut all);
        }
        all.extend(self.contextual.iter().cloned());
        all.sort_by_key(|d| d.span.start);
        all
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics().iter().any(Diagnostic::is_error)
    }

    /// The parsed text, reproduced from the tree.
    pub fn text(&self) -> String {
        let mut out = self.root.text();
        if let Some(eof) = &self.eof {
            eof.write_to(&mut out);
        }
        out
    }
}

/// Parse a whole compilation unit.
pub fn parse(source: &str, options: ParseOptions) -> ParseResult {
    parse_tokens(keel_lexer::lex(source), options)
}

/// Parse a compilation unit from an already-lexed token list.
pub fn parse_tokens(tokens: Vec<SyntaxToken>, options: ParseOptions) -> ParseResult {
    let mut parser = Parser::new(tokens, options);
    let root = parser.compilation_unit();
    let contextual = validate(&root);
    ParseResult {
        root,
        eof: None,
        contextual,
    }
}

/// Parse `source` as a single expression.
pub fn parse_expression(source: &str, options: ParseOptions) -> ParseResult {
    let mut parser = Parser::new(keel_lexer::lex(source), options);
    let root = parser.expression();
    parser.finish_fragment(root)
}

/// Parse `source` as a single statement.
pub fn parse_statement(source: &str, options: ParseOptions) -> ParseResult {
    let mut parser = Parser::new(keel_lexer::lex(source), options);
    let root = parser.statement();
    parser.finish_fragment(root)
}

/// Parser state: the token cursor, the options, the context flags and the
/// tokens skipped since the last placed token.
pub(crate) struct Parser {
    cursor: Cursor,
    options: ParseOptions,
    context: ParseContext,
    skipped: Vec<SyntaxToken>,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<SyntaxToken>, options: ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            options,
            context: ParseContext::new(),
            skipped: Vec::new(),
        }
    }

    // Token access

    #[inline]
    pub(crate) fn current(&self) -> &SyntaxToken {
        self.cursor.current()
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    pub(crate) fn peek_kind(&self, offset: usize) -> TokenKind {
        self.cursor.peek_kind(offset)
    }

    #[inline]
    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub(crate) fn at_set(&self, set: TokenSet) -> bool {
        set.contains(self.current_kind())
    }

    /// The current token is the contextual word `keyword` (never true for
    /// a verbatim identifier).
    #[inline]
    pub(crate) fn at_contextual(&self, keyword: ContextualKeyword) -> bool {
        self.peek_contextual(0, keyword)
    }

    pub(crate) fn peek_contextual(&self, offset: usize, keyword: ContextualKeyword) -> bool {
        let token = self.cursor.peek(offset);
        token.kind() == TokenKind::Ident && token.contextual_keyword() == Some(keyword)
    }

    // Consumption

    /// Consume the current token for placement in the tree. Pending skipped
    /// tokens become its leading trivia.
    pub(crate) fn bump(&mut self) -> SyntaxToken {
        let token = self.cursor.advance();
        if self.skipped.is_empty() {
            token
        } else {
            token.with_skipped_before(std::mem::take(&mut self.skipped))
        }
    }

    /// Consume the current token, reclassified as `kind`.
    pub(crate) fn bump_as(&mut self, kind: TokenKind) -> SyntaxToken {
        self.bump().with_kind(kind)
    }

    /// Consume a contextual word as its keyword.
    pub(crate) fn bump_contextual(&mut self, keyword: ContextualKeyword) -> SyntaxToken {
        match keyword.keyword_kind() {
            Some(kind) => self.bump_as(kind),
            None => self.bump(),
        }
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> Option<SyntaxToken> {
        self.at(kind).then(|| self.bump())
    }

    /// Consume `kind`, or synthesize it missing with the standard
    /// expected-token diagnostic.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> SyntaxToken {
        if self.at(kind) {
            self.bump()
        } else {
            self.missing(kind)
        }
    }

    /// Consume an identifier (contextual words included) or synthesize one.
    pub(crate) fn expect_identifier(&mut self) -> SyntaxToken {
        self.expect(TokenKind::Ident)
    }

    /// Run `f` with `flag` added to the context.
    pub(crate) fn with_context<T>(&mut self, flag: ParseContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.context;
        self.context = saved.with(flag);
        let result = f(self);
        self.context = saved;
        result
    }

    /// Run `f` with `flag` removed from the context.
    pub(crate) fn without_context<T>(
        &mut self,
        flag: ParseContext,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = self.context;
        self.context = saved.without(flag);
        let result = f(self);
        self.context = saved;
        result
    }

    /// Take the end of input after a fragment parse. Leftover tokens are
    /// skipped; the first reports CS1022.
    fn finish_fragment(mut self, root: SyntaxNode) -> ParseResult {
        if !self.cursor.is_at_end() {
            debug!(kind = %self.current_kind(), "trailing tokens after fragment");
            self.skip_with(keel_diagnostic::ErrorCode::CS1022);
            while !self.cursor.is_at_end() {
                self.skip_token(None);
            }
        }
        let eof = self.bump();
        let contextual = validate(&root);
        ParseResult {
            root,
            eof: Some(eof),
            contextual,
        }
    }
}

#[cfg(test)]
mod tests;
