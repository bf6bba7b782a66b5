//! The missing-token factory.
//!
//! Every token recovery invents comes from here, so each one is zero-width,
//! flagged missing, and carries its own "expected" diagnostic. Position and
//! diagnostic placement follow two rules:
//!
//! - the token sits where the next placed token's full text will begin
//!   (the first pending skipped token, else the current token);
//! - the diagnostic covers the current token's text, except when the
//!   previous token ends its line or the current token is `Eof`: then it is
//!   a zero-width span right after the previous token's text.

use keel_diagnostic::{Diagnostic, ErrorCode};
use keel_ir::{Span, SyntaxKind, TokenKind};
use keel_syntax::{NodeBuilder, SyntaxNode, SyntaxToken};

use crate::Parser;

impl Parser {
    fn missing_position(&self) -> u32 {
        self.skipped
            .first()
            .map_or_else(|| self.current().full_start(), SyntaxToken::full_start)
    }

    /// Where an expected-token diagnostic points.
    pub(crate) fn missing_span(&self) -> Span {
        let current = self.current();
        match self.cursor.previous() {
            Some(previous) if previous.ends_line() || current.kind() == TokenKind::Eof => {
                Span::point(previous.span().end)
            }
            _ => current.span(),
        }
    }

    /// The standard diagnostic for a missing `kind`.
    pub(crate) fn expected_diagnostic(&self, kind: TokenKind) -> Diagnostic {
        let span = self.missing_span();
        match kind {
            TokenKind::Semicolon => Diagnostic::new(ErrorCode::CS1002, span),
            TokenKind::RParen => Diagnostic::new(ErrorCode::CS1026, span),
            TokenKind::LBrace => Diagnostic::new(ErrorCode::CS1514, span),
            TokenKind::RBrace => Diagnostic::new(ErrorCode::CS1513, span),
            TokenKind::Ident => {
                let current = self.current();
                if current.kind().is_reserved_keyword() {
                    Diagnostic::new(ErrorCode::CS1041, span).with_arg(current.text())
                } else {
                    Diagnostic::new(ErrorCode::CS1001, span)
                }
            }
            other => Diagnostic::expected(other.fixed_text().unwrap_or(other.display_name()), span),
        }
    }

    /// A missing `kind` with the standard expected-token diagnostic.
    pub(crate) fn missing(&self, kind: TokenKind) -> SyntaxToken {
        self.missing_with(kind, self.expected_diagnostic(kind))
    }

    /// A missing `kind` carrying `diagnostic` instead of the standard one.
    pub(crate) fn missing_with(&self, kind: TokenKind, diagnostic: Diagnostic) -> SyntaxToken {
        SyntaxToken::missing(kind, self.missing_position()).with_diagnostic(diagnostic)
    }

    /// A missing `kind` placed before `anchor`, a token already consumed.
    /// Used when a production reinterprets tokens it has read and must
    /// report what should have come before them.
    pub(crate) fn missing_before(anchor: &SyntaxToken, kind: TokenKind, diagnostic: Diagnostic) -> SyntaxToken {
        SyntaxToken::missing(kind, anchor.full_start()).with_diagnostic(diagnostic)
    }

    /// A type that is not there: an `IdentifierName` over a missing
    /// identifier, reporting CS1031.
    pub(crate) fn missing_type(&self) -> SyntaxNode {
        let diagnostic = Diagnostic::new(ErrorCode::CS1031, self.missing_span());
        identifier_name(self.missing_with(TokenKind::Ident, diagnostic))
    }

    /// An expression that is not there: CS1525 naming the current token, or
    /// CS1733 at end of input.
    pub(crate) fn missing_expression(&self) -> SyntaxNode {
        let current = self.current();
        let diagnostic = if current.kind() == TokenKind::Eof {
            Diagnostic::new(ErrorCode::CS1733, self.missing_span())
        } else {
            Diagnostic::new(ErrorCode::CS1525, self.missing_span()).with_arg(current.text())
        };
        identifier_name(self.missing_with(TokenKind::Ident, diagnostic))
    }
}

pub(crate) fn identifier_name(token: SyntaxToken) -> SyntaxNode {
    let mut b = NodeBuilder::new(SyntaxKind::IdentifierName);
    b.token(token);
    b.finish()
}
