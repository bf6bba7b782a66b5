//! Token cooking.
//!
//! Turns the raw scan into tree tokens:
//!
//! ```text
//! source → RawScanner → (RawToken | bad char, range) → cook → SyntaxToken
//! ```
//!
//! Trivia attachment follows one rule: a token's trailing trivia runs up to
//! and including the first line break after it; everything else is leading
//! trivia of the next token. The EOF token takes whatever is left, so every
//! byte of the source lands in exactly one token's text or trivia.

use keel_diagnostic::Diagnostic;
use keel_ir::{ContextualKeyword, Span, TokenKind};
use keel_syntax::{SyntaxToken, TokenFlags, Trivia, TriviaList};
use logos::Logos;

use crate::keywords;
use crate::lex_error;
use crate::raw_token::{CharScan, Closing, RawToken};

/// One scanned unit: a raw token, or `None` for a character nothing
/// matches.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct RawItem {
    pub token: Option<RawToken>,
    pub start: u32,
    pub end: u32,
}

impl RawItem {
    fn is_trivia(&self) -> bool {
        self.token.is_some_and(RawToken::is_trivia)
    }
}

/// Drives logos over the source. On a scan error it emits the offending
/// character as a bad item and restarts logos right after it, so an error
/// never swallows more than one character.
pub(crate) struct RawScanner<'src> {
    source: &'src str,
    base: usize,
    lexer: logos::Lexer<'src, RawToken>,
}

impl<'src> RawScanner<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        RawScanner {
            source,
            base: 0,
            lexer: RawToken::lexer(source),
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawItem;

    fn next(&mut self) -> Option<RawItem> {
        let result = self.lexer.next()?;
        let span = self.lexer.span();
        let start = self.base + span.start;
        match result {
            Ok(token) => Some(RawItem {
                token: Some(token),
                start: offset(start),
                end: offset(self.base + span.end),
            }),
            Err(()) => {
                let len = self
                    .source
                    .get(start..)
                    .and_then(|rest| rest.chars().next())
                    .map_or(1, char::len_utf8);
                let end = start + len;
                self.base = end;
                self.lexer = RawToken::lexer(self.source.get(end..).unwrap_or_default());
                Some(RawItem {
                    token: None,
                    start: offset(start),
                    end: offset(end),
                })
            }
        }
    }
}

#[inline]
fn offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

/// Cooks raw items into tokens with trivia attached.
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
    items: Vec<RawItem>,
    pos: usize,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        TokenCooker {
            source,
            items: RawScanner::new(source).collect(),
            pos: 0,
        }
    }

    /// Cook the whole source. The last token is always `Eof`.
    pub(crate) fn cook_all(mut self) -> Vec<SyntaxToken> {
        let mut tokens = Vec::with_capacity(self.items.len() / 2 + 1);
        let mut full_start = 0;
        loop {
            let mut diagnostics = Vec::new();
            let leading = self.trivia_run(false, &mut diagnostics);

            let Some(item) = self.items.get(self.pos).copied() else {
                let mut eof = SyntaxToken::new(TokenKind::Eof, "", full_start).with_leading(leading);
                for diagnostic in diagnostics {
                    eof = eof.with_diagnostic(diagnostic);
                }
                tokens.push(eof);
                return tokens;
            };
            self.pos += 1;

            let mut token = self.cook(item, full_start, &mut diagnostics);
            let trailing = self.trivia_run(true, &mut diagnostics);
            token = token.with_leading(leading).with_trailing(trailing);
            for diagnostic in diagnostics {
                token = token.with_diagnostic(diagnostic);
            }
            full_start += token.full_width();
            tokens.push(token);
        }
    }

    /// Collect consecutive trivia. Trailing runs stop after the first line
    /// break.
    fn trivia_run(&mut self, trailing: bool, diagnostics: &mut Vec<Diagnostic>) -> TriviaList {
        let mut out = TriviaList::new();
        while let Some(item) = self.items.get(self.pos).copied() {
            if !item.is_trivia() {
                break;
            }
            self.pos += 1;
            let text = self.text(item).to_string();
            let trivia = match item.token {
                Some(RawToken::Newline) => Trivia::EndOfLine(text),
                Some(RawToken::LineComment) => Trivia::SingleLineComment(text),
                Some(RawToken::BlockComment(closing)) => {
                    if closing != Closing::Closed {
                        diagnostics.push(lex_error::unterminated_comment(Span::new(
                            item.start,
                            item.start + 2,
                        )));
                    }
                    Trivia::MultiLineComment(text)
                }
                _ => Trivia::Whitespace(text),
            };
            let ends_line = trivia.is_end_of_line();
            out.push(trivia);
            if trailing && ends_line {
                break;
            }
        }
        out
    }

    fn text(&self, item: RawItem) -> &'src str {
        self.source
            .get(item.start as usize..item.end as usize)
            .unwrap_or_default()
    }

    fn cook(&self, item: RawItem, full_start: u32, diagnostics: &mut Vec<Diagnostic>) -> SyntaxToken {
        let text = self.text(item);
        let span = Span::new(item.start, item.end);
        let Some(raw) = item.token else {
            let ch = text.chars().next().unwrap_or('\u{FFFD}');
            diagnostics.push(lex_error::unexpected_character(span, ch));
            return SyntaxToken::new(TokenKind::BadToken, text, full_start);
        };

        let kind = match raw {
            RawToken::Ident => {
                if let Some(keyword) = keywords::lookup(text) {
                    keyword
                } else {
                    return SyntaxToken::new(TokenKind::Ident, text, full_start)
                        .with_contextual(ContextualKeyword::from_text(text));
                }
            }
            RawToken::VerbatimIdent => {
                return SyntaxToken::new(TokenKind::Ident, text, full_start)
                    .with_flags(TokenFlags::VERBATIM);
            }
            RawToken::Int => {
                if int_suffix(text).contains('l') {
                    diagnostics.push(lex_error::lowercase_long_suffix(span));
                }
                TokenKind::IntLiteral
            }
            RawToken::Real => TokenKind::RealLiteral,
            RawToken::String(closing) => {
                if closing != Closing::Closed {
                    diagnostics.push(lex_error::newline_in_constant(span));
                }
                TokenKind::StringLiteral
            }
            RawToken::VerbatimString(closing) => {
                if closing != Closing::Closed {
                    diagnostics.push(lex_error::unterminated_verbatim_string(span));
                }
                return SyntaxToken::new(TokenKind::StringLiteral, text, full_start)
                    .with_flags(TokenFlags::VERBATIM);
            }
            RawToken::Char(CharScan { closing, chars }) => {
                if closing != Closing::Closed {
                    diagnostics.push(lex_error::newline_in_constant(span));
                } else if chars == 0 {
                    diagnostics.push(lex_error::empty_char_literal(span));
                } else if chars > 1 {
                    diagnostics.push(lex_error::too_many_chars(span));
                }
                TokenKind::CharLiteral
            }
            punct => punctuation_kind(punct),
        };
        SyntaxToken::new(kind, text, full_start)
    }
}

/// The `u`/`l` suffix of an integer literal. Hex digits never include
/// either letter, so trailing letters are always the suffix.
fn int_suffix(text: &str) -> &str {
    let digits = text.trim_end_matches(['u', 'U', 'l', 'L']);
    &text[digits.len()..]
}

fn punctuation_kind(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Dot => TokenKind::Dot,
        RawToken::DotDot => TokenKind::DotDot,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::DoubleColon => TokenKind::DoubleColon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Question => TokenKind::Question,
        RawToken::DoubleQuestion => TokenKind::DoubleQuestion,
        RawToken::DoubleQuestionEq => TokenKind::DoubleQuestionEq,
        RawToken::FatArrow => TokenKind::FatArrow,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::PlusPlus => TokenKind::PlusPlus,
        RawToken::MinusMinus => TokenKind::MinusMinus,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Shl => TokenKind::Shl,
        RawToken::PlusEq => TokenKind::PlusEq,
        RawToken::MinusEq => TokenKind::MinusEq,
        RawToken::StarEq => TokenKind::StarEq,
        RawToken::SlashEq => TokenKind::SlashEq,
        RawToken::PercentEq => TokenKind::PercentEq,
        RawToken::AmpEq => TokenKind::AmpEq,
        RawToken::PipeEq => TokenKind::PipeEq,
        RawToken::CaretEq => TokenKind::CaretEq,
        RawToken::ShlEq => TokenKind::ShlEq,
        // Handled by `cook` before dispatching here.
        RawToken::Whitespace
        | RawToken::Newline
        | RawToken::LineComment
        | RawToken::BlockComment(_)
        | RawToken::Int
        | RawToken::Real
        | RawToken::Char(_)
        | RawToken::String(_)
        | RawToken::VerbatimString(_)
        | RawToken::Ident
        | RawToken::VerbatimIdent => TokenKind::BadToken,
    }
}

#[cfg(test)]
mod tests;
