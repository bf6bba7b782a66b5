//! Raw token definition.
//!
//! `RawToken` is the logos-derived scanner output. Unlike a compiler lexer
//! it does not skip anything: whitespace, line breaks and comments come out
//! as tokens so the cooker can attach them as trivia.
//!
//! Keywords are not listed here. Every word scans as [`RawToken::Ident`] and
//! the cooker resolves reserved keywords through [`crate::keywords`].

use logos::{Lexer, Logos};

/// How a quoted literal or block comment ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Closing {
    Closed,
    /// Stopped before a line break (the break is not part of the token).
    Newline,
    /// Ran to end of input.
    Eof,
}

/// Result of scanning a character literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct CharScan {
    pub closing: Closing,
    /// Characters between the quotes, an escape sequence counting as one.
    pub chars: u32,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\x0B\x0C]+")]
    Whitespace,

    #[regex(r"\r\n|\r|\n")]
    Newline,

    #[regex(r"//[^\r\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment(Closing),

    // Punctuation
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(".")]
    Dot,
    #[token("..")]
    DotDot,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("::")]
    DoubleColon,
    #[token(";")]
    Semicolon,
    #[token("?")]
    Question,
    #[token("??")]
    DoubleQuestion,
    #[token("??=")]
    DoubleQuestionEq,
    #[token("=>")]
    FatArrow,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    // `>>`, `>>=` and `>>>` are never lexed as one token: the parser
    // composes them from adjacent `>` so that `A<B<C>>` closes two type
    // argument lists.
    #[token(">")]
    Gt,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<<")]
    Shl,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,
    #[token("<<=")]
    ShlEq,

    // Numeric literals
    #[regex(r"[0-9][0-9_]*([uU][lL]?|[lL][uU]?)?")]
    #[regex(r"0[xX][0-9a-fA-F_]+([uU][lL]?|[lL][uU]?)?")]
    #[regex(r"0[bB][01_]+([uU][lL]?|[lL][uU]?)?")]
    Int,

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[fFdDmM]?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[fFdDmM]?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+[fFdDmM]?")]
    #[regex(r"[0-9][0-9_]*[fFdDmM]")]
    Real,

    #[token("'", char_literal)]
    Char(CharScan),

    #[token("\"", regular_string)]
    String(Closing),

    #[token("@\"", verbatim_string)]
    VerbatimString(Closing),

    // Any non-ASCII character is accepted as an identifier character.
    #[regex(r"[a-zA-Z_\u{80}-\u{10FFFF}][a-zA-Z0-9_\u{80}-\u{10FFFF}]*")]
    Ident,

    #[regex(r"@[a-zA-Z_\u{80}-\u{10FFFF}][a-zA-Z0-9_\u{80}-\u{10FFFF}]*")]
    VerbatimIdent,
}

impl RawToken {
    pub(crate) fn is_trivia(self) -> bool {
        matches!(
            self,
            RawToken::Whitespace
                | RawToken::Newline
                | RawToken::LineComment
                | RawToken::BlockComment(_)
        )
    }
}

fn block_comment(lex: &mut Lexer<'_, RawToken>) -> Closing {
    let rest = lex.remainder();
    if let Some(end) = rest.find("*/") {
        lex.bump(end + 2);
        Closing::Closed
    } else {
        lex.bump(rest.len());
        Closing::Eof
    }
}

/// Scan the body of a quoted literal after its opening quote. Stops after
/// the closing `quote`, or before a line break. A backslash escapes the
/// next character unless that character is a line break.
fn scan_quoted(rest: &[u8], quote: u8) -> (usize, Closing, u32) {
    let mut i = 0;
    let mut chars = 0;
    while i < rest.len() {
        match rest[i] {
            b if b == quote => return (i + 1, Closing::Closed, chars),
            b'\n' | b'\r' => return (i, Closing::Newline, chars),
            b'\\' if !matches!(rest.get(i + 1), Some(b'\n' | b'\r') | None) => {
                chars += 1;
                i += 1;
                // Skip the escaped character, then any continuation bytes.
                i += 1;
                while i < rest.len() && is_continuation(rest[i]) {
                    i += 1;
                }
            }
            b => {
                if !is_continuation(b) {
                    chars += 1;
                }
                i += 1;
            }
        }
    }
    (rest.len(), Closing::Eof, chars)
}

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

fn regular_string(lex: &mut Lexer<'_, RawToken>) -> Closing {
    let (len, closing, _) = scan_quoted(lex.remainder().as_bytes(), b'"');
    lex.bump(len);
    closing
}

fn char_literal(lex: &mut Lexer<'_, RawToken>) -> CharScan {
    let (len, closing, chars) = scan_quoted(lex.remainder().as_bytes(), b'\'');
    lex.bump(len);
    CharScan { closing, chars }
}

/// `@"..."`: no escapes except `""`, and line breaks are allowed.
fn verbatim_string(lex: &mut Lexer<'_, RawToken>) -> Closing {
    let rest = lex.remainder().as_bytes();
    let mut i = 0;
    while i < rest.len() {
        if rest[i] == b'"' {
            if rest.get(i + 1) == Some(&b'"') {
                i += 2;
                continue;
            }
            lex.bump(i + 1);
            return Closing::Closed;
        }
        i += 1;
    }
    lex.bump(rest.len());
    Closing::Eof
}

#[cfg(test)]
mod tests;
