//! Lossless lexer for Keel.
//!
//! [`lex`] turns source text into [`SyntaxToken`]s with all whitespace and
//! comments attached as trivia, so concatenating the tokens' full text
//! reproduces the input byte for byte. The token list always ends with an
//! `Eof` token that owns any trailing trivia.
//!
//! Two layers, following the usual split:
//! - `raw_token`: a `logos` scanner that classifies every byte, trivia
//!   included.
//! - `cooker`: keyword resolution, contextual-keyword hints, literal checks
//!   and trivia attachment.
//!
//! Lexical problems never stop the scan. They become diagnostics on the
//! token they concern (CS1056, CS1010, CS1039, CS1035, CS1011, CS1012, and
//! the CS0078 warning).

mod cooker;
mod keywords;
mod lex_error;
mod raw_token;

use keel_syntax::SyntaxToken;

/// Lex `source` into tokens, ending with `Eof`.
pub fn lex(source: &str) -> Vec<SyntaxToken> {
    cooker::TokenCooker::new(source).cook_all()
}
