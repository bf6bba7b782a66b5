//! The `lex` command: the token stream with its trivia.

use std::fmt::Write as _;
use std::io::Write;

use keel_syntax::{SyntaxToken, Trivia};

use super::read_file;
use crate::config::DriverConfig;
use crate::DriverError;

/// Print the tokens of the single file named in `config`.
pub fn lex_file<O: Write>(config: &DriverConfig, out: &mut O) -> Result<(), DriverError> {
    let [path] = config.files.as_slice() else {
        return Err(DriverError::LexArity);
    };
    let source = read_file(path)?;
    let _ = writeln!(out, "Tokens for '{}':", path.display());
    let _ = write!(out, "{}", render_tokens(&source));
    Ok(())
}

/// One line per token: kind, text, span, then its trivia and any
/// diagnostics.
///
/// ```text
///   KwClass "class" @ 0..5 trailing[Whitespace]
///   Ident "C" @ 6..7 trailing[EndOfLine]
///   Eof "" @ 8..8
/// ```
pub fn render_tokens(source: &str) -> String {
    let tokens = keel_lexer::lex(source);
    let mut out = String::new();
    for token in &tokens {
        render_token(token, &mut out);
    }
    out
}

fn render_token(token: &SyntaxToken, out: &mut String) {
    let _ = write!(out, "  {:?} {:?} @ {:?}", token.kind(), token.text(), token.span());
    if let Some(keyword) = token.contextual_keyword() {
        let _ = write!(out, " ({keyword})");
    }
    write_trivia(out, "leading", token.leading());
    write_trivia(out, "trailing", token.trailing());
    for diagnostic in token.diagnostics() {
        let _ = write!(out, " !{}", diagnostic.code);
    }
    out.push('\n');
}

fn write_trivia(out: &mut String, label: &str, trivia: &[Trivia]) {
    if trivia.is_empty() {
        return;
    }
    let kinds: Vec<String> = trivia.iter().map(|t| format!("{:?}", t.kind())).collect();
    let _ = write!(out, " {label}[{}]", kinds.join(", "));
}
