use super::*;
use keel_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;
use smallvec::smallvec;

fn ws(text: &str) -> Trivia {
    Trivia::Whitespace(text.to_string())
}

fn eol() -> Trivia {
    Trivia::EndOfLine("\n".to_string())
}

#[test]
fn span_excludes_trivia() {
    let token = SyntaxToken::new(TokenKind::Ident, "args", 10)
        .with_leading(smallvec![ws("  ")])
        .with_trailing(smallvec![ws(" "), eol()]);
    assert_eq!(token.span(), Span::new(12, 16));
    assert_eq!(token.full_span(), Span::new(10, 18));
    assert_eq!(token.full_width(), 8);
    assert!(token.ends_line());
}

#[test]
fn trailing_without_newline_does_not_end_line() {
    let token = SyntaxToken::new(TokenKind::Semicolon, ";", 0).with_trailing(smallvec![ws(" ")]);
    assert!(!token.ends_line());
}

#[test]
fn missing_token_is_zero_width() {
    let token = SyntaxToken::missing(TokenKind::Semicolon, 7);
    assert!(token.is_missing());
    assert_eq!(token.text(), "");
    assert_eq!(token.span(), Span::point(7));
    assert_eq!(token.full_span(), Span::point(7));
}

#[test]
fn write_to_reproduces_trivia_and_text() {
    let token = SyntaxToken::new(TokenKind::KwClass, "class", 0)
        .with_leading(smallvec![Trivia::SingleLineComment("// c".into()), eol()])
        .with_trailing(smallvec![ws(" ")]);
    let mut out = String::new();
    token.write_to(&mut out);
    assert_eq!(out, "// c\nclass ");
}

#[test]
fn skipped_before_moves_full_start_back() {
    let skipped = SyntaxToken::new(TokenKind::Ident, "x", 4).with_trailing(smallvec![ws(" ")]);
    let token = SyntaxToken::new(TokenKind::Semicolon, ";", 6)
        .with_leading(smallvec![ws(" ")])
        .with_skipped_before(vec![skipped]);

    assert_eq!(token.full_start(), 4);
    assert_eq!(token.span(), Span::new(7, 8));
    assert!(token.flags().contains(TokenFlags::HAS_SKIPPED));
    assert_eq!(
        token.skipped_tokens().map(SyntaxToken::text).collect::<Vec<_>>(),
        vec!["x"]
    );

    let mut out = String::new();
    token.write_to(&mut out);
    assert_eq!(out, "x  ;");
}

#[test]
fn skipped_before_with_nothing_is_identity() {
    let token = SyntaxToken::new(TokenKind::Semicolon, ";", 3);
    let same = token.clone().with_skipped_before(Vec::new());
    assert_eq!(token, same);
}

#[test]
fn diagnostics_of_skipped_tokens_come_first() {
    let skipped = SyntaxToken::new(TokenKind::Ident, "x", 0)
        .with_diagnostic(Diagnostic::expected(",", Span::new(0, 1)));
    let token = SyntaxToken::new(TokenKind::RParen, ")", 1)
        .with_diagnostic(Diagnostic::new(ErrorCode::CS1002, Span::point(2)))
        .with_skipped_before(vec![skipped]);

    assert!(token.has_diagnostics());
    let mut out = Vec::new();
    token.collect_diagnostics(&mut out);
    let codes: Vec<_> = out.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::CS1003, ErrorCode::CS1002]);
}

#[test]
fn compose_joins_adjacent_tokens() {
    let first = SyntaxToken::new(TokenKind::Gt, ">", 5).with_leading(smallvec![ws(" ")]);
    let second = SyntaxToken::new(TokenKind::Gt, ">", 7).with_trailing(smallvec![ws(" ")]);
    let shr = first.compose(second, TokenKind::Shr);

    assert_eq!(shr.kind(), TokenKind::Shr);
    assert_eq!(shr.text(), ">>");
    assert_eq!(shr.span(), Span::new(6, 8));
    assert_eq!(shr.full_span(), Span::new(5, 9));
    assert!(shr.flags().contains(TokenFlags::COMPOSED));
}

#[test]
fn with_kind_keeps_text_and_trivia() {
    let token = SyntaxToken::new(TokenKind::Ident, "record", 0)
        .with_contextual(Some(ContextualKeyword::Record))
        .with_trailing(smallvec![ws(" ")]);
    let promoted = token.with_kind(TokenKind::KwRecord);
    assert_eq!(promoted.kind(), TokenKind::KwRecord);
    assert_eq!(promoted.text(), "record");
    assert_eq!(promoted.contextual_keyword(), Some(ContextualKeyword::Record));
    assert_eq!(promoted.full_width(), 7);
}

#[test]
fn non_ascii_widths_are_bytes() {
    let token = SyntaxToken::new(TokenKind::Ident, "héllo", 0);
    assert_eq!(token.text_width(), 6);
}
