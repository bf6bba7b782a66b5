use super::*;
use keel_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

fn cook(source: &str) -> Vec<SyntaxToken> {
    TokenCooker::new(source).cook_all()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    cook(source).iter().map(SyntaxToken::kind).collect()
}

fn codes(token: &SyntaxToken) -> Vec<ErrorCode> {
    token.diagnostics().iter().map(|d| d.code).collect()
}

#[test]
fn scanner_restarts_after_bad_character() {
    let items: Vec<_> = RawScanner::new("a#b").collect();
    assert_eq!(items.len(), 3);
    assert_eq!(items[1].token, None);
    assert_eq!((items[1].start, items[1].end), (1, 2));
    assert_eq!(items[2].token, Some(RawToken::Ident));
    assert_eq!((items[2].start, items[2].end), (2, 3));
}

#[test]
fn bad_multibyte_character_is_one_token() {
    let tokens = cook("a § b");
    assert_eq!(tokens[1].kind(), TokenKind::BadToken);
    assert_eq!(tokens[1].text(), "§");
    assert_eq!(codes(&tokens[1]), vec![ErrorCode::CS1056]);
    assert_eq!(tokens[1].diagnostics()[0].arg(), Some("§"));
}

#[test]
fn trailing_trivia_stops_after_line_break() {
    let tokens = cook("a // c\n  b");
    let a = &tokens[0];
    assert_eq!(a.trailing().len(), 3);
    assert!(a.ends_line());
    let b = &tokens[1];
    assert_eq!(b.leading(), &[Trivia::Whitespace("  ".into())]);
    assert_eq!(b.span(), Span::new(9, 10));
}

#[test]
fn blank_lines_lead_the_next_token() {
    let tokens = cook("a\n\n\nb");
    assert_eq!(tokens[0].trailing().len(), 1);
    assert_eq!(tokens[1].leading().len(), 2);
    assert_eq!(tokens[1].full_start(), 2);
}

#[test]
fn eof_owns_remaining_trivia() {
    let tokens = cook("x;\n  // end\n");
    let Some(eof) = tokens.last() else {
        panic!("no tokens");
    };
    assert_eq!(eof.kind(), TokenKind::Eof);
    assert_eq!(eof.leading().len(), 3);
    assert_eq!(eof.span(), Span::point(12));
}

#[test]
fn keywords_and_contextual_hints() {
    let tokens = cook("class record @class");
    assert_eq!(tokens[0].kind(), TokenKind::KwClass);
    assert_eq!(tokens[1].kind(), TokenKind::Ident);
    assert_eq!(tokens[1].contextual_keyword(), Some(ContextualKeyword::Record));
    assert_eq!(tokens[2].kind(), TokenKind::Ident);
    assert!(tokens[2].is_verbatim());
    assert_eq!(tokens[2].contextual_keyword(), None);
}

#[test]
fn verbatim_contextual_word_has_no_hint() {
    let tokens = cook("@with");
    assert_eq!(tokens[0].contextual_keyword(), None);
}

#[test]
fn literal_diagnostics() {
    assert_eq!(codes(&cook("''")[0]), vec![ErrorCode::CS1011]);
    assert_eq!(codes(&cook("'ab'")[0]), vec![ErrorCode::CS1012]);
    assert_eq!(codes(&cook("'a")[0]), vec![ErrorCode::CS1010]);
    assert_eq!(codes(&cook("\"abc\n")[0]), vec![ErrorCode::CS1010]);
    assert_eq!(codes(&cook("@\"abc")[0]), vec![ErrorCode::CS1039]);
    assert_eq!(codes(&cook("5l")[0]), vec![ErrorCode::CS0078]);
    assert!(codes(&cook("5L")[0]).is_empty());
    assert!(codes(&cook("5ul")[0]).contains(&ErrorCode::CS0078));
}

#[test]
fn unterminated_comment_is_reported_on_owner() {
    let tokens = cook("x /* open");
    assert_eq!(tokens.len(), 2);
    assert_eq!(codes(&tokens[0]), vec![ErrorCode::CS1035]);
    assert_eq!(tokens[0].diagnostics()[0].span, Span::new(2, 4));
}

#[test]
fn greater_than_sequences() {
    assert_eq!(
        kinds("a >> b >>= c"),
        vec![
            TokenKind::Ident,
            TokenKind::Gt,
            TokenKind::Gt,
            TokenKind::Ident,
            TokenKind::Gt,
            TokenKind::GtEq,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn hash_is_a_bad_token() {
    assert_eq!(kinds("#if"), vec![TokenKind::BadToken, TokenKind::KwIf, TokenKind::Eof]);
}

#[test]
fn int_suffixes() {
    assert_eq!(int_suffix("10"), "");
    assert_eq!(int_suffix("10UL"), "UL");
    assert_eq!(int_suffix("0xFFl"), "l");
}
