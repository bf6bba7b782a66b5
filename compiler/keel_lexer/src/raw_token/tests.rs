use super::*;
use pretty_assertions::assert_eq;

fn scan(source: &str) -> Vec<(Result<RawToken, ()>, &str)> {
    let mut lexer = RawToken::lexer(source);
    let mut out = Vec::new();
    while let Some(token) = lexer.next() {
        out.push((token, lexer.slice()));
    }
    out
}

#[test]
fn trivia_is_not_skipped() {
    assert_eq!(
        scan("a \t// hi\r\nb"),
        vec![
            (Ok(RawToken::Ident), "a"),
            (Ok(RawToken::Whitespace), " \t"),
            (Ok(RawToken::LineComment), "// hi"),
            (Ok(RawToken::Newline), "\r\n"),
            (Ok(RawToken::Ident), "b"),
        ]
    );
}

#[test]
fn greater_than_is_never_doubled() {
    assert_eq!(
        scan(">>=>"),
        vec![
            (Ok(RawToken::Gt), ">"),
            (Ok(RawToken::GtEq), ">="),
            (Ok(RawToken::Gt), ">"),
        ]
    );
}

#[test]
fn longest_operator_wins() {
    let kinds: Vec<_> = scan("??= ?? ? <<= << => ::").into_iter().map(|(t, _)| t).collect();
    assert_eq!(
        kinds,
        vec![
            Ok(RawToken::DoubleQuestionEq),
            Ok(RawToken::Whitespace),
            Ok(RawToken::DoubleQuestion),
            Ok(RawToken::Whitespace),
            Ok(RawToken::Question),
            Ok(RawToken::Whitespace),
            Ok(RawToken::ShlEq),
            Ok(RawToken::Whitespace),
            Ok(RawToken::Shl),
            Ok(RawToken::Whitespace),
            Ok(RawToken::FatArrow),
            Ok(RawToken::Whitespace),
            Ok(RawToken::DoubleColon),
        ]
    );
}

#[test]
fn numbers() {
    assert_eq!(scan("0x1F")[0], (Ok(RawToken::Int), "0x1F"));
    assert_eq!(scan("10UL")[0], (Ok(RawToken::Int), "10UL"));
    assert_eq!(scan("1_000l")[0], (Ok(RawToken::Int), "1_000l"));
    assert_eq!(scan("1.5e3f")[0], (Ok(RawToken::Real), "1.5e3f"));
    assert_eq!(scan(".5")[0], (Ok(RawToken::Real), ".5"));
    assert_eq!(scan("2m")[0], (Ok(RawToken::Real), "2m"));
}

#[test]
fn range_does_not_eat_digits() {
    assert_eq!(
        scan("1..5"),
        vec![
            (Ok(RawToken::Int), "1"),
            (Ok(RawToken::DotDot), ".."),
            (Ok(RawToken::Int), "5"),
        ]
    );
}

#[test]
fn strings() {
    assert_eq!(scan(r#""a\"b" x"#)[0], (Ok(RawToken::String(Closing::Closed)), r#""a\"b""#));
    assert_eq!(scan("\"abc\nx")[0], (Ok(RawToken::String(Closing::Newline)), "\"abc"));
    assert_eq!(scan("\"abc")[0], (Ok(RawToken::String(Closing::Eof)), "\"abc"));
    assert_eq!(
        scan("@\"a\"\"b\nc\" d")[0],
        (Ok(RawToken::VerbatimString(Closing::Closed)), "@\"a\"\"b\nc\"")
    );
}

#[test]
fn char_literals_count_characters() {
    let closed = |chars| {
        Ok(RawToken::Char(CharScan {
            closing: Closing::Closed,
            chars,
        }))
    };
    assert_eq!(scan("'a'")[0], (closed(1), "'a'"));
    assert_eq!(scan(r"'\n'")[0], (closed(1), r"'\n'"));
    assert_eq!(scan("'é'")[0], (closed(1), "'é'"));
    assert_eq!(scan("''")[0], (closed(0), "''"));
    assert_eq!(scan("'ab'")[0], (closed(2), "'ab'"));
}

#[test]
fn block_comments() {
    assert_eq!(
        scan("/* a\n b */x")[0],
        (Ok(RawToken::BlockComment(Closing::Closed)), "/* a\n b */")
    );
    assert_eq!(
        scan("/* open")[0],
        (Ok(RawToken::BlockComment(Closing::Eof)), "/* open")
    );
}

#[test]
fn identifiers() {
    assert_eq!(scan("_x1")[0], (Ok(RawToken::Ident), "_x1"));
    assert_eq!(scan("@class")[0], (Ok(RawToken::VerbatimIdent), "@class"));
    assert_eq!(scan("größe")[0], (Ok(RawToken::Ident), "größe"));
}

#[test]
fn unknown_character_is_an_error() {
    assert_eq!(scan("#")[0].0, Err(()));
}
