#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use keel_lexer::lex;
use pretty_assertions::assert_eq;

fn cursor(source: &str) -> Cursor {
    Cursor::new(lex(source))
}

#[test]
fn peek_past_end_yields_eof() {
    let c = cursor("a b");
    assert_eq!(c.peek_kind(0), TokenKind::Ident);
    assert_eq!(c.peek_kind(2), TokenKind::Eof);
    assert_eq!(c.peek_kind(50), TokenKind::Eof);
}

#[test]
fn advance_stops_at_eof() {
    let mut c = cursor("a");
    assert_eq!(c.advance().text(), "a");
    assert!(c.is_at_end());
    assert_eq!(c.advance().kind(), TokenKind::Eof);
    assert_eq!(c.position(), 1);
}

#[test]
fn mark_and_reset_rewind() {
    let mut c = cursor("a b c");
    let start = c.mark();
    c.advance();
    c.advance();
    assert_eq!(c.current().text(), "c");
    c.reset(start);
    assert_eq!(c.current().text(), "a");
    assert_eq!(c.previous(), None);
}

#[test]
fn adjacency_ignores_eof_and_trivia() {
    let c = cursor(">> > >");
    assert!(c.adjacent(0));
    assert!(!c.adjacent(1));
    assert!(!c.adjacent(3));
}

#[test]
fn missing_eof_is_appended() {
    let c = Cursor::new(vec![SyntaxToken::new(TokenKind::Ident, "x", 0)]);
    assert_eq!(c.peek_kind(1), TokenKind::Eof);
    assert_eq!(c.peek(1).full_start(), 1);
}

#[test]
fn brackets_pair_by_kind() {
    let c = cursor("(a[b]{c}) d");
    assert_eq!(c.matching_close(0), Some(8));
    assert_eq!(c.matching_close(2), Some(4));
    assert_eq!(c.matching_close(5), Some(7));
    assert_eq!(c.matching_close(1), None);
}

#[test]
fn mismatched_closer_pairs_with_nothing() {
    assert_eq!(cursor("(a]").matching_close(0), None);
    let c = cursor("([)]");
    assert_eq!(c.matching_close(0), Some(2));
    assert_eq!(c.matching_close(1), None);
}

#[test]
fn pairing_is_relative_to_position() {
    let mut c = cursor("x (a)");
    c.advance();
    assert_eq!(c.matching_close(0), Some(2));
    assert_eq!(c.matching_close(40), None);
}
