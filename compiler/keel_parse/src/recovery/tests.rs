use super::*;
use crate::missing::identifier_name;
use keel_ir::{ParseOptions, SyntaxKind};
use keel_lexer::lex;
use pretty_assertions::assert_eq;

fn parser(source: &str) -> Parser {
    Parser::new(lex(source), ParseOptions::default())
}

/// Parse `source` as a list of identifiers closed by `)`, then place the
/// close token so pending skipped tokens land in the tree.
fn ident_list(source: &str, rules: ListRules) -> SyntaxNode {
    let mut p = parser(source);
    let mut b = NodeBuilder::new(SyntaxKind::ArgumentList);
    p.separated_list(
        &mut b,
        &rules,
        |p| p.at(TokenKind::Ident),
        |p| identifier_name(p.expect_identifier()),
    );
    b.token(p.bump());
    b.finish()
}

fn codes(node: &SyntaxNode) -> Vec<(ErrorCode, Option<String>)> {
    node.collect_diagnostics()
        .into_iter()
        .map(|d| (d.code, d.arg().map(str::to_owned)))
        .collect()
}

fn names(node: &SyntaxNode) -> usize {
    node.child_nodes()
        .filter(|n| n.kind() == SyntaxKind::IdentifierName)
        .count()
}

// TokenSet

#[test]
fn token_set_membership() {
    const SET: TokenSet = TokenSet::of(&[TokenKind::Plus, TokenKind::Minus]);
    assert!(SET.contains(TokenKind::Plus));
    assert!(SET.contains(TokenKind::Minus));
    assert!(!SET.contains(TokenKind::Star));
    assert!(!TokenSet::new().contains(TokenKind::Plus));
}

#[test]
fn token_set_union_and_with() {
    let set = TokenSet::new().with(TokenKind::Comma).union(ANCHORS);
    assert!(set.contains(TokenKind::Comma));
    assert!(set.contains(TokenKind::Semicolon));
    assert!(set.contains(TokenKind::Eof));
    assert!(!set.contains(TokenKind::RParen));
}

#[test]
fn statement_start_covers_expressions_and_keywords() {
    assert!(STATEMENT_START.contains(TokenKind::Ident));
    assert!(STATEMENT_START.contains(TokenKind::KwReturn));
    assert!(STATEMENT_START.contains(TokenKind::LBrace));
    assert!(!STATEMENT_START.contains(TokenKind::RBrace));
    assert!(!STATEMENT_START.contains(TokenKind::Colon));
}

// Skipping

#[test]
fn skipped_token_rides_on_next_token() {
    let mut p = parser("} x");
    p.skip_with(ErrorCode::CS1022);
    let token = p.bump();
    assert_eq!(token.text(), "x");
    let mut out = String::new();
    token.write_to(&mut out);
    assert_eq!(out, "} x");

    let mut diagnostics = Vec::new();
    token.collect_diagnostics(&mut diagnostics);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::CS1022);
    assert_eq!(diagnostics[0].arg(), None);
}

#[test]
fn skip_with_names_the_token_when_the_message_does() {
    let mut p = parser("= x");
    p.skip_with(ErrorCode::CS1519);
    let token = p.bump();
    let mut diagnostics = Vec::new();
    token.collect_diagnostics(&mut diagnostics);
    assert_eq!(diagnostics[0].arg(), Some("="));
    assert_eq!(diagnostics[0].span, keel_ir::Span::new(0, 1));
}

// Separated lists

#[test]
fn well_formed_list() {
    let node = ident_list("a, b, c)", ListRules::closed_by(TokenKind::RParen));
    assert_eq!(names(&node), 3);
    assert_eq!(codes(&node), vec![]);
    assert_eq!(node.text(), "a, b, c)");
}

#[test]
fn empty_list() {
    let node = ident_list(")", ListRules::closed_by(TokenKind::RParen));
    assert_eq!(names(&node), 0);
    assert_eq!(codes(&node), vec![]);
}

#[test]
fn missing_separator_between_elements() {
    let node = ident_list("a b)", ListRules::closed_by(TokenKind::RParen));
    assert_eq!(names(&node), 2);
    assert_eq!(codes(&node), vec![(ErrorCode::CS1003, Some(",".to_owned()))]);
    assert!(node.contains_missing());
    assert_eq!(node.text(), "a b)");
}

#[test]
fn stray_token_is_skipped_then_list_resumes() {
    let node = ident_list("a + b)", ListRules::closed_by(TokenKind::RParen));
    assert_eq!(names(&node), 2);
    assert_eq!(
        codes(&node),
        vec![
            (ErrorCode::CS1003, Some(",".to_owned())),
            (ErrorCode::CS1003, Some(",".to_owned())),
        ]
    );
    assert!(node.contains_skipped());
    assert_eq!(node.text(), "a + b)");
}

#[test]
fn skipped_run_reports_only_its_first_token() {
    let node = ident_list("a + - * , b)", ListRules::closed_by(TokenKind::RParen));
    assert_eq!(names(&node), 2);
    assert_eq!(codes(&node), vec![(ErrorCode::CS1003, Some(",".to_owned()))]);
    assert_eq!(node.text(), "a + - * , b)");
}

#[test]
fn trailing_separator() {
    let rules = ListRules::closed_by(TokenKind::RParen).trailing();
    let node = ident_list("a, b, )", rules);
    assert_eq!(names(&node), 2);
    assert_eq!(codes(&node), vec![]);
}

#[test]
fn trailing_separator_not_allowed() {
    let node = ident_list("a, )", ListRules::closed_by(TokenKind::RParen));
    assert_eq!(names(&node), 2);
    assert_eq!(codes(&node), vec![(ErrorCode::CS1001, None)]);
}

#[test]
fn anchor_abandons_the_list() {
    let mut p = parser("a ; b)");
    let mut b = NodeBuilder::new(SyntaxKind::ArgumentList);
    p.separated_list(
        &mut b,
        &ListRules::closed_by(TokenKind::RParen),
        |p| p.at(TokenKind::Ident),
        |p| identifier_name(p.expect_identifier()),
    );
    assert_eq!(p.current_kind(), TokenKind::Semicolon);
    assert!(p.skipped.is_empty());
}

#[test]
fn where_clause_ends_a_base_list() {
    let mut p = parser("A, B where T : C {");
    let mut b = NodeBuilder::new(SyntaxKind::BaseList);
    p.separated_list(
        &mut b,
        &ListRules::closed_by(TokenKind::LBrace).until_where(),
        |p| p.at(TokenKind::Ident),
        |p| identifier_name(p.expect_identifier()),
    );
    assert_eq!(p.current().text(), "where");
    assert!(!b.finish().contains_diagnostics());
}
