//! Error recovery over whole files.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use keel_diagnostic::ErrorCode;
use keel_ir::{ParseOptions, Span, SyntaxKind};
use pretty_assertions::assert_eq;

use super::{codes, find, in_method, parse_preview};
use crate::parse_statement;

#[test]
fn stray_close_brace_at_top_level() {
    let result = parse_preview("} class C { }");
    let diagnostics = result.diagnostics();
    assert_eq!(codes(&diagnostics), vec![ErrorCode::CS1022]);
    assert_eq!(diagnostics[0].span, Span::new(0, 1));
    find(&result.root, SyntaxKind::ClassDeclaration);
}

#[test]
fn unclosed_class_reports_at_end() {
    let result = parse_preview("class C { void M() { }");
    let diagnostics = result.diagnostics();
    assert_eq!(codes(&diagnostics), vec![ErrorCode::CS1513]);
    assert_eq!(diagnostics[0].span, Span::point(22));
}

#[test]
fn semicolon_after_method_body() {
    let result = parse_preview("class C { void M() { }; }");
    assert_eq!(codes(&result.diagnostics()), vec![ErrorCode::CS1597]);
    find(&result.root, SyntaxKind::MethodDeclaration);
}

#[test]
fn garbage_in_type_body_is_skipped() {
    let result = parse_preview("class C { = int x; }");
    let diagnostics = result.diagnostics();
    assert_eq!(codes(&diagnostics), vec![ErrorCode::CS1519]);
    assert_eq!(diagnostics[0].arg(), Some("="));
    find(&result.root, SyntaxKind::FieldDeclaration);
}

#[test]
fn missing_semicolon_between_fields() {
    let result = parse_preview("class C { int x int y; }");
    let diagnostics = result.diagnostics();
    assert_eq!(codes(&diagnostics), vec![ErrorCode::CS1002]);
    assert_eq!(diagnostics[0].span, Span::new(16, 19));
    let fields = result
        .root
        .preorder()
        .filter(|n| n.kind() == SyntaxKind::FieldDeclaration)
        .count();
    assert_eq!(fields, 2);
}

#[test]
fn missing_semicolon_at_end_of_line_points_after_it() {
    let result = parse_statement("{ x = 1\n  y = 2; }", ParseOptions::default());
    let diagnostics = result.diagnostics();
    assert_eq!(codes(&diagnostics), vec![ErrorCode::CS1002]);
    assert_eq!(diagnostics[0].span, Span::point(7));
}

#[test]
fn unclosed_call_stops_at_semicolon() {
    let result = parse_preview(&in_method("F(a;"));
    let diagnostics = result.diagnostics();
    assert_eq!(codes(&diagnostics), vec![ErrorCode::CS1026]);
    assert_eq!(diagnostics[0].span, Span::new(24, 25));
}

#[test]
fn malformed_inputs_round_trip_with_errors() {
    for source in [
        "class C { int this[ }",
        "}}}{{{",
        "if (",
        "x => => y",
        "class C : { }",
        "enum E { , }",
        "void M(int, ) { }",
        "namespace { class",
        "class C { public static explicit }",
        "using",
    ] {
        let result = parse_preview(source);
        assert!(result.has_errors(), "no errors for {source:?}");
    }
}

#[test]
fn every_missing_token_carries_a_diagnostic() {
    for source in [
        "class C { void M( { }",
        "if (a b",
        "record R(int",
        "class C { C() : (1) { } }",
        "var x = ;",
    ] {
        let result = parse_preview(source);
        for token in result.root.tokens().filter(|t| t.is_missing()) {
            assert!(
                !token.diagnostics().is_empty(),
                "{:?} missing without a diagnostic in {source:?}",
                token.kind()
            );
        }
    }
}

#[test]
fn top_level_type_then_marker_leaves_the_class_alone() {
    let result = parse_preview("\nfg implicit//\nclass C { }\n");
    let diagnostics = result.diagnostics();
    let found: Vec<_> = diagnostics.iter().map(|d| (d.code, d.span)).collect();
    assert_eq!(
        found,
        vec![
            (ErrorCode::CS1553, Span::new(1, 3)),
            (ErrorCode::CS1003, Span::new(4, 12)),
            (ErrorCode::CS1037, Span::new(4, 12)),
            (ErrorCode::CS1003, Span::point(12)),
            (ErrorCode::CS1026, Span::point(12)),
            (ErrorCode::CS1002, Span::point(12)),
        ]
    );
    assert_eq!(diagnostics[1].arg(), Some("operator"));
    assert_eq!(diagnostics[3].arg(), Some("("));
    let kinds: Vec<_> = result.root.child_nodes().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        vec![SyntaxKind::OperatorDeclaration, SyntaxKind::ClassDeclaration]
    );
}

#[test]
fn scoped_before_a_marker_reads_as_a_return_type() {
    let source = "scoped explicit extension R for UnderlyingClass { }";
    let result = parse_preview(source);
    let diagnostics = result.diagnostics();
    assert_eq!(
        codes(&diagnostics),
        vec![
            ErrorCode::CS1553,
            ErrorCode::CS1003,
            ErrorCode::CS1020,
            ErrorCode::CS1003,
            ErrorCode::CS1003,
            ErrorCode::CS1003,
            ErrorCode::CS1001,
            ErrorCode::CS1003,
            ErrorCode::CS1026,
            ErrorCode::CS1002,
            ErrorCode::CS1022,
        ]
    );
    assert_eq!(diagnostics[0].span, Span::new(0, 6));
    assert_eq!(diagnostics[2].span, Span::new(7, 15));
    assert_eq!(diagnostics[3].span, Span::new(16, 25));
    assert_eq!(diagnostics[4].span, Span::new(28, 31));
    assert_eq!(diagnostics[5].span, Span::new(32, 47));
    assert_eq!(diagnostics[10].span, Span::new(50, 51));
    find(&result.root, SyntaxKind::OperatorDeclaration);
    assert!(!result.root.kinds().contains(&SyntaxKind::ExtensionDeclaration));
    assert!(!result.root.kinds().contains(&SyntaxKind::GlobalStatement));
}

#[test]
fn type_keyword_ends_an_unclosed_parameter_list() {
    let result = parse_preview("class A { void M(int a\nclass B { } }");
    let diagnostics = result.diagnostics();
    assert_eq!(codes(&diagnostics), vec![ErrorCode::CS1026, ErrorCode::CS1002]);
    assert_eq!(diagnostics[0].span, Span::point(22));
    assert_eq!(diagnostics[1].span, Span::point(22));
    let classes = result
        .root
        .preorder()
        .filter(|n| n.kind() == SyntaxKind::ClassDeclaration)
        .count();
    assert_eq!(classes, 2);
    let method = find(&result.root, SyntaxKind::MethodDeclaration);
    assert_eq!(method.text().trim(), "void M(int a");
}
