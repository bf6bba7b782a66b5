#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{parse_expression, ParseResult};
use keel_diagnostic::ErrorCode;
use keel_ir::{LanguageVersion, ParseOptions, SyntaxKind};
use keel_syntax::{SyntaxElement, SyntaxNode};
use pretty_assertions::assert_eq;

fn parse_in(source: &str, version: LanguageVersion) -> ParseResult {
    let result = parse_expression(source, ParseOptions::new(version));
    assert_eq!(result.text(), source, "round trip");
    result
}

fn parse(source: &str) -> ParseResult {
    parse_in(source, LanguageVersion::Preview)
}

/// Parse a well-formed expression and render it as nested kinds with
/// token texts.
fn shape(source: &str) -> String {
    let result = parse(source);
    assert_eq!(result.diagnostics(), vec![], "unexpected diagnostics for {source:?}");
    render(&result.root)
}

fn render(node: &SyntaxNode) -> String {
    let mut out = format!("({:?}", node.kind());
    for child in node.children() {
        out.push(' ');
        match child {
            SyntaxElement::Node(n) => out.push_str(&render(n)),
            SyntaxElement::Token(t) if t.is_missing() => out.push_str("<missing>"),
            SyntaxElement::Token(t) => out.push_str(t.text()),
        }
    }
    out.push(')');
    out
}

fn codes(result: &ParseResult) -> Vec<ErrorCode> {
    result.diagnostics().iter().map(|d| d.code).collect()
}

// Precedence and associativity

#[test]
fn multiplicative_binds_tighter() {
    assert_eq!(
        shape("a + b * c"),
        "(BinaryExpression (IdentifierName a) + \
         (BinaryExpression (IdentifierName b) * (IdentifierName c)))"
    );
}

#[test]
fn additive_is_left_associative() {
    assert_eq!(
        shape("a - b - c"),
        "(BinaryExpression (BinaryExpression (IdentifierName a) - (IdentifierName b)) - \
         (IdentifierName c))"
    );
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(
        shape("a = b += c"),
        "(AssignmentExpression (IdentifierName a) = \
         (AssignmentExpression (IdentifierName b) += (IdentifierName c)))"
    );
}

#[test]
fn coalesce_is_right_associative() {
    assert_eq!(
        shape("a ?? b ?? c"),
        "(BinaryExpression (IdentifierName a) ?? \
         (BinaryExpression (IdentifierName b) ?? (IdentifierName c)))"
    );
}

#[test]
fn logical_operators_layer() {
    assert_eq!(
        shape("a || b && c == d"),
        "(BinaryExpression (IdentifierName a) || \
         (BinaryExpression (IdentifierName b) && \
         (BinaryExpression (IdentifierName c) == (IdentifierName d))))"
    );
}

#[test]
fn conditional_takes_full_branches() {
    assert_eq!(
        shape("a ? b = 1 : c"),
        "(ConditionalExpression (IdentifierName a) ? \
         (AssignmentExpression (IdentifierName b) = (LiteralExpression 1)) : (IdentifierName c))"
    );
}

#[test]
fn unary_binds_tighter_than_binary() {
    assert_eq!(
        shape("-a * !b"),
        "(BinaryExpression (PrefixUnaryExpression - (IdentifierName a)) * \
         (PrefixUnaryExpression ! (IdentifierName b)))"
    );
}

#[test]
fn type_tests() {
    assert_eq!(
        shape("x is int"),
        "(IsExpression (IdentifierName x) is (PredefinedType int))"
    );
    assert_eq!(
        shape("x as string"),
        "(AsExpression (IdentifierName x) as (PredefinedType string))"
    );
}

#[test]
fn ranges() {
    assert_eq!(
        shape("a..b"),
        "(RangeExpression (IdentifierName a) .. (IdentifierName b))"
    );
    assert_eq!(shape(".."), "(RangeExpression ..)");
    assert_eq!(shape("..^1"), "(RangeExpression .. (PrefixUnaryExpression ^ (LiteralExpression 1)))");
}

// Shifts are composed from adjacent `>`

#[test]
fn right_shift_from_adjacent_tokens() {
    assert_eq!(
        shape("x >> 1"),
        "(BinaryExpression (IdentifierName x) >> (LiteralExpression 1))"
    );
    assert_eq!(
        shape("x >>= 1"),
        "(AssignmentExpression (IdentifierName x) >>= (LiteralExpression 1))"
    );
}

#[test]
fn unsigned_shift_is_version_gated() {
    assert_eq!(
        shape("x >>> 1"),
        "(BinaryExpression (IdentifierName x) >>> (LiteralExpression 1))"
    );
    let old = parse_in("x >>> 1", LanguageVersion::CSharp10);
    assert_eq!(codes(&old), vec![ErrorCode::CS8936]);
}

#[test]
fn separated_greater_thans_do_not_compose() {
    let result = parse("x > > 1");
    assert_eq!(codes(&result), vec![ErrorCode::CS1525]);
}

// Names and generics

#[test]
fn generic_invocation() {
    assert_eq!(
        shape("F<int>(x)"),
        "(InvocationExpression (GenericName F (TypeArgumentList < (PredefinedType int) >)) \
         (ArgumentList ( (Argument (IdentifierName x)) )))"
    );
}

#[test]
fn comparison_chain_is_not_generic() {
    assert_eq!(
        shape("a < b > c"),
        "(BinaryExpression (BinaryExpression (IdentifierName a) < (IdentifierName b)) > \
         (IdentifierName c))"
    );
}

#[test]
fn nested_generic_closes_twice() {
    let result = parse("F<List<int>>()");
    assert_eq!(codes(&result), vec![]);
    assert_eq!(
        result.root.kinds()[..3],
        [
            SyntaxKind::InvocationExpression,
            SyntaxKind::GenericName,
            SyntaxKind::TypeArgumentList
        ]
    );
}

#[test]
fn postfix_chain() {
    assert_eq!(
        shape("a.b[0]!.c++"),
        "(PostfixUnaryExpression (MemberAccessExpression (PostfixUnaryExpression \
         (ElementAccessExpression (MemberAccessExpression (IdentifierName a) . (IdentifierName b)) \
         (BracketedArgumentList [ (Argument (LiteralExpression 0)) ])) !) . (IdentifierName c)) ++)"
    );
}

#[test]
fn named_and_out_arguments() {
    let result = parse("F(x: 1, out var y, ref z)");
    assert_eq!(codes(&result), vec![]);
    let kinds = result.root.kinds();
    assert_eq!(
        kinds.iter().filter(|k| **k == SyntaxKind::Argument).count(),
        3
    );
    assert!(kinds.contains(&SyntaxKind::VariableDeclarator));
}

// Parentheses

#[test]
fn casts() {
    assert_eq!(
        shape("(int)-1"),
        "(CastExpression ( (PredefinedType int) ) \
         (PrefixUnaryExpression - (LiteralExpression 1)))"
    );
    assert_eq!(
        shape("(T)x"),
        "(CastExpression ( (IdentifierName T) ) (IdentifierName x))"
    );
}

#[test]
fn parenthesized_operand_is_not_a_cast() {
    assert_eq!(
        shape("(x)-1"),
        "(BinaryExpression (ParenthesizedExpression ( (IdentifierName x) )) - \
         (LiteralExpression 1))"
    );
}

#[test]
fn tuples() {
    assert_eq!(
        shape("(a, b: 1)"),
        "(TupleExpression ( (Argument (IdentifierName a)) , \
         (Argument b : (LiteralExpression 1)) ))"
    );
}

// Lambdas

#[test]
fn simple_lambda() {
    assert_eq!(
        shape("x => x + 1"),
        "(SimpleLambdaExpression (Parameter x) => \
         (BinaryExpression (IdentifierName x) + (LiteralExpression 1)))"
    );
}

#[test]
fn parenthesized_lambda_with_block() {
    let result = parse("(a, int b) => { return a; }");
    assert_eq!(codes(&result), vec![]);
    let kinds = result.root.kinds();
    assert_eq!(kinds[0], SyntaxKind::ParenthesizedLambdaExpression);
    assert!(kinds.contains(&SyntaxKind::Block));
    assert!(kinds.contains(&SyntaxKind::ReturnStatement));
}

#[test]
fn await_only_inside_async_lambda() {
    let result = parse("async x => await x");
    assert_eq!(codes(&result), vec![]);
    assert!(result.root.kinds().contains(&SyntaxKind::AwaitExpression));

    let result = parse("x => await(x)");
    assert!(!result.root.kinds().contains(&SyntaxKind::AwaitExpression));
}

// Collections

#[test]
fn collection_elements() {
    assert_eq!(
        shape("[1, ..xs, with(c)]"),
        "(CollectionExpression [ (ExpressionElement (LiteralExpression 1)) , \
         (SpreadElement .. (IdentifierName xs)) , \
         (WithElement with (ArgumentList ( (Argument (IdentifierName c)) ))) ])"
    );
}

#[test]
fn with_is_an_invocation_before_preview() {
    let result = parse_in("[with(c)]", LanguageVersion::CSharp13);
    assert_eq!(codes(&result), vec![]);
    assert_eq!(
        render(&result.root),
        "(CollectionExpression [ (ExpressionElement (InvocationExpression \
         (IdentifierName with) (ArgumentList ( (Argument (IdentifierName c)) )))) ])"
    );
}

#[test]
fn collection_needs_csharp_12() {
    let result = parse_in("[1]", LanguageVersion::CSharp11);
    assert_eq!(codes(&result), vec![ErrorCode::CS9058]);
    assert_eq!(result.root.kind(), SyntaxKind::CollectionExpression);
}

// Creation

#[test]
fn creation_forms() {
    assert_eq!(parse("new C()").root.kind(), SyntaxKind::ObjectCreationExpression);
    assert_eq!(parse("new()").root.kind(), SyntaxKind::ImplicitObjectCreationExpression);
    assert_eq!(parse("new[] { 1 }").root.kind(), SyntaxKind::ImplicitArrayCreationExpression);

    let array = parse("new int[3][]");
    assert_eq!(codes(&array), vec![]);
    assert_eq!(array.root.kind(), SyntaxKind::ArrayCreationExpression);

    let list = parse("new List<int> { 1, 2 }");
    assert_eq!(codes(&list), vec![]);
    assert!(list.root.kinds().contains(&SyntaxKind::InitializerExpression));
}

// Recovery

#[test]
fn missing_right_operand_at_end() {
    let result = parse("a +");
    assert_eq!(codes(&result), vec![ErrorCode::CS1733]);
    assert!(result.root.contains_missing());
}

#[test]
fn missing_operand_names_the_token() {
    let result = parse("a + )");
    let diagnostics = result.diagnostics();
    assert_eq!(diagnostics[0].code, ErrorCode::CS1525);
    assert_eq!(diagnostics[0].arg(), Some(")"));
}

#[test]
fn unclosed_argument_list() {
    let result = parse("F(a, b");
    assert_eq!(codes(&result), vec![ErrorCode::CS1026]);
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 20_000;
    let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    let result = parse(&source);
    assert!(!result.has_errors());
}

#[test]
fn long_less_than_chain_is_not_generic() {
    let source = format!("{}x", "a<".repeat(20_000));
    let result = parse(&source);
    assert!(!result.has_errors());
    assert_eq!(result.root.kind(), SyntaxKind::BinaryExpression);
}
