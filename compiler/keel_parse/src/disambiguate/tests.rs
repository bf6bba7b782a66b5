use super::*;
use keel_ir::ParseOptions;
use keel_lexer::lex;
use pretty_assertions::assert_eq;

fn parser(source: &str) -> Parser {
    Parser::new(lex(source), ParseOptions::default())
}

// Bracket matching

#[test]
fn matching_close_tracks_all_pairs() {
    // ( a [ b ] { c } ) d
    assert_eq!(parser("(a[b]{c}) d").matching_close(0), Some(8));
    assert_eq!(parser("{ a } b").matching_close(0), Some(2));
}

#[test]
fn matching_close_stops_at_end() {
    assert_eq!(parser("(a (b)").matching_close(0), None);
}

#[test]
fn matching_close_requires_the_same_kind() {
    assert_eq!(parser("(a]").matching_close(0), None);
    assert_eq!(parser("(a] b)").matching_close(0), Some(4));
}

#[test]
fn mismatched_bracket_is_not_a_cast() {
    let p = parser("(int] x");
    assert_eq!(p.paren_shape(), ParenShape::Parenthesized);
}

// Types

#[test]
fn scan_type_shapes() {
    assert_eq!(parser("int x").scan_type(0), Some(1));
    assert_eq!(parser("int? x").scan_type(0), Some(2));
    assert_eq!(parser("List<int>[] x").scan_type(0), Some(6));
    assert_eq!(parser("a.b.C<T> x").scan_type(0), Some(8));
    assert_eq!(parser("global::A x").scan_type(0), Some(3));
    assert_eq!(parser("(int, string b) t").scan_type(0), Some(6));
    assert_eq!(parser("int[,] x").scan_type(0), Some(4));
}

#[test]
fn scan_type_rejects_non_types() {
    assert_eq!(parser("+ x").scan_type(0), None);
    assert_eq!(parser("(int) x").scan_type(0), None);
    assert_eq!(parser("List<int x").scan_type(0), None);
}

#[test]
fn sized_rank_ends_the_type() {
    // `int[1]` is an element access, not a rank specifier.
    assert_eq!(parser("int[1]").scan_type(0), Some(1));
    assert_eq!(parser("a[i] = 1;").scan_type(0), Some(1));
}

#[test]
fn sized_rank_before_a_name_stays_in_the_type() {
    // int [ 2 , 3 ] a
    assert_eq!(parser("int[2, 3] a").scan_type(0), Some(6));
    assert_eq!(parser("int[2][] a").scan_type(0), Some(6));
    assert_eq!(parser("int[2, 3] a;").local_shape_at(0), Some(LocalShape::Variable));
}

#[test]
fn deeply_nested_type_arguments_give_up() {
    let source = format!("{}x", "a<".repeat(20_000));
    let p = parser(&source);
    assert_eq!(p.scan_type(0), None);
    assert!(!p.is_generic_name_at(0, false));
}

#[test]
fn nested_parens_are_not_tuple_types() {
    let depth = 20_000;
    let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    let p = parser(&source);
    assert_eq!(p.scan_type(0), None);
    assert_eq!(p.paren_shape(), ParenShape::Parenthesized);
}

#[test]
fn nested_generic_closes_on_adjacent_gt() {
    // List < List < int > > x
    assert_eq!(parser("List<List<int>> x").scan_type(0), Some(7));
}

#[test]
fn generic_name_in_expression() {
    assert!(parser("F<int>(x)").is_generic_name_at(0, false));
    assert!(parser("a<b>.c").is_generic_name_at(0, false));
    assert!(!parser("a < b > c").is_generic_name_at(0, false));
    assert!(!parser("a < b").is_generic_name_at(0, false));
}

#[test]
fn generic_name_in_declaration_accepts_identifier() {
    assert!(parser("a < b > c").is_generic_name_at(0, true));
}

// Parentheses

#[test]
fn paren_shapes() {
    assert_eq!(parser("(x) => x").paren_shape(), ParenShape::Lambda);
    assert_eq!(parser("(a, b) => a").paren_shape(), ParenShape::Lambda);
    assert_eq!(parser("(a, b)").paren_shape(), ParenShape::Tuple);
    assert_eq!(parser("(int)x").paren_shape(), ParenShape::Cast);
    assert_eq!(parser("(T)x").paren_shape(), ParenShape::Cast);
    assert_eq!(parser("(x) + y").paren_shape(), ParenShape::Parenthesized);
    assert_eq!(parser("(a + b)").paren_shape(), ParenShape::Parenthesized);
}

#[test]
fn predefined_type_casts_a_prefix_operand() {
    assert_eq!(parser("(int)-1").paren_shape(), ParenShape::Cast);
    assert_eq!(parser("(x)-1").paren_shape(), ParenShape::Parenthesized);
    assert_eq!(parser("(int?)-1").paren_shape(), ParenShape::Cast);
}

#[test]
fn unclosed_paren_is_parenthesized() {
    assert_eq!(parser("(x").paren_shape(), ParenShape::Parenthesized);
}

// Statements and members

#[test]
fn local_shapes() {
    assert_eq!(parser("int x = 1;").local_shape_at(0), Some(LocalShape::Variable));
    assert_eq!(parser("var x;").local_shape_at(0), Some(LocalShape::Variable));
    assert_eq!(parser("int F() { }").local_shape_at(0), Some(LocalShape::Function));
    assert_eq!(parser("T<U> F<V>()").local_shape_at(0), Some(LocalShape::Function));
    assert_eq!(parser("x = 1;").local_shape_at(0), None);
    assert_eq!(parser("a.b();").local_shape_at(0), None);
}

#[test]
fn contextual_modifiers() {
    assert!(parser("partial class C").is_contextual_modifier_at(0));
    assert!(parser("async Task F()").is_contextual_modifier_at(0));
    assert!(parser("file sealed class C").is_contextual_modifier_at(0));
    assert!(parser("partial record R").is_contextual_modifier_at(0));
    assert!(!parser("async(x)").is_contextual_modifier_at(0));
    assert!(!parser("partial = 1;").is_contextual_modifier_at(0));
    assert!(!parser("@partial class C").is_contextual_modifier_at(0));
}

#[test]
fn scan_modifiers_counts_mixed_runs() {
    assert_eq!(parser("public static partial class C").scan_modifiers(0), 3);
    assert_eq!(parser("class C").scan_modifiers(0), 0);
}

#[test]
fn top_level_brackets() {
    assert!(parser("[1, 2];").bracket_starts_expression());
    assert!(parser("[a].Length").bracket_starts_expression());
    assert!(!parser("[A] class C { }").bracket_starts_expression());
    assert!(!parser("[A] { }").bracket_starts_expression());
    assert!(!parser("[x").bracket_starts_expression());
}

#[test]
fn record_introducers() {
    assert!(parser("record R").is_record_at(0));
    assert!(parser("record struct R").is_record_at(0));
    assert!(!parser("record = 1;").is_record_at(0));
    assert!(!parser("record class").is_record_at(0));
}

#[test]
fn where_clause_needs_name_and_colon() {
    assert!(parser("where T : class").at_where_clause());
    assert!(!parser("where = 1").at_where_clause());
    assert!(!parser("where T").at_where_clause());
}
