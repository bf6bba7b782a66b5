use super::*;
use pretty_assertions::assert_eq;

#[test]
fn single_line() {
    let table = LineOffsetTable::build("abc");
    assert_eq!(table.line_count(), 1);
    assert_eq!(table.line(0), 1);
    assert_eq!(table.line(3), 1);
}

#[test]
fn offsets_at_line_starts() {
    let source = "a\nbb\nccc";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 3);
    assert_eq!(table.line_col(source, 0), (1, 1));
    assert_eq!(table.line_col(source, 1), (1, 2));
    assert_eq!(table.line_col(source, 2), (2, 1));
    assert_eq!(table.line_col(source, 5), (3, 1));
    assert_eq!(table.line_col(source, 7), (3, 3));
}

#[test]
fn columns_count_characters() {
    let source = "é = 1;";
    let table = LineOffsetTable::build(source);
    // 'é' is two bytes
    assert_eq!(table.line_col(source, 2), (1, 2));
}

#[test]
fn line_text_strips_terminators() {
    let source = "first\r\nsecond\nthird";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("first"));
    assert_eq!(table.line_text(source, 2), Some("second"));
    assert_eq!(table.line_text(source, 3), Some("third"));
    assert_eq!(table.line_text(source, 4), None);
    assert_eq!(table.line_text(source, 0), None);
}

#[test]
fn offset_past_end_clamps() {
    let source = "ab\n";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_col(source, 3), (2, 1));
    assert_eq!(table.line_col(source, 99), (2, 1));
}

#[test]
fn location_formats_span_start() {
    let source = "class C\n{ x }";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.location(source, Span::new(10, 11)), "2:3");
}
