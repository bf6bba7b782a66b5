#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;

use keel_diagnostic::emitter::{ColorMode, TerminalEmitter};
use pretty_assertions::assert_eq;

use super::*;
use crate::DriverConfig;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn config(files: &[&str]) -> DriverConfig {
    DriverConfig {
        options: ParseOptions::default(),
        color: ColorMode::Never,
        files: files.iter().map(|f| fixture(f)).collect(),
    }
}

fn buffer_emitter() -> TerminalEmitter<Vec<u8>> {
    TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
}

#[test]
fn outcome_from_error_count() {
    assert_eq!(Outcome::from_errors(0), Outcome::Clean);
    assert_eq!(Outcome::from_errors(3), Outcome::Errors);
}

#[test]
fn render_tokens_lists_trivia() {
    let rendered = render_tokens("class C\n");
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines,
        vec![
            "  KwClass \"class\" @ 0..5 trailing[Whitespace]",
            "  Ident \"C\" @ 6..7 trailing[EndOfLine]",
            "  Eof \"\" @ 8..8",
        ]
    );
}

#[test]
fn explain_accepts_bare_numbers() {
    let mut out = Vec::new();
    explain_code("1002", &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("# CS1002"));
}

#[test]
fn explain_rejects_unknown_codes() {
    let err = explain_code("CS9999", &mut Vec::new()).unwrap_err();
    assert!(matches!(err, DriverError::UnknownCode(ref c) if c == "CS9999"));
    assert!(explain_code("banana", &mut Vec::new()).is_err());
}

#[test]
fn check_clean_file() {
    let mut out = Vec::new();
    let mut emitter = buffer_emitter();
    let outcome = check_files(&config(&["clean.cs"]), &mut out, &mut emitter).unwrap();
    assert_eq!(outcome, Outcome::Clean);
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("OK: "));
    assert!(out.trim_end().ends_with("clean.cs"));
    assert!(emitter.into_inner().is_empty());
}

#[test]
fn check_broken_file_reports_missing_semicolon() {
    let mut out = Vec::new();
    let mut emitter = buffer_emitter();
    let outcome = check_files(&config(&["broken.cs"]), &mut out, &mut emitter).unwrap();
    assert_eq!(outcome, Outcome::Errors);
    assert!(out.is_empty());
    let rendered = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(rendered.contains("error[CS1002]: ; expected"));
    assert!(rendered.contains("broken.cs:5:14"));
    assert!(rendered.contains("1 syntax error reported"));
}

#[test]
fn parse_dumps_trees_in_input_order() {
    let mut out = Vec::new();
    let mut emitter = buffer_emitter();
    let outcome =
        parse_files(&config(&["broken.cs", "clean.cs"]), &mut out, &mut emitter).unwrap();
    assert_eq!(outcome, Outcome::Errors);
    let out = String::from_utf8(out).unwrap();
    let broken = out.find("broken.cs:").unwrap();
    let clean = out.find("clean.cs:").unwrap();
    assert!(broken < clean);
    assert_eq!(out.matches("CompilationUnit").count(), 2);
}

#[test]
fn unreadable_file_fails_the_batch() {
    let err = parse_all(&[fixture("does-not-exist.cs")], ParseOptions::default()).unwrap_err();
    assert!(matches!(err, DriverError::NotFound { .. }));
}

#[test]
fn report_counts_split_by_severity() {
    let reports = parse_all(&[fixture("broken.cs")], ParseOptions::default()).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].counts(), (1, 0));
}
