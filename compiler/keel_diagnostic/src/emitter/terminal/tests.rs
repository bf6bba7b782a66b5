#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn render(emitter: TerminalEmitter<Vec<u8>>) -> String {
    String::from_utf8(emitter.into_inner()).unwrap()
}

fn plain() -> TerminalEmitter<Vec<u8>> {
    TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
}

#[test]
fn header_without_source_shows_raw_span() {
    let mut emitter = plain();
    emitter.emit(&Diagnostic::new(ErrorCode::CS1002, Span::point(9)));
    let text = render(emitter);
    assert!(text.starts_with("error[CS1002]: ; expected\n"));
    assert!(text.contains("--> [9..9)"));
}

#[test]
fn snippet_points_at_span() {
    let source = "class C\n{\n    int x = 5\n}\n";
    let mut emitter = plain();
    emitter.set_source("a.cs", source);
    // zero-width span right after `5`
    emitter.emit(&Diagnostic::new(ErrorCode::CS1002, Span::point(23)));
    let text = render(emitter);
    assert_eq!(
        text,
        "error[CS1002]: ; expected\n --> a.cs:3:14\n  |\n3 |     int x = 5\n  |              ^\n\n"
    );
}

#[test]
fn carets_cover_multi_character_span() {
    let source = "unsafe [A]{ }";
    let mut emitter = plain();
    emitter.set_source("b.cs", source);
    emitter.emit(&Diagnostic::new(ErrorCode::CS0106, Span::new(0, 6)).with_arg("unsafe"));
    let text = render(emitter);
    assert!(text.contains("The modifier 'unsafe' is not valid for this item"));
    assert!(text.contains("  | ^^^^^^\n"));
}

#[test]
fn notes_are_rendered() {
    let mut emitter = plain();
    emitter.emit(&Diagnostic::new(ErrorCode::CS7014, Span::new(0, 3)).with_note("only local functions take attributes"));
    let text = render(emitter);
    assert!(text.contains("= note: only local functions take attributes"));
}

#[test]
fn warnings_use_warning_label() {
    let mut emitter = plain();
    emitter.emit(&Diagnostic::new(ErrorCode::CS0078, Span::new(0, 3)));
    assert!(render(emitter).starts_with("warning[CS0078]"));
}

#[test]
fn colors_only_when_enabled() {
    let diag = Diagnostic::new(ErrorCode::CS1513, Span::point(0));
    let mut colored = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    colored.emit(&diag);
    assert!(render(colored).contains("\x1b["));

    let mut auto = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Auto, false);
    auto.emit(&diag);
    assert!(!render(auto).contains("\x1b["));
}

#[test]
fn summary_pluralizes() {
    let mut emitter = plain();
    emitter.emit_summary(2, 1);
    emitter.emit_summary(1, 0);
    emitter.emit_summary(0, 3);
    emitter.emit_summary(0, 0);
    assert_eq!(
        render(emitter),
        "error: 2 syntax errors and 1 warning reported\n\
         error: 1 syntax error reported\n\
         warning: 3 warnings reported\n"
    );
}

#[test]
fn color_mode_parsing() {
    assert_eq!("never".parse(), Ok(ColorMode::Never));
    assert_eq!("always".parse(), Ok(ColorMode::Always));
    assert!("sometimes".parse::<ColorMode>().is_err());
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn emit_all_keeps_order() {
    let mut emitter = plain();
    emitter.emit_all(&[
        Diagnostic::new(ErrorCode::CS1514, Span::point(0)),
        Diagnostic::new(ErrorCode::CS1513, Span::point(0)),
    ]);
    let text = render(emitter);
    let open = text.find("CS1514").unwrap();
    let close = text.find("CS1513").unwrap();
    assert!(open < close);
}
