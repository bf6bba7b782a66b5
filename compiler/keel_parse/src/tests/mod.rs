//! Parser tests over whole inputs.
//!
//! - `scenarios`: the reference inputs, including the version-dependent
//!   extension cascade
//! - `statements`: statement forms and statement-level recovery
//! - `declarations`: types, members, namespaces and top-level ordering
//! - `recovery`: malformed input at file scope

mod recovery;

use keel_diagnostic::{Diagnostic, ErrorCode};
use keel_ir::{LanguageVersion, ParseOptions, SyntaxKind};
use keel_syntax::SyntaxNode;
use pretty_assertions::assert_eq;

use crate::ParseResult;

/// Parse `source` as a compilation unit on `version` and check that the
/// tree reproduces it.
fn parse_unit(source: &str, version: LanguageVersion) -> ParseResult {
    let result = crate::parse(source, ParseOptions::new(version));
    assert_eq!(result.text(), source, "round trip");
    result
}

fn parse_preview(source: &str) -> ParseResult {
    parse_unit(source, LanguageVersion::Preview)
}

fn codes(diagnostics: &[Diagnostic]) -> Vec<ErrorCode> {
    diagnostics.iter().map(|d| d.code).collect()
}

/// The first node of `kind` anywhere under `root`.
fn find(root: &SyntaxNode, kind: SyntaxKind) -> &SyntaxNode {
    root.preorder()
        .find(|n| n.kind() == kind)
        .unwrap_or_else(|| panic!("no {kind:?} in {:?}", root.kinds()))
}

/// Wrap `body` in a method so it parses as statements.
fn in_method(body: &str) -> String {
    format!("class C {{ void M() {{ {body} }} }}")
}
