//! Contextual checks over a finished tree.
//!
//! The parser accepts some constructs structurally that are only invalid
//! because of where they appear. This pass reports them without touching
//! the tree:
//!
//! - CS7014: attribute lists on a statement (local functions excepted)
//! - CS8803: the first top-level statement after a namespace or type
//! - CS0106: modifiers a local or local function cannot carry

use keel_diagnostic::{Diagnostic, ErrorCode};
use keel_ir::{SyntaxKind, TokenKind};
use keel_syntax::{SyntaxElement, SyntaxNode, SyntaxToken};
use rustc_hash::FxHashSet;
use tracing::debug;

const LOCAL_DECLARATION_MODIFIERS: &[TokenKind] = &[TokenKind::KwConst, TokenKind::KwScoped];

const LOCAL_FUNCTION_MODIFIERS: &[TokenKind] = &[
    TokenKind::KwStatic,
    TokenKind::KwAsync,
    TokenKind::KwUnsafe,
    TokenKind::KwExtern,
];

/// Run every contextual check over `root`. The result is in tree order.
pub fn validate(root: &SyntaxNode) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    if root.kind() == SyntaxKind::CompilationUnit {
        check_statement_order(root, &mut diagnostics);
    }
    for node in root.preorder() {
        match node.kind() {
            SyntaxKind::LocalDeclarationStatement => {
                check_modifiers(node, LOCAL_DECLARATION_MODIFIERS, &mut diagnostics);
            }
            SyntaxKind::LocalFunctionStatement => {
                check_modifiers(node, LOCAL_FUNCTION_MODIFIERS, &mut diagnostics);
                continue;
            }
            _ => {}
        }
        if node.kind().is_statement() {
            check_statement_attributes(node, &mut diagnostics);
        }
    }
    if !diagnostics.is_empty() {
        debug!(count = diagnostics.len(), "contextual diagnostics");
    }
    diagnostics
}

fn check_statement_attributes(statement: &SyntaxNode, out: &mut Vec<Diagnostic>) {
    for list in statement
        .child_nodes()
        .filter(|n| n.kind() == SyntaxKind::AttributeList)
    {
        if let Some(span) = list.span() {
            out.push(Diagnostic::new(ErrorCode::CS7014, span));
        }
    }
}

/// CS8803 once, on the first global statement that follows a namespace or
/// type declaration.
fn check_statement_order(unit: &SyntaxNode, out: &mut Vec<Diagnostic>) {
    let mut after_declaration = false;
    for child in unit.child_nodes() {
        let kind = child.kind();
        if kind.is_namespace_declaration() || kind.is_type_declaration() {
            after_declaration = true;
        } else if kind == SyntaxKind::GlobalStatement && after_declaration {
            if let Some(span) = child.span() {
                out.push(Diagnostic::new(ErrorCode::CS8803, span));
            }
            return;
        }
    }
}

/// The modifier tokens of a local: leading tokens before the first child
/// node. A `using` that opens a using declaration is not a modifier.
fn modifiers(declaration: &SyntaxNode) -> impl Iterator<Item = &SyntaxToken> {
    declaration
        .children()
        .iter()
        .skip_while(|child| matches!(child, SyntaxElement::Node(n) if n.kind() == SyntaxKind::AttributeList))
        .map_while(SyntaxElement::as_token)
        .filter(|token| token.kind() != TokenKind::KwUsing)
}

/// CS0106 for each modifier not in `allowed`. A repeated modifier is
/// reported once.
fn check_modifiers(declaration: &SyntaxNode, allowed: &[TokenKind], out: &mut Vec<Diagnostic>) {
    let mut reported = FxHashSet::default();
    for modifier in modifiers(declaration) {
        let kind = modifier.kind();
        if !allowed.contains(&kind) && reported.insert(kind) {
            out.push(Diagnostic::new(ErrorCode::CS0106, modifier.span()).with_arg(modifier.text()));
        }
    }
}
