//! Indented text rendering of a tree, for tests and `keel parse`.
//!
//! ```text
//! CompilationUnit
//!   GlobalStatement
//!     ExpressionStatement
//!       CollectionExpression
//!         LBracket "["
//!         ...
//!       Semicolon <missing>
//!   Eof ""
//! ```

use std::fmt::Write;

use crate::{SyntaxElement, SyntaxNode, SyntaxToken, Trivia};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DumpOptions {
    /// Print token lines, not just node kinds.
    pub tokens: bool,
    /// Print skipped tokens held in trivia (prefixed with `~`).
    pub skipped: bool,
    /// Print spans after each line.
    pub spans: bool,
}

impl DumpOptions {
    /// Nodes, tokens and skipped tokens; no spans.
    pub const FULL: DumpOptions = DumpOptions {
        tokens: true,
        skipped: true,
        spans: false,
    };

    /// Node kinds only.
    pub const SHAPE: DumpOptions = DumpOptions {
        tokens: false,
        skipped: false,
        spans: false,
    };
}

pub fn dump_tree(root: &SyntaxNode, options: DumpOptions) -> String {
    let mut out = String::new();
    dump_node(root, 0, options, &mut out);
    out
}

fn dump_node(node: &SyntaxNode, depth: usize, options: DumpOptions, out: &mut String) {
    indent(out, depth);
    out.push_str(&node.kind().to_string());
    if options.spans {
        if let Some(span) = node.span() {
            let _ = write!(out, " @{span:?}");
        }
    }
    out.push('\n');
    for child in node.children() {
        match child {
            SyntaxElement::Node(child) => dump_node(child, depth + 1, options, out),
            SyntaxElement::Token(token) if options.tokens => {
                dump_token(token, depth + 1, options, out);
            }
            SyntaxElement::Token(_) => {}
        }
    }
}

fn dump_token(token: &SyntaxToken, depth: usize, options: DumpOptions, out: &mut String) {
    if options.skipped {
        dump_skipped(token.leading(), depth, options, out);
    }
    indent(out, depth);
    let _ = write!(out, "{:?}", token.kind());
    if token.is_missing() {
        out.push_str(" <missing>");
    } else {
        let _ = write!(out, " {:?}", token.text());
    }
    if options.spans {
        let _ = write!(out, " @{:?}", token.span());
    }
    out.push('\n');
    if options.skipped {
        dump_skipped(token.trailing(), depth, options, out);
    }
}

fn dump_skipped(trivia: &[Trivia], depth: usize, options: DumpOptions, out: &mut String) {
    for skipped in trivia.iter().filter_map(Trivia::skipped_token) {
        indent(out, depth);
        let _ = write!(out, "~ {:?} {:?}", skipped.kind(), skipped.text());
        if options.spans {
            let _ = write!(out, " @{:?}", skipped.span());
        }
        out.push('\n');
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}
