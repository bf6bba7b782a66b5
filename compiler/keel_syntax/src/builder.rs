//! Node construction.

use keel_diagnostic::Diagnostic;
use keel_ir::SyntaxKind;

use crate::{SyntaxElement, SyntaxNode, SyntaxToken};

/// Accumulates the children of one node, then seals it.
///
/// ```
/// use keel_ir::{SyntaxKind, TokenKind};
/// use keel_syntax::{NodeBuilder, SyntaxToken};
///
/// let mut b = NodeBuilder::new(SyntaxKind::IdentifierName);
/// b.token(SyntaxToken::new(TokenKind::Ident, "x", 0));
/// let node = b.finish();
/// assert_eq!(node.text(), "x");
/// ```
#[derive(Debug)]
#[must_use = "a builder does nothing until `finish` is called"]
pub struct NodeBuilder {
    kind: SyntaxKind,
    children: Vec<SyntaxElement>,
    diagnostics: Vec<Diagnostic>,
}

impl NodeBuilder {
    pub fn new(kind: SyntaxKind) -> Self {
        NodeBuilder {
            kind,
            children: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    /// Change the kind before sealing; used when a production learns late
    /// which shape it is building (e.g. `record` vs `record struct`).
    pub fn set_kind(&mut self, kind: SyntaxKind) {
        self.kind = kind;
    }

    pub fn token(&mut self, token: SyntaxToken) -> &mut Self {
        self.children.push(SyntaxElement::Token(token));
        self
    }

    pub fn node(&mut self, node: SyntaxNode) -> &mut Self {
        self.children.push(SyntaxElement::Node(node));
        self
    }

    pub fn element(&mut self, element: SyntaxElement) -> &mut Self {
        self.children.push(element);
        self
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = SyntaxElement>) -> &mut Self {
        self.children.extend(elements);
        self
    }

    pub fn opt_node(&mut self, node: Option<SyntaxNode>) -> &mut Self {
        if let Some(node) = node {
            self.node(node);
        }
        self
    }

    /// Attach a diagnostic to the node itself.
    pub fn diagnostic(&mut self, diagnostic: Diagnostic) -> &mut Self {
        self.diagnostics.push(diagnostic);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn finish(self) -> SyntaxNode {
        SyntaxNode::new(self.kind, self.children, self.diagnostics)
    }
}
