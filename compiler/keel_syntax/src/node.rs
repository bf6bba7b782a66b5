//! Tree nodes.

use keel_diagnostic::Diagnostic;
use keel_ir::{Span, SyntaxKind};

use crate::{NodeFlags, Preorder, SyntaxToken, Tokens};

/// A child of a node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SyntaxElement {
    Node(SyntaxNode),
    Token(SyntaxToken),
}

impl SyntaxElement {
    pub fn as_node(&self) -> Option<&SyntaxNode> {
        match self {
            SyntaxElement::Node(node) => Some(node),
            SyntaxElement::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&SyntaxToken> {
        match self {
            SyntaxElement::Token(token) => Some(token),
            SyntaxElement::Node(_) => None,
        }
    }

    /// `None` for a node with no tokens.
    pub fn full_span(&self) -> Option<Span> {
        match self {
            SyntaxElement::Node(node) => node.full_span(),
            SyntaxElement::Token(token) => Some(token.full_span()),
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            SyntaxElement::Node(node) => node.span(),
            SyntaxElement::Token(token) => Some(token.span()),
        }
    }

    pub fn write_to(&self, out: &mut String) {
        match self {
            SyntaxElement::Node(node) => node.write_to(out),
            SyntaxElement::Token(token) => token.write_to(out),
        }
    }

    pub(crate) fn flags(&self) -> NodeFlags {
        match self {
            SyntaxElement::Node(node) => node.flags(),
            SyntaxElement::Token(token) => NodeFlags::from_token(token),
        }
    }
}

impl From<SyntaxNode> for SyntaxElement {
    fn from(node: SyntaxNode) -> Self {
        SyntaxElement::Node(node)
    }
}

impl From<SyntaxToken> for SyntaxElement {
    fn from(token: SyntaxToken) -> Self {
        SyntaxElement::Token(token)
    }
}

/// An immutable interior node.
///
/// Built once by [`NodeBuilder`](crate::NodeBuilder) from its children;
/// owns them exclusively.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SyntaxNode {
    kind: SyntaxKind,
    children: Vec<SyntaxElement>,
    diagnostics: Vec<Diagnostic>,
    flags: NodeFlags,
    full_span: Option<Span>,
}

impl SyntaxNode {
    pub fn new(kind: SyntaxKind, children: Vec<SyntaxElement>, diagnostics: Vec<Diagnostic>) -> Self {
        let mut flags = NodeFlags::empty();
        let mut full_span: Option<Span> = None;
        for child in &children {
            flags |= child.flags();
            if let Some(span) = child.full_span() {
                full_span = Some(full_span.map_or(span, |acc| acc.union(span)));
            }
        }
        if !diagnostics.is_empty() {
            flags |= NodeFlags::CONTAINS_DIAGNOSTICS;
        }
        SyntaxNode {
            kind,
            children,
            diagnostics,
            flags,
            full_span,
        }
    }

    /// Attach a diagnostic to an already built node. Used when the problem
    /// is only known once the node's span is (an array size in a
    /// declaration, a one-element tuple type).
    #[must_use]
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self.flags |= NodeFlags::CONTAINS_DIAGNOSTICS;
        self
    }

    /// The same node with `prefix` placed before its children. Statement
    /// attributes are only recognised after the statement is known.
    #[must_use]
    pub fn with_prefix(mut self, prefix: Vec<SyntaxElement>) -> Self {
        if prefix.is_empty() {
            return self;
        }
        let mut children = prefix;
        children.append(&mut self.children);
        let diagnostics = std::mem::take(&mut self.diagnostics);
        SyntaxNode::new(self.kind, children, diagnostics)
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn children(&self) -> &[SyntaxElement] {
        &self.children
    }

    /// Diagnostics attached to this node itself (not its descendants).
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[inline]
    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    pub fn contains_missing(&self) -> bool {
        self.flags.contains(NodeFlags::CONTAINS_MISSING)
    }

    pub fn contains_diagnostics(&self) -> bool {
        self.flags.contains(NodeFlags::CONTAINS_DIAGNOSTICS)
    }

    pub fn contains_skipped(&self) -> bool {
        self.flags.contains(NodeFlags::CONTAINS_SKIPPED)
    }

    /// Span including the first token's leading and last token's trailing
    /// trivia. `None` when the node has no tokens at all.
    pub fn full_span(&self) -> Option<Span> {
        self.full_span
    }

    /// Span of the node's text without surrounding trivia.
    ///
    /// Missing tokens do not widen the span unless every token is missing,
    /// in which case the span is zero-width at the first one.
    pub fn span(&self) -> Option<Span> {
        let mut present: Option<Span> = None;
        let mut first_missing: Option<Span> = None;
        for token in self.tokens() {
            if token.is_missing() {
                first_missing.get_or_insert(token.span());
            } else {
                let span = token.span();
                present = Some(present.map_or(span, |acc| acc.union(span)));
            }
        }
        present.or(first_missing)
    }

    pub fn child_nodes(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter_map(SyntaxElement::as_node)
    }

    pub fn child_tokens(&self) -> impl Iterator<Item = &SyntaxToken> {
        self.children.iter().filter_map(SyntaxElement::as_token)
    }

    /// First direct child node of `kind`.
    pub fn child_of_kind(&self, kind: SyntaxKind) -> Option<&SyntaxNode> {
        self.child_nodes().find(|n| n.kind == kind)
    }

    /// This node and all descendant nodes in pre-order.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder::new(self)
    }

    /// All tokens under this node in source order (trivia not included).
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(self)
    }

    pub fn first_token(&self) -> Option<&SyntaxToken> {
        self.tokens().next()
    }

    pub fn last_token(&self) -> Option<&SyntaxToken> {
        self.children.iter().rev().find_map(|child| match child {
            SyntaxElement::Token(token) => Some(token),
            SyntaxElement::Node(node) => node.last_token(),
        })
    }

    /// Write the node back out, trivia included.
    pub fn write_to(&self, out: &mut String) {
        for token in self.tokens() {
            token.write_to(out);
        }
    }

    /// The full text of the subtree. For a root node this is the source.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    /// Every diagnostic in the subtree, ordered by span start. Ties keep
    /// tree pre-order (a node's own diagnostics before its children's) and
    /// then emission order.
    pub fn collect_diagnostics(&self) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out.sort_by_key(|d| d.span.start);
        out
    }

    fn collect_into(&self, out: &mut Vec<Diagnostic>) {
        out.extend(self.diagnostics.iter().cloned());
        let mut stack = vec![self.children.iter()];
        while let Some(top) = stack.last_mut() {
            match top.next() {
                Some(SyntaxElement::Node(node)) => {
                    if node.contains_diagnostics() {
                        out.extend(node.diagnostics.iter().cloned());
                        stack.push(node.children.iter());
                    }
                }
                Some(SyntaxElement::Token(token)) => token.collect_diagnostics(out),
                None => {
                    stack.pop();
                }
            }
        }
    }

    /// Kinds of this node and its descendants in pre-order.
    pub fn kinds(&self) -> Vec<SyntaxKind> {
        self.preorder().map(SyntaxNode::kind).collect()
    }
}

// Deep trees are torn down iteratively so dropping them cannot overflow
// the stack.
impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            if let SyntaxElement::Node(mut node) = child {
                pending.append(&mut node.children);
            }
        }
    }
}
