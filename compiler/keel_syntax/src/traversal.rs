//! Depth-first iterators over a tree.
//!
//! Both iterators keep an explicit stack of child slices, so walking a deep
//! tree does not recurse.

use std::slice;

use crate::{SyntaxElement, SyntaxNode, SyntaxToken};

/// Nodes in pre-order, starting with the root.
pub struct Preorder<'a> {
    root: Option<&'a SyntaxNode>,
    stack: Vec<slice::Iter<'a, SyntaxElement>>,
}

impl<'a> Preorder<'a> {
    pub(crate) fn new(root: &'a SyntaxNode) -> Self {
        Preorder {
            root: Some(root),
            stack: Vec::new(),
        }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            self.stack.push(root.children().iter());
            return Some(root);
        }
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(SyntaxElement::Node(node)) => {
                    self.stack.push(node.children().iter());
                    return Some(node);
                }
                Some(SyntaxElement::Token(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Tokens in source order, missing tokens included.
pub struct Tokens<'a> {
    stack: Vec<slice::Iter<'a, SyntaxElement>>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(root: &'a SyntaxNode) -> Self {
        Tokens {
            stack: vec![root.children().iter()],
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a SyntaxToken;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(SyntaxElement::Token(token)) => return Some(token),
                Some(SyntaxElement::Node(node)) => self.stack.push(node.children().iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}
