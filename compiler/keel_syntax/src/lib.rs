//! Lossless concrete syntax tree.
//!
//! Every byte of the input lives in exactly one token's text or trivia, so
//! writing a tree back out reproduces the source verbatim, including
//! whitespace, comments and tokens the parser could not place (those become
//! [`Trivia::Skipped`]).
//!
//! Trees are built bottom-up with [`NodeBuilder`] and never mutated after.
//! Tokens and nodes own their diagnostics; [`SyntaxNode::collect_diagnostics`]
//! flattens them in source order.

mod builder;
mod dump;
mod flags;
mod node;
mod token;
mod traversal;
mod trivia;

pub use builder::NodeBuilder;
pub use dump::{dump_tree, DumpOptions};
pub use flags::{NodeFlags, TokenFlags};
pub use node::{SyntaxElement, SyntaxNode};
pub use token::SyntaxToken;
pub use traversal::{Preorder, Tokens};
pub use trivia::{Trivia, TriviaKind, TriviaList};
