//! Keel IR - shared vocabulary of the keel parser
//!
//! This crate holds the closed enumerations and small value types that every
//! other keel crate agrees on:
//! - [`Span`] for byte ranges into the source text
//! - [`TokenKind`] and [`ContextualKeyword`] for lexer output
//! - [`SyntaxKind`] for tree node shapes
//! - [`LanguageVersion`], [`Feature`] and [`ParseOptions`] for version gating
//!
//! Everything here is `Copy` (or cheap to clone), `Eq` and `Hash`, and carries
//! no references into the source.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod syntax_kind;
mod token_kind;
mod version;

pub use span::{Span, SpanError};
pub use syntax_kind::SyntaxKind;
pub use token_kind::{ContextualKeyword, TokenKind};
pub use version::{Feature, LanguageVersion, LanguageVersionError, ParseOptions};
