//! Grammar Modules
//!
//! Parsing implementations for every syntax construct.
//!
//! # Organization
//!
//! Each module extends `Parser` with methods for specific grammar productions:
//!
//! - [`unit`]: compilation units, `using` directives, namespaces
//! - [`item`]: modifiers, type declarations, members, parameters
//! - [`stmt`]: statements and local declarations
//! - [`expr`]: expressions by precedence climbing
//! - [`ty`]: types and names
//! - [`attr`]: attribute lists
//!
//! # Design
//!
//! Every production returns a node; none can fail. When a required token
//! is absent the missing-token factory supplies it, and when the current
//! token fits nowhere it becomes skipped trivia with a diagnostic. Loops
//! that cannot tell up front whether their body will consume anything
//! check progress afterwards (see `progress`).

mod attr;
mod expr;
mod item;
mod stmt;
mod ty;
mod unit;
