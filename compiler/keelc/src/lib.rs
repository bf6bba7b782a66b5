//! The keel command line driver.
//!
//! ```text
//! keel parse [--lang=<v>] [--color=<m>] <files...>   tree dump + diagnostics
//! keel check [--lang=<v>] [--color=<m>] <files...>   diagnostics only
//! keel lex <file>                                     tokens with trivia
//! keel --explain <code>                               diagnostic documentation
//! ```
//!
//! Files are parsed in parallel on the rayon pool; output keeps input
//! order. Exit status is 0 when clean, 1 when any error diagnostic was
//! reported and 2 when the command itself failed (see [`DriverError`]).

pub mod commands;
pub mod config;
mod error;
pub mod tracing_setup;

pub use commands::Outcome;
pub use config::DriverConfig;
pub use error::DriverError;
