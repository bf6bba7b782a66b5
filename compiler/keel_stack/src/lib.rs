//! On-demand stack growth.
//!
//! The parser recurses once per nesting level of the input (parentheses,
//! blocks, generic arguments, binary operands), so a pathological file
//! such as ten thousand `(` in a row would overflow a fixed-size thread
//! stack. Every recursive production enters through
//! [`ensure_sufficient_stack`], which moves execution onto a freshly
//! allocated segment when the current one is nearly used up.
//!
//! On `wasm32` the call is a plain passthrough.

/// Grow when less than this much stack is left.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one has
/// less than [`RED_ZONE`] bytes left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
