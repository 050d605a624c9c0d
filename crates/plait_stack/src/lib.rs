//! Stack safety for recursive grammars.
//!
//! A grammar whose rules refer to each other (JSON's value, object and
//! array) recurses once per nesting level of the input. Inputs such as
//! `[[[[...]]]]` with tens of thousands of brackets would exhaust a
//! thread's native stack, so every rule resolution runs inside
//! [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` allocates a fresh segment when the
//!   remaining stack drops below the red zone.
//! - **WASM targets**: passthrough.
//!
//! # Configuration
//!
//! - **Red zone**: 128KB. A single rule application (a handful of nested
//!   combinator closures) stays well inside it.
//! - **Growth size**: 1MB per new segment.

/// Minimum stack space to keep available before entering a rule.
const RED_ZONE: usize = 128 * 1024;

/// Stack space to allocate when growing.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// # Example
///
/// ```text
/// Parser::new(move |input| {
///     ensure_sufficient_stack(|| slot.parse(input))
/// })
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Bytes of stack left before growth kicks in, if the platform can tell.
///
/// Used by diagnostics in the driver; `None` on WASM or when the stack
/// bounds are unknown.
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

/// WASM version: stack bounds are not observable.
#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}
