//! Stack safety for the recursive parts of Manta.
//!
//! Two paths recurse as deep as the user lets them:
//!
//! - compiling a nested `(...)` or `{...}` span compiles its body recursively,
//!   so recursion depth equals source nesting depth;
//! - invoking a closure runs its pipeline, which may invoke further closures
//!   (including itself through a host callable).
//!
//! Both wrap the recursive step in [`ensure_sufficient_stack`], which grows
//! the stack on native targets and is a passthrough on WASM.
//!
//! # Configuration
//!
//! - **Red zone**: 64KB. If less than this remains, the stack is grown.
//! - **Growth size**: 1MB per growth.

/// Minimum stack space to keep available (64KB red zone).
const RED_ZONE: usize = 64 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// ```text
/// fn compile_span(&mut self, span: Span) -> Result<Pipeline, CompileError> {
///     ensure_sufficient_stack(|| Scanner::new(...).compile())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version: call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
