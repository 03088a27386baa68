//! Stack safety for deep declaration-graph walks.
//!
//! The mangling predicate follows type-parameter bound chains recursively.
//! A well-formed program keeps those chains short, but generated code and
//! fuzzed graphs can produce chains tens of thousands of links long. Each
//! link costs one native stack frame, so the walk grows the stack on demand
//! instead of assuming a depth bound.
//!
//! # Platform Support
//!
//! - **Native targets**: grows the stack through `stacker`.
//! - **WASM targets**: passthrough (the host manages the stack).
//!
//! # Usage
//!
//! ```text
//! fn walk(&self, param: TypeParamId, visiting: &mut Visiting) -> bool {
//!     ensure_sufficient_stack(|| {
//!         // ... recurse into the representative bound ...
//!     })
//! }
//! ```

/// Remaining stack below which a new segment is allocated (100KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
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

#[cfg(test)]
mod tests {
    use super::*;

    /// A bound chain `T0: T1, T1: T2, ...` modelled as successor links.
    fn chain_length(links: &[usize], at: usize) -> usize {
        ensure_sufficient_stack(|| match links.get(at) {
            Some(&next) => 1 + chain_length(links, next),
            None => 0,
        })
    }

    #[test]
    fn short_chain() {
        let links = [1, 2, 3];
        assert_eq!(chain_length(&links, 0), 3);
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let links: Vec<usize> = (1..=200_000).collect();
        assert_eq!(chain_length(&links, 0), 200_000);
    }

    #[test]
    fn passes_through_return_value() {
        assert!(ensure_sufficient_stack(|| true));
        let value: Option<u32> = ensure_sufficient_stack(|| Some(7));
        assert_eq!(value, Some(7));
    }
}
