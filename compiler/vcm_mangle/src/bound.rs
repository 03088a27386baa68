//! Representative upper-bound selection.
//!
//! A type parameter may declare several bounds (an intersection). The
//! mangling analysis looks at exactly one of them: the first declared.
//! Selection is kept apart from the recursive walk over bounds, which lives
//! in the engine together with its cycle guard.

use vcm_ir::{TypeParamDecl, TypeRef};

/// The bound of `param` that drives mangling analysis.
///
/// Returned verbatim; a bound that is itself a type parameter is not
/// followed here. `None` only for a parameter without bounds, which a graph
/// produced by `GraphBuilder::finish` never contains.
#[inline]
pub fn representative_upper_bound(param: &TypeParamDecl) -> Option<&TypeRef> {
    param.bounds.first()
}
