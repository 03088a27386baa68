//! The mangling decision engine.
//!
//! Answers, for a resolved callable, whether its platform-visible name needs
//! a mangled suffix and whether a synthetic constructor overload must be
//! hidden. Both answers reduce to two type predicates:
//!
//! - **Parameter position**: a concrete non-exempt value class, or a type
//!   parameter whose representative bound (followed transitively) is one.
//! - **Return position**: a concrete non-exempt value class only. Type
//!   parameters in return position are not expanded through their bounds.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use vcm_ir::{CallableDecl, CallableId, CallableKind, ClassId, DeclGraph, TypeParamId, TypeRef};
use vcm_stack::ensure_sufficient_stack;

use crate::{representative_upper_bound, DecisionCache, ExemptionRegistry, ManglingDecision};

/// Type parameters on the current bound-walk stack.
type Visiting = FxHashSet<TypeParamId>;

/// Mangling queries over one declaration graph.
///
/// Holds only shared references; cheap to copy into each worker thread.
#[derive(Clone, Copy)]
pub struct ManglingEngine<'a> {
    graph: &'a DeclGraph,
    exemptions: &'a ExemptionRegistry,
    cache: Option<&'a DecisionCache>,
}

impl<'a> ManglingEngine<'a> {
    /// Create an engine for `graph` with the given exemption list.
    pub fn new(graph: &'a DeclGraph, exemptions: &'a ExemptionRegistry) -> Self {
        Self {
            graph,
            exemptions,
            cache: None,
        }
    }

    /// Memoize [`decide`](Self::decide) results in `cache`.
    ///
    /// The cache must only ever be used with this graph.
    #[must_use]
    pub fn with_cache(self, cache: &'a DecisionCache) -> Self {
        Self {
            cache: Some(cache),
            ..self
        }
    }

    /// The graph being queried.
    pub fn graph(&self) -> &'a DeclGraph {
        self.graph
    }

    // ── Class-level queries ─────────────────────────────────────────

    /// Check if `class` is a value class that is not exempt.
    ///
    /// Reads the class's own flags only; its fields are irrelevant.
    pub fn is_value_class_that_requires_mangling(&self, class: ClassId) -> bool {
        self.graph
            .class(class)
            .is_some_and(|decl| decl.is_value_class() && !self.exemptions.is_exempt_class(decl))
    }

    /// Check if `ty` directly names a value class that is not exempt.
    pub fn type_is_value_class_that_requires_mangling(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Class { class, .. } => self.is_value_class_that_requires_mangling(*class),
            TypeRef::Param(_) | TypeRef::Primitive(_) | TypeRef::Platform(_) => false,
        }
    }

    // ── Type predicates ─────────────────────────────────────────────

    /// Check if `ty` forces mangling when it appears as a value parameter.
    pub fn type_requires_mangling_in_parameter_position(&self, ty: &TypeRef) -> bool {
        let mut visiting = Visiting::default();
        self.requires_mangling_in_parameter(ty, &mut visiting)
    }

    fn requires_mangling_in_parameter(&self, ty: &TypeRef, visiting: &mut Visiting) -> bool {
        match ty {
            TypeRef::Class { class, .. } => self.is_value_class_that_requires_mangling(*class),
            TypeRef::Param(param) => self.bound_requires_mangling(*param, visiting),
            TypeRef::Primitive(_) | TypeRef::Platform(_) => false,
        }
    }

    /// Follow the representative bound of `param`.
    ///
    /// Meeting a parameter that is already on the walk means the bounds are
    /// cyclic; a cycle imposes no concrete value class, so the answer is
    /// `false`.
    fn bound_requires_mangling(&self, param: TypeParamId, visiting: &mut Visiting) -> bool {
        if !visiting.insert(param) {
            trace!(?param, "bound cycle reached");
            return false;
        }

        let result = match self.graph.type_param(param).and_then(representative_upper_bound) {
            Some(bound) => {
                ensure_sufficient_stack(|| self.requires_mangling_in_parameter(bound, visiting))
            }
            None => false,
        };

        visiting.remove(&param);
        result
    }

    /// Check if a return type of `ty` forces mangling. `None` is an absent
    /// return type.
    pub fn type_requires_mangling_as_return_type(&self, ty: Option<&TypeRef>) -> bool {
        ty.is_some_and(|ty| self.type_is_value_class_that_requires_mangling(ty))
    }

    // ── Callable-level queries ──────────────────────────────────────

    /// Check if any of `params` forces mangling in parameter position.
    pub fn requires_function_name_mangling_for_parameter_types(
        &self,
        params: &[TypeRef],
    ) -> bool {
        self.any_param_requires_mangling(params.iter())
    }

    fn any_param_requires_mangling<'t>(
        &self,
        mut params: impl Iterator<Item = &'t TypeRef>,
    ) -> bool {
        params.any(|ty| self.type_requires_mangling_in_parameter_position(ty))
    }

    /// Check if `callable` needs a mangled name: some parameter type
    /// qualifies in parameter position, or the return type qualifies.
    pub fn requires_function_name_mangling(&self, callable: &CallableDecl) -> bool {
        self.any_param_requires_mangling(callable.param_types())
            || self.type_requires_mangling_as_return_type(callable.return_type.as_ref())
    }

    /// Check if the back end should hide a synthetic overload of this
    /// constructor rather than emit a mangled one.
    ///
    /// Never for non-constructors, private constructors, constructors of
    /// value classes (those take the unboxed-representation path) or of
    /// sealed classes (closed hierarchies do not collide with platform
    /// overloads).
    pub fn should_suppress_constructor_due_to_value_class_parameters(
        &self,
        callable: &CallableDecl,
    ) -> bool {
        let CallableKind::Constructor { class } = callable.kind else {
            return false;
        };
        if callable.visibility.is_private() {
            return false;
        }
        let Some(owner) = self.graph.class(class) else {
            return false;
        };
        if owner.is_value_class() || owner.is_sealed() {
            return false;
        }

        self.any_param_requires_mangling(callable.param_types())
    }

    // ── Back-end entry points ───────────────────────────────────────

    /// Both decisions for one callable of the graph.
    ///
    /// Unknown ids get [`ManglingDecision::UNCHANGED`].
    pub fn decide(&self, id: CallableId) -> ManglingDecision {
        match self.cache {
            Some(cache) => cache.get_or_compute(id, || self.compute_decision(id)),
            None => self.compute_decision(id),
        }
    }

    fn compute_decision(&self, id: CallableId) -> ManglingDecision {
        let Some(callable) = self.graph.callable(id) else {
            return ManglingDecision::UNCHANGED;
        };

        let decision = ManglingDecision {
            mangle_name: self.requires_function_name_mangling(callable),
            suppress_constructor: self
                .should_suppress_constructor_due_to_value_class_parameters(callable),
        };
        debug!(
            callable = id.raw(),
            mangle_name = decision.mangle_name,
            suppress_constructor = decision.suppress_constructor,
            "mangling decision"
        );
        decision
    }

    /// Decisions for every callable, in id order.
    pub fn decide_all(&self) -> Vec<(CallableId, ManglingDecision)> {
        self.graph
            .callables()
            .map(|(id, _)| (id, self.decide(id)))
            .collect()
    }
}
