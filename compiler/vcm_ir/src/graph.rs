//! The declaration graph.
//!
//! Flat arenas of classes, callables and type parameters, addressed by
//! [`ClassId`], [`CallableId`] and [`TypeParamId`]. A `DeclGraph` is only
//! obtainable from [`GraphBuilder::finish`](crate::GraphBuilder::finish),
//! which validates every cross-reference, and is immutable afterwards.
//!
//! Bound relations between type parameters are *not* required to be
//! acyclic. Consumers that follow bounds must guard against cycles.

use rustc_hash::FxHashMap;

use crate::{
    CallableDecl, CallableId, ClassDecl, ClassId, FqName, TypeParamDecl, TypeParamId, TypeRef,
};

/// Immutable, fully resolved declaration graph for one compilation.
///
/// `Send + Sync`: queries over it may run from any number of threads.
#[derive(Clone, Debug, Default)]
pub struct DeclGraph {
    pub(crate) classes: Vec<ClassDecl>,
    pub(crate) callables: Vec<CallableDecl>,
    pub(crate) type_params: Vec<TypeParamDecl>,
    /// Qualified name -> class, for identity lookups.
    pub(crate) classes_by_name: FxHashMap<FqName, ClassId>,
}

impl DeclGraph {
    /// Look up a class.
    #[inline]
    pub fn class(&self, id: ClassId) -> Option<&ClassDecl> {
        self.classes.get(id.index())
    }

    /// Look up a callable.
    #[inline]
    pub fn callable(&self, id: CallableId) -> Option<&CallableDecl> {
        self.callables.get(id.index())
    }

    /// Look up a type parameter.
    #[inline]
    pub fn type_param(&self, id: TypeParamId) -> Option<&TypeParamDecl> {
        self.type_params.get(id.index())
    }

    /// The first declared bound of a type parameter, not followed further.
    ///
    /// `None` for an unknown id.
    pub fn representative_bound(&self, id: TypeParamId) -> Option<&TypeRef> {
        self.type_param(id).and_then(|param| param.bounds.first())
    }

    /// Find a class by qualified name.
    pub fn class_by_name(&self, name: FqName) -> Option<ClassId> {
        self.classes_by_name.get(&name).copied()
    }

    /// The class a type reference names, if it names one that exists.
    pub fn class_of(&self, ty: &TypeRef) -> Option<&ClassDecl> {
        ty.as_class().and_then(|id| self.class(id))
    }

    /// All classes in id order.
    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &ClassDecl)> {
        (0u32..)
            .zip(&self.classes)
            .map(|(raw, decl)| (ClassId::new(raw), decl))
    }

    /// All callables in id order.
    pub fn callables(&self) -> impl Iterator<Item = (CallableId, &CallableDecl)> {
        (0u32..)
            .zip(&self.callables)
            .map(|(raw, decl)| (CallableId::new(raw), decl))
    }

    /// All type parameters in id order.
    pub fn type_params(&self) -> impl Iterator<Item = (TypeParamId, &TypeParamDecl)> {
        (0u32..)
            .zip(&self.type_params)
            .map(|(raw, decl)| (TypeParamId::new(raw), decl))
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn callable_count(&self) -> usize {
        self.callables.len()
    }

    pub fn type_param_count(&self) -> usize {
        self.type_params.len()
    }
}
