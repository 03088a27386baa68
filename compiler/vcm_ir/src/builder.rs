//! Construction and validation of a [`DeclGraph`].
//!
//! The upstream resolver drives a `GraphBuilder` declaration by declaration.
//! Builder methods never fail; precondition violations are recorded and the
//! first one is reported by [`GraphBuilder::finish`]. A graph that comes out
//! of `finish` has no dangling handles and no type parameter without a bound.
//!
//! Bound cycles (`T: S, S: T`) are accepted on purpose: they are not a
//! referential error, and the analyses over the graph are total on them.

use std::fmt;

use smallvec::SmallVec;

use crate::ids::next_raw;
use crate::{
    CallableDecl, CallableId, CallableKind, ClassDecl, ClassFlags, ClassId, DeclGraph, FqName,
    StringInterner, TypeParamDecl, TypeParamId, TypeParamOwner, TypeRef, ValueParam, Visibility,
};

/// A violated graph precondition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// Two classes were declared with the same qualified name.
    DuplicateClass { name: String },
    /// A type reference names a class that was never declared.
    UnknownClass { class: ClassId },
    /// A type reference names a type parameter that was never declared.
    UnknownTypeParam { param: TypeParamId },
    /// A builder call named a callable that was never declared.
    UnknownCallable { callable: CallableId },
    /// A type parameter ended up with no upper bound.
    EmptyBounds { param: TypeParamId, name: String },
    /// A return type was attached to a constructor.
    ConstructorReturnType { callable: CallableId },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::DuplicateClass { name } => {
                write!(f, "class `{name}` is declared more than once")
            }
            GraphError::UnknownClass { class } => {
                write!(f, "type reference names undeclared class #{}", class.raw())
            }
            GraphError::UnknownTypeParam { param } => write!(
                f,
                "type reference names undeclared type parameter #{}",
                param.raw()
            ),
            GraphError::UnknownCallable { callable } => {
                write!(f, "undeclared callable #{}", callable.raw())
            }
            GraphError::EmptyBounds { param, name } => write!(
                f,
                "type parameter `{name}` (#{}) has no upper bound",
                param.raw()
            ),
            GraphError::ConstructorReturnType { callable } => write!(
                f,
                "constructor #{} cannot declare a return type",
                callable.raw()
            ),
        }
    }
}

impl std::error::Error for GraphError {}

/// Incremental builder for a [`DeclGraph`].
pub struct GraphBuilder<'i> {
    interner: &'i StringInterner,
    graph: DeclGraph,
    /// First precondition violation seen by a builder call.
    error: Option<GraphError>,
}

impl<'i> GraphBuilder<'i> {
    pub fn new(interner: &'i StringInterner) -> Self {
        Self {
            interner,
            graph: DeclGraph::default(),
            error: None,
        }
    }

    /// The interner names are recorded in.
    pub fn interner(&self) -> &'i StringInterner {
        self.interner
    }

    fn record(&mut self, error: GraphError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn callable_mut(&mut self, callable: CallableId) -> Option<&mut CallableDecl> {
        if callable.index() >= self.graph.callables.len() {
            self.record(GraphError::UnknownCallable { callable });
            return None;
        }
        self.graph.callables.get_mut(callable.index())
    }

    // ── Classes ─────────────────────────────────────────────────────

    /// Declare a class by qualified name (`core.units.Meters`).
    pub fn class(&mut self, path: &str, flags: ClassFlags) -> ClassId {
        let id = ClassId::new(next_raw(self.graph.classes.len(), "class"));
        let name = FqName::new(self.interner, path);
        if self.graph.classes_by_name.insert(name, id).is_some() {
            self.record(GraphError::DuplicateClass {
                name: path.to_owned(),
            });
        }
        self.graph.classes.push(ClassDecl {
            name,
            flags,
            type_params: Vec::new(),
        });
        id
    }

    /// Declare a type parameter of `class`.
    pub fn class_type_param(
        &mut self,
        class: ClassId,
        name: &str,
        bounds: impl IntoIterator<Item = TypeRef>,
    ) -> TypeParamId {
        let id = self.push_type_param(TypeParamOwner::Class(class), name, bounds);
        match self.graph.classes.get_mut(class.index()) {
            Some(decl) => decl.type_params.push(id),
            None => self.record(GraphError::UnknownClass { class }),
        }
        id
    }

    // ── Callables ───────────────────────────────────────────────────

    /// Declare a function with no parameters and no return type yet.
    pub fn function(&mut self, name: &str, visibility: Visibility) -> CallableId {
        let name = self.interner.intern(name);
        self.push_callable(name, CallableKind::Function, visibility)
    }

    /// Declare a constructor of `class` with no parameters yet.
    pub fn constructor(&mut self, class: ClassId, visibility: Visibility) -> CallableId {
        let name = if let Some(decl) = self.graph.classes.get(class.index()) {
            self.interner.intern(decl.name.short_name(self.interner))
        } else {
            self.record(GraphError::UnknownClass { class });
            self.interner.intern("<init>")
        };
        self.push_callable(name, CallableKind::Constructor { class }, visibility)
    }

    /// Append a value parameter to `callable`.
    pub fn value_param(&mut self, callable: CallableId, name: &str, ty: TypeRef) {
        let name = self.interner.intern(name);
        if let Some(decl) = self.callable_mut(callable) {
            decl.params.push(ValueParam::new(name, ty));
        }
    }

    /// Set the declared return type of a function.
    pub fn returns(&mut self, callable: CallableId, ty: TypeRef) {
        let Some(decl) = self.callable_mut(callable) else {
            return;
        };
        if decl.is_constructor() {
            self.record(GraphError::ConstructorReturnType { callable });
        } else {
            decl.return_type = Some(ty);
        }
    }

    /// Declare a type parameter of `callable`.
    pub fn callable_type_param(
        &mut self,
        callable: CallableId,
        name: &str,
        bounds: impl IntoIterator<Item = TypeRef>,
    ) -> TypeParamId {
        let id = self.push_type_param(TypeParamOwner::Callable(callable), name, bounds);
        if let Some(decl) = self.callable_mut(callable) {
            decl.type_params.push(id);
        }
        id
    }

    /// Replace the bounds of an already-declared type parameter.
    ///
    /// Needed to wire bounds that refer forward to parameters declared
    /// later, e.g. `<T: S, S: T>`.
    pub fn set_bounds(&mut self, param: TypeParamId, bounds: impl IntoIterator<Item = TypeRef>) {
        match self.graph.type_params.get_mut(param.index()) {
            Some(decl) => decl.bounds = bounds.into_iter().collect(),
            None => self.record(GraphError::UnknownTypeParam { param }),
        }
    }

    fn push_callable(
        &mut self,
        name: crate::Name,
        kind: CallableKind,
        visibility: Visibility,
    ) -> CallableId {
        let id = CallableId::new(next_raw(self.graph.callables.len(), "callable"));
        self.graph.callables.push(CallableDecl {
            name,
            kind,
            visibility,
            params: Vec::new(),
            return_type: None,
            type_params: Vec::new(),
        });
        id
    }

    fn push_type_param(
        &mut self,
        owner: TypeParamOwner,
        name: &str,
        bounds: impl IntoIterator<Item = TypeRef>,
    ) -> TypeParamId {
        let id = TypeParamId::new(next_raw(self.graph.type_params.len(), "type parameter"));
        let bounds: SmallVec<[TypeRef; 1]> = bounds.into_iter().collect();
        self.graph.type_params.push(TypeParamDecl {
            name: self.interner.intern(name),
            owner,
            bounds,
        });
        id
    }

    // ── Validation ──────────────────────────────────────────────────

    /// Validate all cross-references and produce the immutable graph.
    pub fn finish(self) -> Result<DeclGraph, GraphError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let graph = self.graph;
        let checker = RefChecker { graph: &graph };

        for (id, param) in graph.type_params() {
            if param.bounds.is_empty() {
                return Err(GraphError::EmptyBounds {
                    param: id,
                    name: self.interner.lookup(param.name).to_owned(),
                });
            }
            for bound in &param.bounds {
                checker.check(bound)?;
            }
        }

        for (_, callable) in graph.callables() {
            if let CallableKind::Constructor { class } = callable.kind {
                checker.check_class(class)?;
            }
            for ty in callable.param_types().chain(&callable.return_type) {
                checker.check(ty)?;
            }
        }

        debug_assert_eq!(graph.classes_by_name.len(), graph.classes.len());
        Ok(graph)
    }
}

/// Dangling-handle check over type references.
struct RefChecker<'g> {
    graph: &'g DeclGraph,
}

impl RefChecker<'_> {
    fn check_class(&self, class: ClassId) -> Result<(), GraphError> {
        match self.graph.class(class) {
            Some(_) => Ok(()),
            None => Err(GraphError::UnknownClass { class }),
        }
    }

    /// Walk `ty` and its type arguments with an explicit work stack.
    fn check(&self, ty: &TypeRef) -> Result<(), GraphError> {
        let mut pending: Vec<&TypeRef> = vec![ty];
        while let Some(ty) = pending.pop() {
            match ty {
                TypeRef::Class { class, args } => {
                    self.check_class(*class)?;
                    pending.extend(args.iter());
                }
                TypeRef::Param(param) => {
                    if self.graph.type_param(*param).is_none() {
                        return Err(GraphError::UnknownTypeParam { param: *param });
                    }
                }
                TypeRef::Primitive(_) | TypeRef::Platform(_) => {}
            }
        }
        Ok(())
    }
}
