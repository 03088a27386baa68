//! Resolved declarations: classes, callables and type parameters.
//!
//! These are read-only views. The graph builder creates them once per
//! compilation; nothing downstream mutates them.

use smallvec::SmallVec;

use crate::{CallableId, ClassFlags, ClassId, FqName, Name, TypeParamId, TypeRef, Visibility};

/// A class declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassDecl {
    /// Fully-qualified identity.
    pub name: FqName,
    /// Value / sealed facts.
    pub flags: ClassFlags,
    /// Declared type parameters, in order.
    pub type_params: Vec<TypeParamId>,
}

impl ClassDecl {
    #[inline]
    pub fn is_value_class(&self) -> bool {
        self.flags.is_value()
    }

    #[inline]
    pub fn is_sealed(&self) -> bool {
        self.flags.is_sealed()
    }
}

/// What kind of callable a declaration is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum CallableKind {
    /// A constructor of `class`.
    Constructor {
        /// The class being constructed.
        class: ClassId,
    },
    /// Any other function or method.
    Function,
}

/// A value parameter of a callable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueParam {
    pub name: Name,
    pub ty: TypeRef,
}

impl ValueParam {
    pub fn new(name: Name, ty: TypeRef) -> Self {
        ValueParam { name, ty }
    }
}

/// A callable declaration (constructor or function).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct CallableDecl {
    /// Simple name. Constructors use the constructed class's short name.
    pub name: Name,
    pub kind: CallableKind,
    pub visibility: Visibility,
    /// Value parameters, in order.
    pub params: Vec<ValueParam>,
    /// Declared return type. `None` for constructors and for callables whose
    /// return type is absent.
    pub return_type: Option<TypeRef>,
    /// Type parameters declared by this callable.
    pub type_params: Vec<TypeParamId>,
}

impl CallableDecl {
    /// The constructed class, if this is a constructor.
    #[inline]
    pub fn constructed_class(&self) -> Option<ClassId> {
        match self.kind {
            CallableKind::Constructor { class } => Some(class),
            CallableKind::Function => None,
        }
    }

    #[inline]
    pub fn is_constructor(&self) -> bool {
        matches!(self.kind, CallableKind::Constructor { .. })
    }

    /// Types of the value parameters, in order.
    pub fn param_types(&self) -> impl Iterator<Item = &TypeRef> {
        self.params.iter().map(|p| &p.ty)
    }
}

/// Where a type parameter is declared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeParamOwner {
    Class(ClassId),
    Callable(CallableId),
}

/// A declared type parameter with its upper bounds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeParamDecl {
    pub name: Name,
    pub owner: TypeParamOwner,
    /// Declared upper bounds, in order. Multiple bounds model an
    /// intersection constraint. Non-empty in any graph that passed
    /// `GraphBuilder::finish`; the first entry is the representative bound.
    pub bounds: SmallVec<[TypeRef; 1]>,
}
