//! Type references in resolved declarations.
//!
//! `TypeRef` is a closed sum: a use site either names a concrete class
//! (with its type arguments), names a type parameter, or is one of the
//! primitive / platform types that never matter for value-class mangling.

use crate::{ClassId, Name, TypeParamId};

/// Built-in primitive types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Primitive {
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
    /// The unit type; a callable "returning nothing" returns this.
    Unit,
    /// The bottom type.
    Nothing,
}

impl Primitive {
    /// Source-level spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Primitive::Bool => "Bool",
            Primitive::Byte => "Byte",
            Primitive::Short => "Short",
            Primitive::Int => "Int",
            Primitive::Long => "Long",
            Primitive::Float => "Float",
            Primitive::Double => "Double",
            Primitive::Char => "Char",
            Primitive::Unit => "Unit",
            Primitive::Nothing => "Nothing",
        }
    }
}

/// A reference to a type at a use site.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeRef {
    /// A concrete class, e.g. `Meters` or `Result<Int>`.
    Class {
        /// The referenced class.
        class: ClassId,
        /// Type arguments, in declaration order. Empty for non-generic classes.
        args: Box<[TypeRef]>,
    },
    /// A use of a type parameter, e.g. `T`.
    Param(TypeParamId),
    /// A primitive type.
    Primitive(Primitive),
    /// A platform type the front end does not model (by display name).
    Platform(Name),
}

impl TypeRef {
    /// A concrete class without type arguments.
    pub fn class(class: ClassId) -> Self {
        TypeRef::Class {
            class,
            args: Box::default(),
        }
    }

    /// A concrete class applied to type arguments.
    pub fn applied(class: ClassId, args: impl Into<Box<[TypeRef]>>) -> Self {
        TypeRef::Class {
            class,
            args: args.into(),
        }
    }

    /// A use of a type parameter.
    #[inline]
    pub const fn param(param: TypeParamId) -> Self {
        TypeRef::Param(param)
    }

    /// The unit type.
    pub const UNIT: TypeRef = TypeRef::Primitive(Primitive::Unit);

    /// The referenced class, if this names a concrete class.
    #[inline]
    pub fn as_class(&self) -> Option<ClassId> {
        match self {
            TypeRef::Class { class, .. } => Some(*class),
            TypeRef::Param(_) | TypeRef::Primitive(_) | TypeRef::Platform(_) => None,
        }
    }

    /// The referenced type parameter, if this is a parameter use.
    #[inline]
    pub fn as_param(&self) -> Option<TypeParamId> {
        match self {
            TypeRef::Param(param) => Some(*param),
            TypeRef::Class { .. } | TypeRef::Primitive(_) | TypeRef::Platform(_) => None,
        }
    }

    /// Type arguments of a class reference (empty otherwise).
    pub fn args(&self) -> &[TypeRef] {
        match self {
            TypeRef::Class { args, .. } => args,
            TypeRef::Param(_) | TypeRef::Primitive(_) | TypeRef::Platform(_) => &[],
        }
    }

    /// Check if this is the unit type.
    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self, TypeRef::Primitive(Primitive::Unit))
    }
}
