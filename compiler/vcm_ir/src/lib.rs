//! Declaration graph model for value-class mangling analysis.
//!
//! This crate holds the resolved, immutable view of a program's declarations
//! that the mangling engine reads:
//! - Interned names ([`Name`], [`StringInterner`]) and qualified class
//!   identities ([`FqName`])
//! - Entity handles ([`ClassId`], [`CallableId`], [`TypeParamId`])
//! - Declarations ([`ClassDecl`], [`CallableDecl`], [`TypeParamDecl`]) and
//!   use-site type references ([`TypeRef`])
//! - The [`DeclGraph`] arena and its validating [`GraphBuilder`]
//!
//! # Design
//!
//! - **Handles, not pointers**: declarations refer to each other by `u32`
//!   ids, so a cyclic bound relation is just data, never an ownership cycle.
//! - **Closed sums**: declaration and type kinds are enums matched
//!   exhaustively by consumers.
//! - **Build once, read many**: the graph is frozen by
//!   [`GraphBuilder::finish`] and is `Send + Sync`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod builder;
mod decl;
mod flags;
mod graph;
mod ids;
mod interner;
mod name;
mod qualified;
mod types;

pub use builder::{GraphBuilder, GraphError};
pub use decl::{CallableDecl, CallableKind, ClassDecl, TypeParamDecl, TypeParamOwner, ValueParam};
pub use flags::{ClassFlags, Visibility};
pub use graph::DeclGraph;
pub use ids::{CallableId, ClassId, TypeParamId};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use qualified::FqName;
pub use types::{Primitive, TypeRef};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ClassId, Name, TypeParamId, TypeRef};
    static_assert_size!(Name, 4);
    static_assert_size!(ClassId, 4);
    static_assert_size!(TypeParamId, 4);
    // Class variant: tag + ClassId (8) + Box<[TypeRef]> (16)
    static_assert_size!(TypeRef, 24);
}
