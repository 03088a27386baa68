//! Declaration flags.
//!
//! `ClassFlags` are fixed when the upstream resolver builds the graph and
//! are only ever read afterwards. The mangling engine takes them at face
//! value: it never re-derives "is this a value class" from structure.

use bitflags::bitflags;

bitflags! {
    /// Facts about a class declaration.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
    pub struct ClassFlags: u8 {
        /// Value class: compiled to its underlying representation where
        /// possible instead of a boxed object.
        const VALUE = 1 << 0;
        /// Sealed class: the set of direct subclasses is closed.
        const SEALED = 1 << 1;
    }
}

impl ClassFlags {
    /// Check if this is a value class.
    #[inline]
    pub const fn is_value(self) -> bool {
        self.contains(Self::VALUE)
    }

    /// Check if this is a sealed class.
    #[inline]
    pub const fn is_sealed(self) -> bool {
        self.contains(Self::SEALED)
    }
}

/// Visibility of a callable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// Visible everywhere.
    #[default]
    Public,
    /// Visible within the declaring module.
    Internal,
    /// Visible to subclasses.
    Protected,
    /// Visible only within the declaring scope.
    Private,
}

impl Visibility {
    /// Check if this is `Private`.
    #[inline]
    pub const fn is_private(self) -> bool {
        matches!(self, Visibility::Private)
    }
}
