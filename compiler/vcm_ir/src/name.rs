//! Interned string identifier.

use std::fmt;

/// Interned string identifier.
///
/// A dense 32-bit index into a [`StringInterner`](crate::StringInterner).
/// Equality and hashing are O(1) integer operations.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the interner's string table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(Name::EMPTY.raw(), 0);
        assert_eq!(Name::default(), Name::EMPTY);
    }

    #[test]
    fn ordering_follows_raw_index() {
        assert!(Name::from_raw(1) < Name::from_raw(2));
        assert_eq!(Name::from_raw(9).index(), 9);
    }
}
