//! Entity handles into a [`DeclGraph`](crate::DeclGraph).
//!
//! Each handle is a dense `u32` index into one of the graph's arenas.
//! Handles are only meaningful for the graph that allocated them.

// ── Classes ─────────────────────────────────────────────────────────

/// Handle to a [`ClassDecl`](crate::ClassDecl).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ClassId(u32);

impl ClassId {
    /// Create a class handle from a raw index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw `u32` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index as `usize` (for indexing into `Vec`s).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

// ── Callables ───────────────────────────────────────────────────────

/// Handle to a [`CallableDecl`](crate::CallableDecl).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct CallableId(u32);

impl CallableId {
    /// Create a callable handle from a raw index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw `u32` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index as `usize`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

// ── Type parameters ─────────────────────────────────────────────────

/// Handle to a [`TypeParamDecl`](crate::TypeParamDecl).
///
/// Identity of a type parameter for cycle detection: two references to
/// the same parameter compare equal regardless of where they appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeParamId(u32);

impl TypeParamId {
    /// Create a type-parameter handle from a raw index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw `u32` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index as `usize`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Convert an arena length into the next handle value.
///
/// # Panics
/// Panics if the arena already holds `u32::MAX` entries.
pub(crate) fn next_raw(len: usize, arena: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{arena} arena exceeded u32::MAX entries"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_round_trip_raw() {
        assert_eq!(ClassId::new(3).raw(), 3);
        assert_eq!(CallableId::new(7).index(), 7);
        assert_eq!(TypeParamId::new(0).raw(), 0);
    }

    #[test]
    fn handles_are_ordered() {
        let mut ids = vec![TypeParamId::new(2), TypeParamId::new(0), TypeParamId::new(1)];
        ids.sort();
        assert_eq!(
            ids,
            vec![TypeParamId::new(0), TypeParamId::new(1), TypeParamId::new(2)]
        );
    }

    #[test]
    fn next_raw_fits_u32() {
        assert_eq!(next_raw(0, "class"), 0);
        assert_eq!(next_raw(41, "class"), 41);
    }
}
