//! Fully-qualified class identities.

use crate::{Name, StringInterner};

/// Fully-qualified class name, e.g. `core.Result`.
///
/// Interned as one string so identity comparison is a single `Name`
/// comparison. Segments are separated by `.`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct FqName(Name);

impl FqName {
    /// Intern `path` as a qualified name.
    pub fn new(interner: &StringInterner, path: &str) -> Self {
        FqName(interner.intern(path))
    }

    /// Wrap an already-interned qualified name.
    #[inline]
    pub const fn from_name(name: Name) -> Self {
        FqName(name)
    }

    /// The interned full path.
    #[inline]
    pub const fn name(self) -> Name {
        self.0
    }

    /// The full dotted path.
    pub fn as_str(self, interner: &StringInterner) -> &'static str {
        interner.lookup(self.0)
    }

    /// The last segment (`Result` for `core.Result`).
    pub fn short_name(self, interner: &StringInterner) -> &'static str {
        let path = interner.lookup(self.0);
        match path.rfind('.') {
            Some(dot) => &path[dot + 1..],
            None => path,
        }
    }

    /// The package prefix (`core` for `core.Result`), empty for top-level names.
    pub fn package(self, interner: &StringInterner) -> &'static str {
        let path = interner.lookup(self.0);
        match path.rfind('.') {
            Some(dot) => &path[..dot],
            None => "",
        }
    }
}
