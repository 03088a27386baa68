//! String interner for declaration names.
//!
//! Every class, callable and type-parameter name in the declaration graph,
//! and every qualified identity checked against the exemption list, is
//! interned once. Lookups and comparisons afterwards are `Name` (u32)
//! operations.
//!
//! The interner is shared by the graph builder and by the registry that
//! seeds the exemption list, possibly from different threads, so the table
//! sits behind a `parking_lot::RwLock`.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// More than `u32::MAX` distinct strings were interned.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {count} strings, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// Storage behind the lock.
struct InternTable {
    /// Map from string content to its index.
    map: FxHashMap<&'static str, u32>,
    /// Interned strings, indexed by `Name::index`.
    strings: Vec<&'static str>,
}

impl InternTable {
    fn with_empty() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        Self {
            map,
            strings: vec![empty],
        }
    }
}

/// Thread-safe string interner.
///
/// Strings are leaked on first insertion and live for the rest of the
/// process, which matches the lifetime of a compilation session.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner holding only the empty string.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(InternTable::with_empty()),
        }
    }

    /// Try to intern a string, returning its `Name` or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: already interned
        if let Some(&idx) = self.table.read().map.get(s) {
            return Ok(Name::from_raw(idx));
        }

        let mut guard = self.table.write();

        // Double-check after acquiring write lock
        if let Some(&idx) = guard.map.get(s) {
            return Ok(Name::from_raw(idx));
        }

        let idx = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, idx);

        Ok(Name::from_raw(idx))
    }

    /// Intern a string, returning its `Name`.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` strings are interned.
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the string for a `Name`.
    ///
    /// Names from a different interner that fall outside this table
    /// resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .strings
            .get(name.index())
            .copied()
            .unwrap_or("")
    }

    /// Look up a string without interning it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.table.read().map.get(s).copied().map(Name::from_raw)
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Check if the interner only holds the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
