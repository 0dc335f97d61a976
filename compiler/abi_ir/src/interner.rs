//! String interner for identifiers.
//!
//! Provides O(1) interning and lookup. Interned strings are leaked so that
//! lookups can hand out `&'static str` without holding the lock.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::Name;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// The interner exceeded `u32::MAX` strings.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "string interner exceeded capacity: {count} strings, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// Storage behind the lock.
struct InternTable {
    /// Map from string content to its name.
    map: FxHashMap<&'static str, Name>,
    /// Storage for string contents, indexed by `Name::raw()`.
    strings: Vec<&'static str>,
}

impl InternTable {
    fn with_empty() -> Self {
        let mut table = InternTable {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        // Pre-intern empty string at index 0 so that `Name::EMPTY` resolves.
        table.map.insert("", Name::EMPTY);
        table.strings.push("");
        table
    }
}

/// String interner shared by the type pool, the declaration table and
/// diagnostics.
///
/// # Thread Safety
/// Uses a `RwLock` so that lowering of independent functions may intern
/// and look up names concurrently.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner containing only the empty string.
    pub fn new() -> Self {
        StringInterner {
            table: RwLock::new(InternTable::with_empty()),
        }
    }

    /// Try to intern a string, returning its `Name` or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: already interned
        if let Some(&name) = self.table.read().map.get(s) {
            return Ok(name);
        }

        let mut guard = self.table.write();

        // Double-check after acquiring write lock
        if let Some(&name) = guard.map.get(s) {
            return Ok(name);
        }

        let raw = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let name = Name::from_raw(raw);
        guard.strings.push(leaked);
        guard.map.insert(leaked, name);
        Ok(name)
    }

    /// Intern a string, returning its `Name`.
    ///
    /// # Panics
    /// Panics if the interner exceeds `u32::MAX` strings.
    /// Use `try_intern` for fallible interning.
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Find the `Name` of an already-interned string without interning.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.table.read().map.get(s).copied()
    }

    /// Look up the string for a `Name`.
    ///
    /// # Panics
    /// Panics if the name was not created by this interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.table.read();
        match guard.strings.get(name.raw() as usize) {
            Some(s) => s,
            None => panic!("{name:?} was not created by this interner"),
        }
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Check if only the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests;
