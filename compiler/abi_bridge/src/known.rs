//! Cache of well-known declarations.
//!
//! Resolved once per [`BridgeContext`](crate::BridgeContext) from a
//! [`BridgeConfig`]. A missing native declaration means the corresponding
//! bridging rule never fires; a missing foreign declaration means it fails.

use std::fmt;

use abi_ir::StringInterner;
use abi_types::{DeclId, DeclTable};
use rustc_hash::FxHashMap;

use crate::BridgeConfig;

/// Native types with a foreign bridge.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum WellKnown {
    String,
    Bool,
    Array,
    Dictionary,
    Set,
}

impl WellKnown {
    pub const COUNT: usize = 5;

    pub const ALL: [Self; Self::COUNT] = [
        Self::String,
        Self::Bool,
        Self::Array,
        Self::Dictionary,
        Self::Set,
    ];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Whether this is one of the homogeneous collections.
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::Array | Self::Dictionary | Self::Set)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "boolean",
            Self::Array => "array",
            Self::Dictionary => "dictionary",
            Self::Set => "set",
        }
    }
}

impl fmt::Display for WellKnown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved native and foreign declarations for one well-known type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct KnownBridge {
    pub native: Option<DeclId>,
    pub foreign: Option<DeclId>,
}

/// Well-known declarations resolved against one declaration table.
#[derive(Clone, Debug, Default)]
pub struct KnownDecls {
    bridges: [KnownBridge; WellKnown::COUNT],
    by_native: FxHashMap<DeclId, WellKnown>,
}

impl KnownDecls {
    /// Resolve every configured name.
    ///
    /// Names the interner has never seen cannot name a declaration, so the
    /// interner is only queried, never extended.
    pub fn resolve(config: &BridgeConfig, decls: &DeclTable, interner: &StringInterner) -> Self {
        let lookup = |name: &str| interner.get(name).and_then(|name| decls.lookup(name));

        let mut known = KnownDecls::default();
        for (kind, pair) in config.iter() {
            let bridge = KnownBridge {
                native: lookup(&pair.native),
                foreign: lookup(&pair.foreign),
            };
            if bridge.native.is_none() {
                tracing::debug!(%kind, name = %pair.native, "native declaration not found; rule disabled");
            } else if bridge.foreign.is_none() {
                tracing::debug!(%kind, name = %pair.foreign, "foreign bridge declaration not found");
            }
            // Earlier kinds take precedence when two share a native name.
            if let Some(native) = bridge.native {
                known.by_native.entry(native).or_insert(kind);
            }
            known.bridges[kind.index()] = bridge;
        }
        known
    }

    pub fn get(&self, kind: WellKnown) -> KnownBridge {
        self.bridges[kind.index()]
    }

    #[inline]
    pub fn native(&self, kind: WellKnown) -> Option<DeclId> {
        self.get(kind).native
    }

    #[inline]
    pub fn foreign(&self, kind: WellKnown) -> Option<DeclId> {
        self.get(kind).foreign
    }

    /// Which well-known native type `decl` is, if any.
    pub fn classify(&self, decl: DeclId) -> Option<WellKnown> {
        self.by_native.get(&decl).copied()
    }
}

#[cfg(test)]
mod tests;
