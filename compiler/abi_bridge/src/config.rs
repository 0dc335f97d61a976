//! Bridging configuration.
//!
//! Names the well-known native declarations and the foreign declarations
//! they bridge to. Names are resolved against the declaration table by
//! [`KnownDecls::resolve`](crate::KnownDecls::resolve).

use crate::WellKnown;

/// A native declaration name and the foreign declaration it bridges to.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BridgePair {
    pub native: String,
    pub foreign: String,
}

impl BridgePair {
    pub fn new(native: impl Into<String>, foreign: impl Into<String>) -> Self {
        BridgePair {
            native: native.into(),
            foreign: foreign.into(),
        }
    }
}

/// Declaration names used to find the bridged types.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BridgeConfig {
    pairs: [BridgePair; WellKnown::COUNT],
}

impl Default for BridgeConfig {
    fn default() -> Self {
        BridgeConfig {
            pairs: [
                BridgePair::new("String", "NSString"),
                BridgePair::new("Bool", "ObjCBool"),
                BridgePair::new("Array", "NSArray"),
                BridgePair::new("Dictionary", "NSDictionary"),
                BridgePair::new("Set", "NSSet"),
            ],
        }
    }
}

impl BridgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names configured for a well-known type.
    pub fn pair(&self, kind: WellKnown) -> &BridgePair {
        &self.pairs[kind.index()]
    }

    /// Override the names for a well-known type.
    #[must_use]
    pub fn with_pair(
        mut self,
        kind: WellKnown,
        native: impl Into<String>,
        foreign: impl Into<String>,
    ) -> Self {
        self.pairs[kind.index()] = BridgePair::new(native, foreign);
        self
    }

    /// Every configured pair, in [`WellKnown::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (WellKnown, &BridgePair)> {
        WellKnown::ALL.iter().copied().zip(self.pairs.iter())
    }
}
