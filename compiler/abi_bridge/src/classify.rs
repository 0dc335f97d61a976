//! Calling-convention classifier.
//!
//! Decides from a function's representation whether its signature crosses
//! into the foreign runtime at all.

use abi_types::Representation;

/// Whether a calling convention bridges its types.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BridgeClass {
    /// Native convention: types pass through untouched.
    NoBridging,
    /// Foreign convention: types are bridged.
    Bridge,
}

impl BridgeClass {
    #[inline]
    pub const fn needs_bridging(self) -> bool {
        matches!(self, Self::Bridge)
    }
}

/// Classify a representation.
///
/// A new representation does not compile until it is classified here.
pub const fn classify(rep: Representation) -> BridgeClass {
    match rep {
        Representation::Thick
        | Representation::Thin
        | Representation::Method
        | Representation::WitnessMethod => BridgeClass::NoBridging,
        Representation::CFunctionPointer | Representation::ForeignMethod | Representation::Block => {
            BridgeClass::Bridge
        }
    }
}
