//! Why a type is being bridged.

/// Position of a bridged type in a signature.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BridgePurpose {
    /// A parameter.
    ForArgument,
    /// A result that may be absent on the foreign side.
    ForResult,
    /// A result the foreign side promises is never absent.
    ForNonOptionalResult,
}

impl BridgePurpose {
    /// Purpose for a result position.
    pub const fn for_result(suppress_optional: bool) -> Self {
        if suppress_optional {
            Self::ForNonOptionalResult
        } else {
            Self::ForResult
        }
    }

    /// Whether a bridged string or collection leaf may become optional.
    ///
    /// Only nullable results do, and only when a foreign shape is present.
    #[inline]
    pub const fn may_wrap_optional(self) -> bool {
        matches!(self, Self::ForResult)
    }
}
