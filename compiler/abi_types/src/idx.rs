//! Canonical type handle.
//!
//! `Idx` is the canonical type representation. Types are compared by index
//! equality, which the pool makes equivalent to structural equality.

use std::fmt;

/// A 32-bit index into the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Primitive Types (indices 0-4) ===
    // Pre-interned at pool creation.

    /// The native integer type.
    pub const INT: Self = Self(0);
    /// The native floating point type.
    pub const FLOAT: Self = Self(1);
    /// The unit type `()`, also the empty tuple.
    pub const UNIT: Self = Self(2);
    /// The never type (no values).
    pub const NEVER: Self = Self(3);
    /// The error type (placeholder left by earlier failed phases).
    pub const ERROR: Self = Self(4);

    /// Number of pre-interned primitive types.
    pub const PRIMITIVE_COUNT: u32 = 5;

    /// Sentinel value indicating no type.
    pub const NONE: Self = Self(u32::MAX);

    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a primitive type (pre-interned).
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::PRIMITIVE_COUNT
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Human-readable name for primitive types.
    #[inline]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("Int"),
            1 => Some("Double"),
            2 => Some("()"),
            3 => Some("Never"),
            4 => Some("<error>"),
            _ => None,
        }
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::INT => write!(f, "Idx::INT"),
            Self::FLOAT => write!(f, "Idx::FLOAT"),
            Self::UNIT => write!(f, "Idx::UNIT"),
            Self::NEVER => write!(f, "Idx::NEVER"),
            Self::ERROR => write!(f, "Idx::ERROR"),
            Self::NONE => write!(f, "Idx::NONE"),
            _ => write!(f, "Idx({})", self.0),
        }
    }
}

impl fmt::Display for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None if self.is_none() => write!(f, "<none>"),
            None => write!(f, "type#{}", self.0),
        }
    }
}

abi_ir::static_assert_size!(Idx, 4);
