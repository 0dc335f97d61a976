//! Type kind tag for tag-driven dispatch.
//!
//! Each type in the pool has a `Tag` that identifies its kind.
//! Tags are grouped into ranges:
//! - 0-15: Primitives (no payload)
//! - 16-47: Wrappers (optional, metatypes)
//! - 48-79: Structural types (tuple, function)
//! - 80-95: Declaration-backed types (nominal, existential)

use std::fmt;

/// Type kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Tag {
    // === Primitives (0-15) ===
    /// Native integer.
    Int = 0,
    /// Native floating point.
    Float = 1,
    /// Unit type `()`.
    Unit = 2,
    /// Never type.
    Never = 3,
    /// Error placeholder.
    Error = 4,

    // === Wrappers (16-47) ===
    /// Optional `T?` or implicitly unwrapped `T!`.
    Optional = 16,
    /// Metatype `T.Type` of a concrete type.
    Metatype = 17,
    /// Metatype of an existential `any P.Type`.
    ExistentialMetatype = 18,

    // === Structural (48-79) ===
    /// Tuple `(a: T, U)`.
    Tuple = 48,
    /// Function `(P...) -> R` with a calling-convention representation.
    Function = 49,

    // === Declaration-backed (80-95) ===
    /// Struct, enum, class or protocol type with generic arguments.
    Nominal = 80,
    /// Protocol composition `P & Q` (empty composition is `Any`).
    Existential = 81,
}

impl Tag {
    /// Check if this tag represents a primitive type.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        (self as u8) < 16
    }

    /// Check if this tag is a metatype of either flavour.
    #[inline]
    pub const fn is_metatype(self) -> bool {
        matches!(self, Self::Metatype | Self::ExistentialMetatype)
    }

    /// Get the name of this tag as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Unit => "unit",
            Self::Never => "never",
            Self::Error => "error",
            Self::Optional => "optional",
            Self::Metatype => "metatype",
            Self::ExistentialMetatype => "existential metatype",
            Self::Tuple => "tuple",
            Self::Function => "function",
            Self::Nominal => "nominal",
            Self::Existential => "existential",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}
