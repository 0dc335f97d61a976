//! Representation tags carried by function and metatype types.

use std::fmt;

use bitflags::bitflags;

/// Calling-convention class of a function type.
///
/// The first four are native conventions; the last three cross into the
/// foreign runtime.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Representation {
    /// Native closure with a context.
    Thick = 0,
    /// Native function without a context.
    Thin = 1,
    /// Native method.
    Method = 2,
    /// Protocol witness method.
    WitnessMethod = 3,
    /// Bare C function pointer.
    CFunctionPointer = 4,
    /// Method dispatched through the foreign object runtime.
    ForeignMethod = 5,
    /// Foreign callback block.
    Block = 6,
}

impl Representation {
    /// Every representation, in discriminant order.
    pub const ALL: [Self; 7] = [
        Self::Thick,
        Self::Thin,
        Self::Method,
        Self::WitnessMethod,
        Self::CFunctionPointer,
        Self::ForeignMethod,
        Self::Block,
    ];

    /// Decode a representation from its discriminant.
    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Thick),
            1 => Some(Self::Thin),
            2 => Some(Self::Method),
            3 => Some(Self::WitnessMethod),
            4 => Some(Self::CFunctionPointer),
            5 => Some(Self::ForeignMethod),
            6 => Some(Self::Block),
            _ => None,
        }
    }

    /// Convention name as written in `@convention(..)`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thick => "thick",
            Self::Thin => "thin",
            Self::Method => "method",
            Self::WitnessMethod => "witness_method",
            Self::CFunctionPointer => "c",
            Self::ForeignMethod => "foreign_method",
            Self::Block => "block",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Representation of a metatype value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum MetatypeRepr {
    /// No runtime value; the type is statically known.
    Thin = 0,
    /// Native runtime type object.
    Thick = 1,
    /// Foreign runtime class object.
    Foreign = 2,
}

impl MetatypeRepr {
    /// Decode a metatype representation from its discriminant.
    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Thin),
            1 => Some(Self::Thick),
            2 => Some(Self::Foreign),
            _ => None,
        }
    }
}

/// Flavour of an optional wrapper.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum OptionalKind {
    /// `T?`
    Optional = 0,
    /// `T!`
    ImplicitlyUnwrapped = 1,
}

impl OptionalKind {
    /// Decode an optional kind from its discriminant.
    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Optional),
            1 => Some(Self::ImplicitlyUnwrapped),
            _ => None,
        }
    }

    /// Postfix sigil used when printing.
    pub const fn sigil(self) -> char {
        match self {
            Self::Optional => '?',
            Self::ImplicitlyUnwrapped => '!',
        }
    }
}

bitflags! {
    /// Boolean attributes of a function type.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct FnFlags: u32 {
        /// The function may throw.
        const THROWS = 1 << 8;
        /// A closure argument that does not outlive the call.
        const NOESCAPE = 1 << 9;
    }
}

/// Extended information attached to a function type.
///
/// Packed into a single `u32` inside the pool: bits 0-7 hold the
/// representation, the bits above hold [`FnFlags`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ExtInfo {
    pub representation: Representation,
    pub flags: FnFlags,
}

impl ExtInfo {
    const REPR_MASK: u32 = 0xFF;

    /// Plain ext-info for the given representation.
    pub const fn new(representation: Representation) -> Self {
        ExtInfo {
            representation,
            flags: FnFlags::empty(),
        }
    }

    #[inline]
    pub const fn throws(self) -> bool {
        self.flags.contains(FnFlags::THROWS)
    }

    #[inline]
    pub const fn noescape(self) -> bool {
        self.flags.contains(FnFlags::NOESCAPE)
    }

    #[must_use]
    pub fn with_throws(mut self, throws: bool) -> Self {
        self.flags.set(FnFlags::THROWS, throws);
        self
    }

    #[must_use]
    pub fn with_noescape(mut self, noescape: bool) -> Self {
        self.flags.set(FnFlags::NOESCAPE, noescape);
        self
    }

    /// Same flags, different representation.
    #[must_use]
    pub const fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Pack into the pool's storage word.
    pub const fn to_bits(self) -> u32 {
        self.representation as u32 | self.flags.bits()
    }

    /// Unpack from the pool's storage word.
    ///
    /// Returns `None` if the representation byte or a flag bit is unknown.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_bits(bits: u32) -> Option<Self> {
        let representation = Representation::from_u8((bits & Self::REPR_MASK) as u8)?;
        let flags = FnFlags::from_bits(bits & !Self::REPR_MASK)?;
        Some(ExtInfo {
            representation,
            flags,
        })
    }
}
