//! Descriptors of foreign-declared (C-family) types.
//!
//! These are the shapes an imported declaration was written with. The
//! bridging engine only probes them: "is this a primitive boolean", "what
//! shape sits at this tuple position". Descriptors are
//! stored in an append-only arena and referenced by [`ForeignTypeId`].

use abi_ir::Name;

/// Index of a descriptor in a [`ForeignTypes`] arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ForeignTypeId(u32);

impl ForeignTypeId {
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A foreign type descriptor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ForeignType {
    Void,
    /// The primitive boolean (`_Bool`).
    Bool,
    /// `char`, `signed char` or `unsigned char`.
    Char { signed: bool },
    Integer { bits: u8, signed: bool },
    Floating { bits: u8 },
    /// Pointer to a foreign object; `None` is the untyped object pointer.
    ObjectPointer { class: Option<Name> },
    BlockPointer,
    FunctionPointer,
    Pointer { pointee: ForeignTypeId },
    /// Fixed-size array `T[len]`.
    ConstantArray { element: ForeignTypeId, len: u32 },
    /// A parameter list imported as a tuple, one descriptor per position.
    Params { elements: Vec<ForeignTypeId> },
    Record { name: Name },
    Typedef { name: Name, underlying: ForeignTypeId },
}

/// Append-only arena of foreign type descriptors.
#[derive(Clone, Debug, Default)]
pub struct ForeignTypes {
    types: Vec<ForeignType>,
}

impl ForeignTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a descriptor.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds `u32::MAX` descriptors.
    pub fn add(&mut self, ty: ForeignType) -> ForeignTypeId {
        let id = ForeignTypeId(
            u32::try_from(self.types.len())
                .unwrap_or_else(|_| panic!("foreign type arena overflow")),
        );
        self.types.push(ty);
        id
    }

    /// Look up a descriptor.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this arena.
    pub fn get(&self, id: ForeignTypeId) -> &ForeignType {
        &self.types[id.0 as usize]
    }

    /// Strip every typedef layer.
    pub fn desugar(&self, mut id: ForeignTypeId) -> ForeignTypeId {
        while let ForeignType::Typedef { underlying, .. } = self.get(id) {
            id = *underlying;
        }
        id
    }

    /// Whether the descriptor is the primitive boolean once typedefs are
    /// looked through.
    ///
    /// A typedef of `signed char` (the classic foreign `BOOL`) is not.
    pub fn is_boolean(&self, id: ForeignTypeId) -> bool {
        matches!(self.get(self.desugar(id)), ForeignType::Bool)
    }

    /// Descriptor at position `index` of a tuple-shaped descriptor.
    ///
    /// A fixed-size array shares its element descriptor across every
    /// position; a parameter list has one per position.
    pub fn tuple_element(&self, id: ForeignTypeId, index: usize) -> Option<ForeignTypeId> {
        match self.get(self.desugar(id)) {
            ForeignType::ConstantArray { element, .. } => Some(*element),
            ForeignType::Params { elements } => elements.get(index).copied(),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
