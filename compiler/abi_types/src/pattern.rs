//! Abstraction patterns.
//!
//! A pattern travels alongside a type during lowering and says what is
//! known about where the type came from: nothing (`Opaque`), a native
//! shape, or a concrete foreign-declared shape. Bridging only asks whether
//! a foreign shape is present and, for booleans, what it is.

use crate::{ForeignTypeId, ForeignTypes, Idx, Pool, Tag};

/// Shape information paired with a type during lowering.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AbstractionPattern {
    /// Nothing is known.
    Opaque,
    /// A native type shape.
    Native(Idx),
    /// A type imported from a foreign declaration.
    Foreign { ty: Idx, foreign: ForeignTypeId },
}

impl AbstractionPattern {
    #[inline]
    pub const fn is_opaque(self) -> bool {
        matches!(self, Self::Opaque)
    }

    /// The pattern's type, unless it is opaque.
    #[inline]
    pub const fn ty(self) -> Option<Idx> {
        match self {
            Self::Opaque => None,
            Self::Native(ty) | Self::Foreign { ty, .. } => Some(ty),
        }
    }

    /// The foreign descriptor, if this is a foreign-declared shape.
    #[inline]
    pub const fn foreign_type(self) -> Option<ForeignTypeId> {
        match self {
            Self::Foreign { foreign, .. } => Some(foreign),
            Self::Opaque | Self::Native(_) => None,
        }
    }

    /// Pattern for the element at `index` of a tuple.
    ///
    /// A pattern without a tuple shape yields `Opaque` for every element.
    /// A foreign parameter list gives each position its own descriptor and
    /// a fixed-size array shares one across all of them. Any other foreign
    /// descriptor leaves the element with only its native shape.
    pub fn tuple_element(self, pool: &Pool, foreign: &ForeignTypes, index: usize) -> Self {
        let Some(ty) = self.ty() else {
            return Self::Opaque;
        };
        if pool.tag(ty) != Tag::Tuple {
            return Self::Opaque;
        }
        let Some(elem) = pool.tuple_elems(ty).get(index).map(|e| e.ty) else {
            return Self::Opaque;
        };
        match self
            .foreign_type()
            .and_then(|id| foreign.tuple_element(id, index))
        {
            Some(element) => Self::Foreign {
                ty: elem,
                foreign: element,
            },
            None => Self::Native(elem),
        }
    }
}

#[cfg(test)]
mod tests;
