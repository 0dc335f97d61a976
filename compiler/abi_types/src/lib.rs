//! Type algebra consumed by the ABI bridging engine.
//!
//! # Canonical Types
//!
//! Every type lives in a [`Pool`] and is referenced by a 32-bit [`Idx`].
//! The pool deduplicates structurally, so two handles are equal exactly
//! when the types are structurally equal. Constructors intern through
//! `&self`, which lets independent lowering passes share one pool.
//!
//! # Declarations
//!
//! Nominal types point at a [`DeclId`] in a [`DeclTable`]. Well-known
//! declarations (the native string, boolean and collection types and their
//! foreign counterparts) are found by name in that table.
//!
//! # Foreign Shapes
//!
//! [`ForeignTypes`] stores descriptors of foreign-declared (C-family) types.
//! An [`AbstractionPattern`] pairs a canonical type with the foreign
//! descriptor it was imported from, when one is known.

mod decl;
mod foreign;
mod idx;
mod pattern;
mod pool;
mod repr;
mod tag;

pub use decl::{Decl, DeclId, DeclKind, DeclTable};
pub use foreign::{ForeignType, ForeignTypeId, ForeignTypes};
pub use idx::Idx;
pub use pattern::AbstractionPattern;
pub use pool::{FunctionSig, Pool, TupleElem};
pub use repr::{ExtInfo, FnFlags, MetatypeRepr, OptionalKind, Representation};
pub use tag::Tag;
