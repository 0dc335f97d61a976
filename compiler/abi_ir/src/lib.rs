//! Shared identifiers for the ABI bridging engine.
//!
//! - [`Name`]: interned identifier, compared in O(1)
//! - [`StringInterner`]: the table that owns every interned string
//! - [`Span`]: byte range used to locate diagnostics
//!
//! Everything here is `Copy` or cheaply shareable so that the type pool,
//! the declaration table and the diagnostic layer can all refer to names
//! and locations without owning strings.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied handles.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod name;
mod span;

pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::Span;
