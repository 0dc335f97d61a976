//! Type bridging at foreign ABI boundaries.
//!
//! When a function signature crosses into the foreign, reference-counted,
//! C-based calling convention (exported C entry points, foreign method
//! dispatch, callback blocks), some native types must be replaced by their
//! foreign counterparts: strings and collections become foreign classes,
//! booleans become the foreign boxed boolean unless a primitive boolean was
//! declared, class metatypes switch representation and native closures
//! become blocks.
//!
//! # Pipeline
//!
//! ```text
//! entry (lower) ──► classify(rep) ──► recurse (tuples, optional) ──► mapper (leaves)
//!        │                                                              │
//!        └──────────── BridgeProblem ◄──────────────────────────────────┘
//!                          │
//!                          ▼
//!              Diagnostic + BridgeFailure
//! ```
//!
//! # Sharing
//!
//! A [`BridgeContext`] borrows the type pool, the declaration table and the
//! foreign type table, and owns the resolved [`KnownDecls`]. Nothing is
//! cached between calls, so one context can serve several threads.

mod classify;
mod config;
mod context;
mod known;
mod lower;
mod mapper;
mod problem;
mod purpose;
mod recurse;

#[cfg(test)]
mod test_helpers;

use std::sync::Once;

pub use classify::{classify, BridgeClass};
pub use config::{BridgeConfig, BridgePair};
pub use context::BridgeContext;
pub use known::{KnownBridge, KnownDecls, WellKnown};
pub use lower::{
    bridged_function_type, bridged_input_type, bridged_result_type, lowered_bridged_type,
    lowered_type_of_global, FunctionPatterns, GlobalVar,
};
pub use problem::{BridgeFailure, BridgeProblem};
pub use purpose::BridgePurpose;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for bridging diagnostics.
///
/// Respects `RUST_LOG` for filtering, for example
/// `RUST_LOG=abi_bridge=debug` to see every rewritten leaf and
/// `RUST_LOG=abi_bridge=trace` to follow the recursion.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
