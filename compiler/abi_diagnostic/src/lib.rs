//! Diagnostic system for the ABI bridging engine.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes (why it's wrong)
//!
//! # Error Guarantees
//!
//! The `ErrorGuaranteed` type provides type-level proof that at least one
//! error was emitted. Bridging failures carry one, so a caller holding a
//! failure knows the user has already been told about it.
//!
//! ```text
//! let guarantee = sink.emit_error(diagnostic);
//! return Err(BridgeFailure { ty, guarantee });
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue, DiagnosticSink};
