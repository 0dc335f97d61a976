//! Error codes for bridging diagnostics.
//!
//! The first digit names the compiler phase, following the numbering used
//! across the compiler. Bridging lives in E3xxx (signature lowering).

use std::fmt;

/// Error codes emitted by the bridging engine.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Bridging Errors (E3xxx)
    /// No foreign bridge type exists for a native type under a C-based
    /// calling convention.
    E3001,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// When adding a new variant: add it to the enum, `as_str()`, and here.
    pub const ALL: &[ErrorCode] = &[ErrorCode::E3001];

    /// Get the numeric code as a string (e.g., "E3001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E3001 => "E3001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
