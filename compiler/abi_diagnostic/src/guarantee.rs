//! Proof that an error diagnostic was emitted.

use std::fmt;

/// Proof that at least one error diagnostic was emitted.
///
/// Can only be created by emitting an error through a
/// [`DiagnosticSink`](crate::DiagnosticSink) or from a non-zero error count.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    /// Create a guarantee. Only sinks may call this.
    pub(crate) const fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// Get a guarantee if `count` errors have been emitted.
    pub fn from_error_count(count: usize) -> Option<Self> {
        (count > 0).then(Self::new)
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error(s) emitted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_error_count_returns_some_for_nonzero() {
        assert!(ErrorGuaranteed::from_error_count(1).is_some());
        assert!(ErrorGuaranteed::from_error_count(0).is_none());
    }

    #[test]
    fn display_shows_error_message() {
        assert_eq!(ErrorGuaranteed::new().to_string(), "error(s) emitted");
    }
}
