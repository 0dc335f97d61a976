//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Features:
//! - Error limits to prevent overwhelming output
//! - Deduplication of identical errors at the same location
//! - `ErrorGuaranteed` proof that errors were emitted

use crate::{Diagnostic, ErrorGuaranteed};

/// Receiver for diagnostics produced by a compiler phase.
///
/// The bridging engine reports through this trait so that drivers can
/// plug in a [`DiagnosticQueue`] or their own collector.
pub trait DiagnosticSink {
    /// Record an error and return proof that it was emitted.
    fn emit_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed;

    /// Number of errors recorded so far.
    fn error_count(&self) -> usize;
}

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before stopping (0 = unlimited).
    pub error_limit: usize,
    /// Drop an error identical to one already queued at the same span.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 20,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Queue for collecting and sorting diagnostics.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// let guarantee = queue.emit_error(diagnostic);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    /// Collected diagnostics.
    diagnostics: Vec<Diagnostic>,
    /// Count of queued errors.
    error_count: usize,
    /// Configuration.
    config: DiagnosticConfig,
}

impl Default for DiagnosticQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            error_count: 0,
            config,
        }
    }

    /// Add a diagnostic to the queue.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if self.limit_reached() {
            return false;
        }

        if self.config.deduplicate && self.is_duplicate(&diag) {
            return false;
        }

        self.error_count += 1;
        self.diagnostics.push(diag);
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Check if any errors were emitted and get proof if so.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    /// Number of queued diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if nothing has been queued.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Sort diagnostics by position and return them.
    ///
    /// Clears the queue. Diagnostics without a primary span sort first.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.diagnostics
            .sort_by_key(|d| d.primary_span().map(|s| (s.start, s.end)));
        self.error_count = 0;
        std::mem::take(&mut self.diagnostics)
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    fn is_duplicate(&self, diag: &Diagnostic) -> bool {
        let span = diag.primary_span();
        self.diagnostics
            .iter()
            .any(|d| d.code == diag.code && d.primary_span() == span && d.message == diag.message)
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn emit_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        self.add(diag);
        ErrorGuaranteed::new()
    }

    fn error_count(&self) -> usize {
        self.error_count
    }
}
