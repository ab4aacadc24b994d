//! Diagnostic sink trait

use crate::classifier::Diagnostic;

/// Receiver for human-readable classifier events
///
/// Purely for observability; a sink that drops everything is valid.
pub trait DiagnosticSink {
    /// Record one event
    fn record(&mut self, diagnostic: &Diagnostic);
}

/// Sink that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _diagnostic: &Diagnostic) {}
}
