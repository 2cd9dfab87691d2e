//! Diagnostic text output
//!
//! The bus engine reports fault conditions (timeouts) as single
//! human-readable lines through this trait. Where the line goes is the
//! implementation's concern: a UART console on target, a captured
//! buffer in tests, or nowhere at all.

/// Sink for driver diagnostic lines
pub trait DiagnosticSink {
    /// Emit one line of diagnostic text (no trailing newline)
    fn write_line(&mut self, line: &str);
}

/// Sink that discards everything
///
/// For callers that have no console wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl DiagnosticSink for NullDiagnostics {
    fn write_line(&mut self, _line: &str) {}
}
