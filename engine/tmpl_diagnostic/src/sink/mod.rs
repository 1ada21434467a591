//! Diagnostic sinks.
//!
//! A sink receives diagnostics fire-and-forget: it returns nothing and must
//! not panic. Sinks take `&self` so a single sink can be shared by every
//! value operation of a render without threading `&mut` through the
//! evaluator.

use parking_lot::Mutex;

use crate::Diagnostic;

/// Receiver for diagnostics emitted by degraded value operations.
pub trait DiagnosticSink {
    /// Report a single diagnostic.
    fn report(&self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    #[inline]
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` at `WARN` level.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!(
            target: "tmpl_value::diagnostic",
            operation = diagnostic.operation().method_name(),
            type_name = diagnostic.type_name(),
            "{diagnostic}"
        );
    }
}

/// Drops every diagnostic.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    #[inline]
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Buffers diagnostics in report order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    /// Drain the buffer.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.lock())
    }

    pub fn len(&self) -> usize {
        self.diagnostics.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.lock().push(diagnostic);
    }
}
