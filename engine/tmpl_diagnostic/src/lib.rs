//! Diagnostics for template value evaluation.
//!
//! Every `Value` operation that meets a kind it cannot handle degrades to a
//! documented fallback and reports a [`Diagnostic`] to a caller-supplied
//! [`DiagnosticSink`]. Diagnostics never abort evaluation and never flow back
//! to the caller as errors.
//!
//! # Sinks
//!
//! - [`TracingSink`]: forwards to `tracing` at `WARN` level (the default for
//!   hosts that already run a subscriber)
//! - [`CollectingSink`]: buffers diagnostics for inspection after rendering
//! - [`NullSink`]: drops everything
//!
//! The sink is passed explicitly through the evaluator, so the value layer
//! stays a pure function of its inputs plus this one effect channel.
//!
//! Hosts without their own subscriber can call [`init_tracing`] to see
//! `TracingSink` output on stderr.

mod diagnostic;
mod sink;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

pub use diagnostic::{Diagnostic, Operation};
pub use sink::{CollectingSink, DiagnosticSink, NullSink, TracingSink};

/// Filter used when `RUST_LOG` is unset or blank: diagnostics only.
pub const DEFAULT_DIRECTIVES: &str = "tmpl_value::diagnostic=warn";

static TRACING_INIT: Once = Once::new();

/// Install a `fmt` subscriber for [`TracingSink`] output.
///
/// The filter comes from `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVES`]
/// when it is unset, blank or unparsable. Only the first call does anything,
/// and a subscriber the host already installed is left in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*};

        let directives = filter_directives(std::env::var("RUST_LOG").ok());
        // Err only when another global subscriber is already set.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(env_filter(&directives))
            .try_init();
    });
}

fn filter_directives(rust_log: Option<String>) -> String {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ => DEFAULT_DIRECTIVES.to_string(),
    }
}

fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}
