//! Output sinks and the per-severity console proxy.
//!
//! The host console is consumed through the [`ConsoleSink`] trait. Two sinks
//! ship with the crate:
//!
//! | Sink | Output |
//! |------|--------|
//! | [`TracingSink`](sink::TracingSink) | `tracing` events at the matching level |
//! | [`MemorySink`](sink::MemorySink) | Recorded lines, for tests and embedders |
//!
//! [`ConsoleProxy`](proxy::ConsoleProxy) probes a sink once at setup and
//! replaces missing severities with permanent no-ops.

pub mod proxy;
pub mod sink;

pub use proxy::ConsoleProxy;
pub use sink::{ConsoleSink, MemorySink, Record, TracingSink};

use std::fmt;

/// Severity levels a sink may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Log,
    Info,
    Warn,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Log,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Log => "log",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
