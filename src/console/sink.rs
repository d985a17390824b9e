use crate::console::Severity;
use serde_json::Value;
use std::backtrace::Backtrace;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

/// A host console that the facade forwards watched output to.
///
/// `extra` carries the trailing arguments of a logging call unchanged.
pub trait ConsoleSink: Send + Sync {
    /// Whether this sink implements `severity`. Probed once at setup.
    fn supports(&self, severity: Severity) -> bool {
        let _ = severity;
        true
    }

    fn emit(&self, severity: Severity, message: &str, extra: &[Value]);

    /// Dump the current stack.
    fn trace(&self);
}

/// Forwards output to `tracing` events under the `ddt` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

fn join_extra(extra: &[Value]) -> String {
    extra
        .iter()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl ConsoleSink for TracingSink {
    fn emit(&self, severity: Severity, message: &str, extra: &[Value]) {
        let extra = join_extra(extra);
        match severity {
            Severity::Log | Severity::Info => {
                tracing::info!(target: "ddt", extra = %extra, "{}", message)
            }
            Severity::Warn => tracing::warn!(target: "ddt", extra = %extra, "{}", message),
            Severity::Error => tracing::error!(target: "ddt", extra = %extra, "{}", message),
        }
    }

    fn trace(&self) {
        let backtrace = Backtrace::force_capture();
        tracing::info!(target: "ddt", backtrace = %backtrace, "console.trace");
    }
}

/// One unit of output captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Line {
        severity: Severity,
        message: String,
        extra: Vec<Value>,
    },
    Trace,
}

/// Records everything it is given.
///
/// A sink can be built without some severities to stand in for a host
/// console that lacks them.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
    missing: HashSet<Severity>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that reports the given severities as unsupported.
    pub fn without(missing: &[Severity]) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            missing: missing.iter().copied().collect(),
        }
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn records(&self) -> Vec<Record> {
        self.guard().clone()
    }

    /// Messages of every recorded line at `severity`, in order.
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.guard()
            .iter()
            .filter_map(|r| match r {
                Record::Line {
                    severity: s,
                    message,
                    ..
                } if *s == severity => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn trace_count(&self) -> usize {
        self.guard()
            .iter()
            .filter(|r| matches!(r, Record::Trace))
            .count()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn clear(&self) {
        self.guard().clear();
    }
}

impl ConsoleSink for MemorySink {
    fn supports(&self, severity: Severity) -> bool {
        !self.missing.contains(&severity)
    }

    fn emit(&self, severity: Severity, message: &str, extra: &[Value]) {
        self.guard().push(Record::Line {
            severity,
            message: message.to_string(),
            extra: extra.to_vec(),
        });
    }

    fn trace(&self) {
        self.guard().push(Record::Trace);
    }
}
