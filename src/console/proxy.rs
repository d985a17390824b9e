use crate::base::ddterror::DdtError;
use crate::console::{ConsoleSink, Severity};
use serde_json::{json, Value};
use std::sync::Arc;

/// Per-severity forwarding to a [`ConsoleSink`].
///
/// Capabilities are probed once in [`ConsoleProxy::new`]; a severity the
/// sink lacks becomes a no-op for the lifetime of the proxy.
#[derive(Clone)]
pub struct ConsoleProxy {
    sink: Arc<dyn ConsoleSink>,
    enabled: [bool; 4],
}

impl ConsoleProxy {
    pub fn new(sink: Arc<dyn ConsoleSink>) -> Self {
        let mut enabled = [false; 4];
        for severity in Severity::ALL {
            enabled[severity.index()] = sink.supports(severity);
        }
        let proxy = Self { sink, enabled };

        for severity in Severity::ALL {
            if !proxy.is_enabled(severity) {
                let err = DdtError::UnsupportedSeverity(severity);
                tracing::debug!(error = %err, "substituting no-op");
                proxy.diagnostic(
                    "[ddt] cannot proxy this method, it is not defined in console",
                    &[json!(severity.as_str())],
                );
            }
        }

        proxy
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.enabled[severity.index()]
    }

    /// Forward a watched call, prefixing the message with its channel.
    pub fn forward(&self, severity: Severity, channel: &str, message: &str, extra: &[Value]) {
        if !self.is_enabled(severity) {
            return;
        }
        let prefixed = format!("[{}] {}", channel, message);
        self.sink.emit(severity, &prefixed, extra);
    }

    pub fn trace(&self) {
        self.sink.trace();
    }

    /// Unconditional informational line, used for the startup notice.
    pub fn notice(&self, message: &str, extra: &[Value]) {
        if self.is_enabled(Severity::Log) {
            self.sink.emit(Severity::Log, message, extra);
        } else {
            tracing::info!(extra = ?extra, "{}", message);
        }
    }

    /// Warn about a rejected channel name.
    pub fn warn_rejected(&self, err: &DdtError) {
        if let DdtError::InvalidChannelName { name, method } = err {
            self.diagnostic(
                "[ddt] invalid channel name",
                &[json!(name), json!("when calling"), json!(method)],
            );
        } else {
            self.diagnostic(&format!("[ddt] {}", err), &[]);
        }
    }

    fn diagnostic(&self, message: &str, extra: &[Value]) {
        if self.is_enabled(Severity::Warn) {
            self.sink.emit(Severity::Warn, message, extra);
        } else {
            tracing::warn!(extra = ?extra, "{}", message);
        }
    }
}
