use crate::base::ddterror::DdtError;
use crate::channels::name::{normalize, ChannelName};
use dashmap::DashSet;
use std::sync::Arc;

/// Outcome of a multi-name registry operation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    /// Whether the operation counts as a success for its caller.
    pub changed: bool,
    /// One entry per rejected name, in input order.
    pub rejected: Vec<DdtError>,
}

/// Watched and known channel sets.
///
/// The watched set holds validated lowercase names only. The known set
/// records every channel passed to a logging call, as given, and never
/// shrinks.
#[derive(Clone, Default)]
pub struct ChannelRegistry {
    watched: Arc<DashSet<String>>,
    known: Arc<DashSet<String>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every valid name; `changed` if at least one was valid.
    pub fn watch(&self, names: &[String]) -> ApplyReport {
        let mut report = ApplyReport::default();
        for raw in names {
            match ChannelName::parse(raw, "watch") {
                Ok(name) => {
                    self.watched.insert(name.into_string());
                    report.changed = true;
                }
                Err(e) => report.rejected.push(e),
            }
        }
        report
    }

    /// Remove every valid name; `changed` if at least one was present.
    pub fn unwatch(&self, names: &[String]) -> ApplyReport {
        let mut report = ApplyReport::default();
        for raw in names {
            match ChannelName::parse(raw, "unwatch") {
                Ok(name) => {
                    if self.watched.remove(name.as_str()).is_some() {
                        report.changed = true;
                    }
                }
                Err(e) => report.rejected.push(e),
            }
        }
        report
    }

    /// Clear the watched set, then add every valid name.
    ///
    /// `changed` is true whenever `names` is non-empty, even if every name
    /// was rejected.
    pub fn reset(&self, names: &[String]) -> ApplyReport {
        self.watched.clear();
        let mut report = ApplyReport {
            changed: !names.is_empty(),
            rejected: Vec::new(),
        };
        for raw in names {
            match ChannelName::parse(raw, "reset") {
                Ok(name) => {
                    self.watched.insert(name.into_string());
                }
                Err(e) => report.rejected.push(e),
            }
        }
        report
    }

    pub fn is_watching(&self, name: &str) -> bool {
        self.watched.contains(&normalize(name))
    }

    /// Watched names, sorted.
    pub fn watching(&self) -> Vec<String> {
        let mut names: Vec<String> = self.watched.iter().map(|n| n.key().clone()).collect();
        names.sort();
        names
    }

    pub fn register(&self, channel: &str) {
        if !self.known.contains(channel) {
            self.known.insert(channel.to_string());
        }
    }

    /// Every channel ever logged to, sorted.
    pub fn channels(&self) -> Vec<String> {
        let mut names: Vec<String> = self.known.iter().map(|n| n.key().clone()).collect();
        names.sort();
        names
    }

    /// The cookie value for the current watched set.
    pub fn serialize(&self) -> String {
        self.watching().join(",")
    }
}
