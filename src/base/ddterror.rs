use crate::console::Severity;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DdtError {
    // Channel Errors
    #[error("invalid channel name {name:?} when calling {method}")]
    InvalidChannelName { name: String, method: &'static str },

    // Cookie Errors
    #[error("no configured domain matches host {host}")]
    NoMatchingDomain { host: String },
    #[error("cookie line could not be parsed: {message}")]
    CookieParse { message: String },
    #[error("cookie domain {domain} is a public suffix or not a parent of the host")]
    CookieDomainRejected { domain: String },

    // Console Errors
    #[error("cannot proxy {0}, it is not defined in console")]
    UnsupportedSeverity(Severity),

    // Configuration Errors
    #[error("failed to read configuration {path}: {message}")]
    ConfigRead { path: String, message: String },
    #[error("invalid configuration: {message}")]
    ConfigParse { message: String },

    // Jar Persistence Errors
    #[error("cookie jar IO failed for {path}: {message}")]
    JarIo { path: String, message: String },
    #[error("cookie jar file is malformed: {message}")]
    JarFormat { message: String },
}

impl DdtError {
    pub fn invalid_channel(name: impl Into<String>, method: &'static str) -> Self {
        DdtError::InvalidChannelName {
            name: name.into(),
            method,
        }
    }

    pub fn no_matching_domain(host: impl Into<String>) -> Self {
        DdtError::NoMatchingDomain { host: host.into() }
    }

    pub fn config_parse(err: impl std::fmt::Display) -> Self {
        DdtError::ConfigParse {
            message: err.to_string(),
        }
    }

    pub fn jar_format(err: impl std::fmt::Display) -> Self {
        DdtError::JarFormat {
            message: err.to_string(),
        }
    }

    /// Whether this error came from caller input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DdtError::InvalidChannelName { .. } | DdtError::ConfigParse { .. }
        )
    }
}
