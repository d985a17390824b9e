//! Process-wide settings: cookie name, eligible domains and retention.
//!
//! An embedder may pre-seed any subset of the settings through
//! [`ConfigOverrides`]; [`DdtConfig::resolve`] fills the rest with defaults.
//! Supplied values are not validated.
//!
//! ```
//! use ddt::config::{ConfigOverrides, DdtConfig};
//!
//! let overrides = ConfigOverrides::from_json_str(r#"{"days": 7}"#)?;
//! let config = DdtConfig::resolve(overrides, "app.example.com");
//! assert_eq!(config.cookie, "ddt_watch");
//! assert_eq!(config.domains, vec!["example.com"]);
//! assert_eq!(config.days, 7);
//! # Ok::<(), ddt::DdtError>(())
//! ```

use crate::base::context::IoResultExt;
use crate::base::ddterror::DdtError;
use crate::cookies::psl;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

pub const DEFAULT_COOKIE: &str = "ddt_watch";
pub const DEFAULT_DAYS: i64 = 90;

/// How a configured domain is matched against the page host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainMatch {
    /// The domain occurs anywhere in the host. `eta.com` matches `theta.com`.
    Substring,
    /// The host is the domain or ends with `.` followed by the domain.
    #[default]
    Suffix,
}

impl DomainMatch {
    pub fn matches(&self, host: &str, domain: &str) -> bool {
        let host = host.to_ascii_lowercase();
        let domain = domain.trim_start_matches('.').to_ascii_lowercase();
        match self {
            DomainMatch::Substring => host.contains(&domain),
            DomainMatch::Suffix => {
                host == domain
                    || host
                        .strip_suffix(&domain)
                        .is_some_and(|rest| rest.ends_with('.'))
            }
        }
    }
}

/// Settings supplied by the embedder. `None`, empty strings, empty lists
/// and zero days all count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub cookie: Option<String>,
    pub domains: Option<Vec<String>>,
    pub days: Option<i64>,
    pub domain_match: Option<DomainMatch>,
}

impl ConfigOverrides {
    pub fn from_json_str(json: &str) -> Result<Self, DdtError> {
        serde_json::from_str(json).map_err(DdtError::config_parse)
    }

    pub fn from_file(path: &Path) -> Result<Self, DdtError> {
        let json = fs::read_to_string(path).config_context(path)?;
        Self::from_json_str(&json)
    }

    pub fn cookie(mut self, name: impl Into<String>) -> Self {
        self.cookie = Some(name.into());
        self
    }

    pub fn domains<S: Into<String>>(mut self, domains: impl IntoIterator<Item = S>) -> Self {
        self.domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    pub fn days(mut self, days: i64) -> Self {
        self.days = Some(days);
        self
    }

    pub fn domain_match(mut self, mode: DomainMatch) -> Self {
        self.domain_match = Some(mode);
        self
    }
}

/// Resolved settings. Immutable once the facade is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DdtConfig {
    pub cookie: String,
    pub domains: Vec<String>,
    pub days: i64,
    pub domain_match: DomainMatch,
}

impl DdtConfig {
    /// Apply defaults to every unset field. `hostname` is the page host
    /// without port and seeds the default domain.
    pub fn resolve(overrides: ConfigOverrides, hostname: &str) -> Self {
        let cookie = overrides
            .cookie
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_COOKIE.to_string());

        let domains = overrides
            .domains
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| vec![Self::default_domain(hostname)]);

        let days = overrides
            .days
            .filter(|d| *d != 0)
            .unwrap_or(DEFAULT_DAYS);

        Self {
            cookie,
            domains,
            days,
            domain_match: overrides.domain_match.unwrap_or_default(),
        }
    }

    /// The last two dot-separated labels of `hostname`.
    pub fn default_domain(hostname: &str) -> String {
        let labels: Vec<&str> = hostname.split('.').collect();
        let start = labels.len().saturating_sub(2);
        let domain = labels[start..].join(".");

        if psl::is_public_suffix(&domain) {
            tracing::warn!(
                domain = %domain,
                suggested = ?psl::registrable_domain(hostname),
                "default cookie domain is a public suffix, watch cookies will be refused"
            );
        }

        domain
    }

    /// First configured domain that matches `hostname`.
    pub fn matching_domain(&self, hostname: &str) -> Option<&str> {
        self.domains
            .iter()
            .find(|d| self.domain_match.matches(hostname, d))
            .map(|d| d.as_str())
    }

    /// Whether `url` points at a configured domain or a single-label
    /// subdomain of one. Accepts `http:`, `https:` and scheme-relative URLs.
    pub fn matches_url(&self, url: &str) -> bool {
        let candidate = if url.starts_with("//") {
            format!("https:{}", url)
        } else {
            url.to_string()
        };
        let Ok(parsed) = Url::parse(&candidate) else {
            return false;
        };
        if !matches!(parsed.scheme(), "http" | "https") {
            return false;
        }
        let Some(host) = parsed.host_str() else {
            return false;
        };

        self.domains.iter().any(|domain| {
            let domain = domain.trim_start_matches('.').to_ascii_lowercase();
            host == domain
                || host
                    .strip_suffix(&domain)
                    .and_then(|rest| rest.strip_suffix('.'))
                    .is_some_and(|label| !label.is_empty() && !label.contains('.'))
        })
    }
}
