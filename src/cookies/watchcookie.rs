use crate::base::ddterror::DdtError;
use crate::config::DdtConfig;
use crate::cookies::DocumentCookies;
use cookie::Cookie;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use time::{Duration, OffsetDateTime};

/// Upper bound on retention, in days, so expiry dates stay representable.
const MAX_RETENTION_DAYS: i64 = 365 * 400;

/// Reads and writes the single cookie that mirrors the watched set.
///
/// Every successful write bumps a version counter that starts at 1.
pub struct WatchCookie {
    document: Arc<dyn DocumentCookies>,
    version: AtomicU32,
}

impl WatchCookie {
    pub fn new(document: Arc<dyn DocumentCookies>) -> Self {
        Self {
            document,
            version: AtomicU32::new(1),
        }
    }

    pub fn version(&self) -> u32 {
        self.version.load(Ordering::SeqCst)
    }

    /// Channel names stored under `config.cookie`, percent-decoded and
    /// split on commas. Empty when the cookie is absent or malformed.
    pub fn get(&self, config: &DdtConfig) -> Vec<String> {
        let header = self.document.read();
        Cookie::split_parse_encoded(header)
            .filter_map(Result::ok)
            .find(|c| c.name() == config.cookie)
            .map(|c| {
                c.value()
                    .split(',')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Write `value` for the first configured domain matching `hostname`.
    ///
    /// Expires `expires_in_days` from now, or after `config.days` when that
    /// is `None` or zero. A negative count deletes the cookie. Returns the
    /// new version.
    pub fn set(
        &self,
        config: &DdtConfig,
        hostname: &str,
        value: &str,
        expires_in_days: Option<i64>,
    ) -> Result<u32, DdtError> {
        let domain = config
            .matching_domain(hostname)
            .ok_or_else(|| DdtError::no_matching_domain(hostname))?;

        let days = match expires_in_days {
            Some(d) if d != 0 => d,
            _ => config.days,
        }
        .clamp(-MAX_RETENTION_DAYS, MAX_RETENTION_DAYS);
        let expires = OffsetDateTime::now_utc() + Duration::days(days);

        let cookie = Cookie::build((config.cookie.as_str(), value))
            .domain(format!(".{}", domain))
            .path("/")
            .expires(expires)
            .build();
        self.document.write(&cookie.encoded().to_string());

        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(domain = %domain, days, version, "wrote watch cookie");
        Ok(version)
    }

    /// Expire the cookie.
    pub fn del(&self, config: &DdtConfig, hostname: &str) -> Result<u32, DdtError> {
        self.set(config, hostname, "", Some(-1))
    }
}
