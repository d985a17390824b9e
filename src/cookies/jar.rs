use crate::base::ddterror::DdtError;
use crate::cookies::canonicalcookie::CanonicalCookie;
use crate::cookies::psl;
use crate::cookies::DocumentCookies;
use dashmap::DashMap;
use std::sync::Arc;
use time::OffsetDateTime;

/// Maximum cookies per domain (Chromium default).
const MAX_COOKIES_PER_DOMAIN: usize = 50;

/// An in-memory, browser-like cookie jar shared by every page that uses it.
///
/// Cookies are keyed by domain. Pages see their own host-only cookies and
/// every domain cookie set on a parent domain, so a watch list written from
/// `a.example.com` with `Domain=.example.com` is visible on `b.example.com`.
#[derive(Clone, Default, Debug)]
pub struct CookieJar {
    // Map<Domain, List<Cookie>>
    store: Arc<DashMap<String, Vec<CanonicalCookie>>>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `document.cookie`-style view of this jar for a page on `host`.
    pub fn document(&self, host: impl Into<String>) -> PageCookies {
        PageCookies {
            jar: self.clone(),
            host: host.into().to_ascii_lowercase(),
        }
    }

    /// Store `cookie`, replacing any with the same name and path. An
    /// already-expired cookie deletes its match instead.
    pub fn set_canonical_cookie(&self, cookie: CanonicalCookie) {
        let mut entry = self.store.entry(cookie.domain.clone()).or_default();

        entry.retain(|c| c.name != cookie.name || c.path != cookie.path);

        if cookie.is_expired(OffsetDateTime::now_utc()) {
            return;
        }

        // Enforce per-domain limit with LRU eviction
        while entry.len() >= MAX_COOKIES_PER_DOMAIN {
            if let Some(oldest_idx) = entry
                .iter()
                .enumerate()
                .min_by_key(|(_, c)| c.creation_time)
                .map(|(i, _)| i)
            {
                entry.remove(oldest_idx);
            } else {
                break;
            }
        }

        entry.push(cookie);
    }

    /// Parse and store a cookie line written by a page on `host`.
    pub fn parse_and_save_cookie(&self, host: &str, line: &str) -> Result<(), DdtError> {
        let cookie = CanonicalCookie::parse(line, host, OffsetDateTime::now_utc())?;

        // PSL validation: a page may only scope a cookie to its own host
        // or a parent that is not a public suffix.
        if !cookie.host_only && !psl::is_valid_cookie_domain(&cookie.domain, host) {
            return Err(DdtError::CookieDomainRejected {
                domain: cookie.domain,
            });
        }

        self.set_canonical_cookie(cookie);
        Ok(())
    }

    /// Unexpired cookies visible to `host`, oldest first.
    pub fn cookies_for_host(&self, host: &str) -> Vec<CanonicalCookie> {
        let now = OffsetDateTime::now_utc();
        let mut result: Vec<CanonicalCookie> = Self::get_matching_domains(host)
            .iter()
            .filter_map(|domain| self.store.get(domain))
            .flat_map(|entry| entry.value().clone())
            .filter(|c| c.domain_matches(host) && !c.is_expired(now))
            .collect();

        result.sort_by(|a, b| a.creation_time.cmp(&b.creation_time));
        result
    }

    /// The `name=value; name=value` header a page on `host` would read.
    pub fn cookie_header(&self, host: &str) -> String {
        self.cookies_for_host(host)
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// The host itself and all parent domains.
    fn get_matching_domains(host: &str) -> Vec<String> {
        let host = host.to_ascii_lowercase();
        let parts: Vec<&str> = host.split('.').collect();
        let mut domains = vec![host.clone()];
        for i in 1..parts.len() {
            domains.push(parts[i..].join("."));
        }
        domains
    }

    pub fn total_cookie_count(&self) -> usize {
        self.store.iter().map(|e| e.value().len()).sum()
    }

    /// Iterate over all cookies (for persistence).
    pub fn iter_all_cookies(&self) -> impl Iterator<Item = CanonicalCookie> + '_ {
        self.store.iter().flat_map(|entry| entry.value().clone())
    }
}

/// One page's view of a [`CookieJar`].
#[derive(Clone, Debug)]
pub struct PageCookies {
    jar: CookieJar,
    host: String,
}

impl PageCookies {
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl DocumentCookies for PageCookies {
    fn read(&self) -> String {
        self.jar.cookie_header(&self.host)
    }

    fn write(&self, line: &str) {
        if let Err(e) = self.jar.parse_and_save_cookie(&self.host, line) {
            tracing::debug!(host = %self.host, error = %e, "cookie write ignored");
        }
    }
}
