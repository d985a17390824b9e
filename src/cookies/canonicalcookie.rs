use crate::base::ddterror::DdtError;
use cookie::Cookie;
use time::OffsetDateTime;

/// A cookie as the jar stores it.
/// Modeled after Chromium's `net::CanonicalCookie`, reduced to the fields a
/// document-scoped jar needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCookie {
    pub name: String,
    /// Raw value as written, still percent-encoded.
    pub value: String,
    /// Lowercase, without a leading dot.
    pub domain: String,
    pub path: String,
    pub creation_time: OffsetDateTime,
    pub expiration_time: Option<OffsetDateTime>,
    pub host_only: bool,
}

impl CanonicalCookie {
    pub fn new(
        name: String,
        value: String,
        domain: String,
        path: String,
        creation_time: OffsetDateTime,
        expiration_time: Option<OffsetDateTime>,
    ) -> Self {
        Self {
            name,
            value,
            domain,
            path,
            creation_time,
            expiration_time,
            host_only: true,
        }
    }

    /// Parse a `Set-Cookie`-style line written by a page on `host`.
    pub fn parse(line: &str, host: &str, now: OffsetDateTime) -> Result<Self, DdtError> {
        let parsed = Cookie::parse(line).map_err(|e| DdtError::CookieParse {
            message: e.to_string(),
        })?;

        // An explicit Domain attribute makes a domain cookie; the leading
        // dot carries no meaning once parsed.
        let (domain, host_only) = match parsed.domain() {
            Some(d) => (d.trim_start_matches('.').to_lowercase(), false),
            None => (host.to_lowercase(), true),
        };

        let path = parsed.path().unwrap_or("/").to_string();
        let expiration_time = parsed.expires().and_then(|e| e.datetime());

        Ok(Self {
            name: parsed.name().to_string(),
            value: parsed.value().to_string(),
            domain,
            path,
            creation_time: now,
            expiration_time,
            host_only,
        })
    }

    /// Session cookies never expire.
    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        self.expiration_time
            .is_some_and(|expiry| expiry <= current_time)
    }

    /// Whether this cookie is visible to a page on `host`.
    /// Implements RFC 6265 domain matching.
    pub fn domain_matches(&self, host: &str) -> bool {
        if self.host_only {
            return self.domain.eq_ignore_ascii_case(host);
        }

        let host = host.to_ascii_lowercase();
        host == self.domain
            || host
                .strip_suffix(&self.domain)
                .is_some_and(|rest| rest.ends_with('.'))
    }
}
