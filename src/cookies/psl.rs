//! Public Suffix List (PSL) validation for cookie domain security.
//!
//! A watch cookie scoped to a public suffix like `.com` or `.co.uk` would be
//! shared with unrelated sites, so the jar refuses such domains the way a
//! browser does.
//!
//! Uses Mozilla's Public Suffix List via the `psl` crate.

use psl::{List, Psl};

/// Check if a domain is a listed public suffix (e.g., "com", "co.uk").
///
/// Names under an unlisted TLD, such as `localhost`, are not treated as
/// public suffixes.
pub fn is_public_suffix(domain: &str) -> bool {
    let domain_lower = domain.trim_start_matches('.').to_lowercase();
    let domain_bytes = domain_lower.as_bytes();

    match List.suffix(domain_bytes) {
        Some(suffix) => suffix.is_known() && suffix.as_bytes() == domain_bytes,
        None => false,
    }
}

/// Get the registrable domain (eTLD+1) for a domain.
/// For "sub.example.com", returns "example.com".
/// For "com" (public suffix), returns None.
pub fn registrable_domain(domain: &str) -> Option<String> {
    let domain_lower = domain.to_lowercase();
    psl::domain(domain_lower.as_bytes())
        .and_then(|d| std::str::from_utf8(d.as_bytes()).ok())
        .map(|s| s.to_string())
}

/// Check if a cookie domain is valid for a given host.
/// The cookie domain must be the host or a parent of it, and must not be
/// a public suffix.
pub fn is_valid_cookie_domain(cookie_domain: &str, host: &str) -> bool {
    let cookie_domain = cookie_domain
        .strip_prefix('.')
        .unwrap_or(cookie_domain)
        .to_lowercase();
    let host = host.to_lowercase();

    if cookie_domain.is_empty() || is_public_suffix(&cookie_domain) {
        return false;
    }

    host == cookie_domain || host.ends_with(&format!(".{}", cookie_domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_public_suffix_com() {
        assert!(is_public_suffix("com"));
        assert!(is_public_suffix("COM"));
        assert!(is_public_suffix(".com"));
    }

    #[test]
    fn test_is_public_suffix_co_uk() {
        assert!(is_public_suffix("co.uk"));
    }

    #[test]
    fn test_unlisted_tld_is_not_public_suffix() {
        assert!(!is_public_suffix("localhost"));
    }

    #[test]
    fn test_not_public_suffix() {
        assert!(!is_public_suffix("example.com"));
        assert!(!is_public_suffix("sub.example.com"));
    }

    #[test]
    fn test_registrable_domain() {
        assert_eq!(
            registrable_domain("deep.sub.example.com"),
            Some("example.com".to_string())
        );
        assert_eq!(
            registrable_domain("www.bbc.co.uk"),
            Some("bbc.co.uk".to_string())
        );
        assert_eq!(registrable_domain("co.uk"), None);
    }

    #[test]
    fn test_valid_cookie_domain() {
        assert!(is_valid_cookie_domain("example.com", "example.com"));
        assert!(is_valid_cookie_domain(".example.com", "sub.example.com"));
        assert!(is_valid_cookie_domain("localhost", "localhost"));
    }

    #[test]
    fn test_invalid_cookie_domain() {
        assert!(!is_valid_cookie_domain(".co.uk", "www.bbc.co.uk"));
        assert!(!is_valid_cookie_domain("other.com", "example.com"));
        assert!(!is_valid_cookie_domain("ample.com", "example.com"));
        assert!(!is_valid_cookie_domain("", "example.com"));
    }
}
