//! Cookie jar persistence - save and load a jar to/from disk.
//!
//! Native embedders have no browser to keep the watch cookie between runs;
//! this writes the jar as JSON instead.

use crate::base::context::IoResultExt;
use crate::base::ddterror::DdtError;
use crate::cookies::canonicalcookie::CanonicalCookie;
use crate::cookies::jar::CookieJar;
use std::fs;
use std::path::Path;
use time::OffsetDateTime;

use serde::{Deserialize, Serialize};

/// Serializable representation of a cookie for persistence.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct PersistentCookie {
    name: String,
    value: String,
    domain: String,
    path: String,
    host_only: bool,
    expires_unix_secs: Option<i64>,
}

/// Save every cookie in `jar` to `path`.
///
/// # Example
/// ```ignore
/// persistence::save_jar(&jar, Path::new("ddt-cookies.json"))?;
/// ```
pub fn save_jar(jar: &CookieJar, path: &Path) -> Result<(), DdtError> {
    let all_cookies: Vec<PersistentCookie> = jar
        .iter_all_cookies()
        .map(|cookie| PersistentCookie {
            expires_unix_secs: cookie.expiration_time.map(|t| t.unix_timestamp()),
            name: cookie.name,
            value: cookie.value,
            domain: cookie.domain,
            path: cookie.path,
            host_only: cookie.host_only,
        })
        .collect();

    let json = serde_json::to_string_pretty(&all_cookies).map_err(DdtError::jar_format)?;

    fs::write(path, json).jar_context(path)?;
    tracing::debug!(path = %path.display(), count = all_cookies.len(), "saved cookie jar");
    Ok(())
}

/// Load a jar saved by [`save_jar`], skipping cookies that have expired.
pub fn load_jar(path: &Path) -> Result<CookieJar, DdtError> {
    let json = fs::read_to_string(path).jar_context(path)?;
    let persistent_cookies: Vec<PersistentCookie> =
        serde_json::from_str(&json).map_err(DdtError::jar_format)?;

    let jar = CookieJar::new();
    let now = OffsetDateTime::now_utc();

    for pc in persistent_cookies {
        let expiration_time = match pc.expires_unix_secs {
            Some(secs) => match OffsetDateTime::from_unix_timestamp(secs) {
                Ok(t) if t <= now => continue,
                Ok(t) => Some(t),
                Err(e) => return Err(DdtError::jar_format(e)),
            },
            None => None,
        };

        let mut cookie = CanonicalCookie::new(
            pc.name,
            pc.value,
            pc.domain,
            pc.path,
            now,
            expiration_time,
        );
        cookie.host_only = pc.host_only;

        jar.set_canonical_cookie(cookie);
    }

    Ok(jar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use time::Duration;

    #[test]
    fn test_save_load_roundtrip() {
        let jar = CookieJar::new();
        jar.parse_and_save_cookie(
            "www.example.com",
            "ddt_watch=foo%2Cbar; Domain=.example.com; Path=/",
        )
        .unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("cookies.json");
        save_jar(&jar, &path).unwrap();

        let loaded = load_jar(&path).unwrap();
        assert_eq!(loaded.total_cookie_count(), 1);
        assert_eq!(
            loaded.cookie_header("api.example.com"),
            "ddt_watch=foo%2Cbar"
        );
    }

    #[test]
    fn test_load_skips_expired() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cookies.json");
        let past = (OffsetDateTime::now_utc() - Duration::days(1)).unix_timestamp();
        let json = format!(
            r#"[{{"name":"old","value":"v","domain":"example.com","path":"/","host_only":false,"expires_unix_secs":{}}}]"#,
            past
        );
        std::fs::write(&path, json).unwrap();

        let loaded = load_jar(&path).unwrap();
        assert_eq!(loaded.total_cookie_count(), 0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_jar(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DdtError::JarIo { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            load_jar(&path).unwrap_err(),
            DdtError::JarFormat { .. }
        ));
    }
}
