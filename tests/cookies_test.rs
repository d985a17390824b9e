use ddt::config::{ConfigOverrides, DdtConfig};
use ddt::cookies::jar::CookieJar;
use ddt::cookies::persistence::{load_jar, save_jar};
use ddt::cookies::watchcookie::WatchCookie;
use ddt::cookies::DocumentCookies;
use ddt::{Ddt, MemorySink, PageContext};
use std::sync::Arc;

#[test]
fn test_parse_and_read_back() {
    let jar = CookieJar::new();
    jar.parse_and_save_cookie("example.com", "foo=bar; Path=/")
        .unwrap();

    let cookies = jar.cookies_for_host("example.com");
    assert_eq!(cookies.len(), 1);
    assert_eq!(cookies[0].name, "foo");
    assert_eq!(cookies[0].value, "bar");
    assert_eq!(cookies[0].path, "/");
}

#[test]
fn test_domain_matching() {
    let jar = CookieJar::new();

    // Cookie for exact host
    jar.parse_and_save_cookie("a.example.com", "host=val").unwrap();
    // Cookie for domain
    jar.parse_and_save_cookie("a.example.com", "domain=val; Domain=example.com")
        .unwrap();

    let on_host = jar.document("a.example.com").read();
    assert!(on_host.contains("host=val"));
    assert!(on_host.contains("domain=val"));

    let on_sibling = jar.document("b.example.com").read();
    assert_eq!(on_sibling, "domain=val");
}

#[test]
fn test_watch_cookie_round_trips_through_jar() {
    let jar = CookieJar::new();
    let config = DdtConfig::resolve(ConfigOverrides::default(), "www.example.com");
    let cookie = WatchCookie::new(Arc::new(jar.document("www.example.com")));

    cookie
        .set(&config, "www.example.com", "bar,foo", None)
        .unwrap();

    assert_eq!(jar.total_cookie_count(), 1);
    assert_eq!(cookie.get(&config), vec!["bar", "foo"]);
}

#[test]
fn test_first_matching_domain_wins() {
    let jar = CookieJar::new();
    let config = DdtConfig::resolve(
        ConfigOverrides::default().domains(["other.org", "app.example.com", "example.com"]),
        "app.example.com",
    );
    let cookie = WatchCookie::new(Arc::new(jar.document("app.example.com")));
    cookie.set(&config, "app.example.com", "net", None).unwrap();

    let stored = jar.cookies_for_host("app.example.com");
    assert_eq!(stored[0].domain, "app.example.com");
    assert!(jar.document("www.example.com").read().is_empty());
}

#[test]
fn test_jar_survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ddt-cookies.json");

    {
        let jar = CookieJar::new();
        let ddt = Ddt::builder(PageContext::new("tool.example.com"))
            .sink(Arc::new(MemorySink::new()))
            .cookies(jar.document("tool.example.com"))
            .build();
        ddt.watch(["db", "cache"]);
        save_jar(&jar, &path).unwrap();
    }

    let jar = load_jar(&path).unwrap();
    let ddt = Ddt::builder(PageContext::new("tool.example.com"))
        .sink(Arc::new(MemorySink::new()))
        .cookies(jar.document("tool.example.com"))
        .build();
    assert_eq!(ddt.watching(), vec!["cache", "db"]);
}
