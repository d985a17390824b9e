//! Watch-list persistence through a document cookie store.
//!
//! | Piece | Responsibility |
//! |-------|----------------|
//! | [`DocumentCookies`] | The host's `document.cookie` (consumed, not owned) |
//! | [`WatchCookie`](watchcookie::WatchCookie) | get/set/del of the single watch cookie |
//! | [`CookieJar`](jar::CookieJar) | In-memory browser-like jar shared across hosts |
//! | [`persistence`] | Save/load a jar to disk |
//! | [`psl`] | Public suffix checks on cookie domains |
//!
//! # Sharing a watch list across subdomains
//!
//! ```
//! use ddt::cookies::jar::CookieJar;
//! use ddt::{Ddt, PageContext};
//!
//! let jar = CookieJar::new();
//! let app = Ddt::builder(PageContext::new("app.example.com"))
//!     .cookies(jar.document("app.example.com"))
//!     .build();
//! app.watch(["net", "ui"]);
//!
//! let admin = Ddt::builder(PageContext::new("admin.example.com"))
//!     .cookies(jar.document("admin.example.com"))
//!     .build();
//! assert_eq!(admin.watching(), vec!["net", "ui"]);
//! ```

pub mod canonicalcookie;
pub mod jar;
pub mod persistence;
pub mod psl;
pub mod watchcookie;

/// A page's cookie string, as `document.cookie` exposes it.
///
/// `read` returns every visible cookie as `name=value` pairs joined by
/// `"; "`. `write` takes one `Set-Cookie`-style line; a store may silently
/// refuse it, as browsers do.
pub trait DocumentCookies: Send + Sync {
    fn read(&self) -> String;
    fn write(&self, line: &str);
}
