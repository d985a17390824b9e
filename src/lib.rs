//! # ddt
//!
//! Channel-filtered debug logging with a cookie-persisted watch list.
//!
//! Log statements are tagged with a named *channel*. Nothing is printed for
//! a channel until it is watched; the watched set is mirrored into a cookie
//! scoped to a configured parent domain, so turning a channel on in one
//! page keeps it on across reloads and sibling subdomains.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use ddt::{Ddt, MemorySink, PageContext, Severity};
//!
//! let sink = Arc::new(MemorySink::new());
//! let ddt = Ddt::builder(PageContext::new("app.example.com"))
//!     .sink(sink.clone())
//!     .build();
//!
//! ddt.log("net", "request sent", &[]);      // not watched: silent
//! ddt.watch("Net");
//! ddt.log("net", "request sent", &[]);      // "[net] request sent"
//!
//! assert_eq!(sink.messages(Severity::Log), vec!["[net] request sent"]);
//! assert_eq!(ddt.channels(), vec!["net"]);
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error type and context helpers
//! - [`channels`] - Channel names, argument coercion, watched/known registry
//! - [`config`] - Cookie name, domains, retention
//! - [`console`] - Output sinks and severity proxying
//! - [`cookies`] - Watch cookie, in-memory jar, persistence, PSL checks
//!
//! The host environment is injected: output goes to a
//! [`ConsoleSink`], cookies to a [`DocumentCookies`](cookies::DocumentCookies)
//! store, and [`PageContext`] says which host the page is on and whether
//! it is nested in a frame.

pub mod base;
pub mod channels;
pub mod config;
pub mod console;
pub mod cookies;
pub mod facade;
pub mod page;

pub use base::ddterror::DdtError;
pub use channels::IntoChannels;
pub use config::{ConfigOverrides, DdtConfig, DomainMatch};
pub use console::{ConsoleSink, MemorySink, Severity, TracingSink};
pub use facade::{Ddt, DdtBuilder};
pub use page::PageContext;
