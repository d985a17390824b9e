use crate::base::ddterror::DdtError;
use crate::channels::{ApplyReport, ChannelRegistry, IntoChannels};
use crate::config::{ConfigOverrides, DdtConfig};
use crate::console::{ConsoleProxy, ConsoleSink, Severity, TracingSink};
use crate::cookies::jar::CookieJar;
use crate::cookies::watchcookie::WatchCookie;
use crate::cookies::DocumentCookies;
use crate::page::PageContext;
use serde_json::{json, Value};
use std::fmt;
use std::sync::Arc;

/// Channel-gated logging facade.
///
/// One instance per page. Logging calls on unwatched channels produce no
/// output; `watch`/`unwatch` mirror the watched set into a cookie so it
/// survives reloads and is shared by every host under the cookie domain.
///
/// No method panics or returns an error for bad channel names: they are
/// reported to the sink's `warn` and skipped.
pub struct Ddt {
    config: DdtConfig,
    page: PageContext,
    hostname: String,
    console: ConsoleProxy,
    registry: ChannelRegistry,
    cookie: WatchCookie,
}

/// Builder for [`Ddt`]. Building runs the bootstrap: the watched set is
/// restored from the cookie and, outside nested frames, announced once.
pub struct DdtBuilder {
    page: PageContext,
    overrides: ConfigOverrides,
    sink: Option<Arc<dyn ConsoleSink>>,
    cookies: Option<Arc<dyn DocumentCookies>>,
}

impl DdtBuilder {
    /// Settings pre-seeded by the embedder. Unset fields get defaults.
    pub fn config(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Output sink. Defaults to [`TracingSink`].
    pub fn sink(mut self, sink: Arc<dyn ConsoleSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// The page's cookie store. Defaults to a private in-memory jar.
    pub fn cookies<D: DocumentCookies + 'static>(mut self, cookies: D) -> Self {
        self.cookies = Some(Arc::new(cookies) as Arc<dyn DocumentCookies>);
        self
    }

    pub fn build(self) -> Ddt {
        let hostname = self.page.hostname();
        let config = DdtConfig::resolve(self.overrides, &hostname);
        let sink = self
            .sink
            .unwrap_or_else(|| Arc::new(TracingSink::new()) as Arc<dyn ConsoleSink>);
        let cookies = self.cookies.unwrap_or_else(|| {
            Arc::new(CookieJar::new().document(hostname.clone())) as Arc<dyn DocumentCookies>
        });

        let ddt = Ddt {
            console: ConsoleProxy::new(sink),
            registry: ChannelRegistry::new(),
            cookie: WatchCookie::new(cookies),
            config,
            page: self.page,
            hostname,
        };
        ddt.bootstrap();
        ddt
    }
}

impl Ddt {
    pub fn builder(page: PageContext) -> DdtBuilder {
        DdtBuilder {
            page,
            overrides: ConfigOverrides::default(),
            sink: None,
            cookies: None,
        }
    }

    fn bootstrap(&self) {
        let saved = self.cookie.get(&self.config);
        if self.reset(saved) && !self.page.is_nested_frame() {
            self.console
                .notice("[ddt] watching", &[json!(self.registry.watching())]);
        }
        tracing::debug!(
            host = %self.hostname,
            watching = ?self.registry.watching(),
            "ddt initialized"
        );
    }

    /// Start watching one or more channels.
    ///
    /// Returns true and rewrites the cookie if at least one name was valid.
    pub fn watch<N: IntoChannels>(&self, names: N) -> bool {
        let names = names.into_channels();
        if names.is_empty() {
            return false;
        }
        let report = self.registry.watch(&names);
        self.finish(report, true)
    }

    /// Stop watching one or more channels.
    ///
    /// Returns true and rewrites the cookie if at least one was watched.
    pub fn unwatch<N: IntoChannels>(&self, names: N) -> bool {
        let names = names.into_channels();
        if names.is_empty() {
            return false;
        }
        let report = self.registry.unwatch(&names);
        self.finish(report, true)
    }

    /// Replace the watched set without touching the cookie.
    ///
    /// The set is cleared even when `names` is empty, in which case this
    /// returns false.
    pub fn reset<N: IntoChannels>(&self, names: N) -> bool {
        let names = names.into_channels();
        let report = self.registry.reset(&names);
        self.finish(report, false)
    }

    fn finish(&self, report: ApplyReport, persist: bool) -> bool {
        for err in &report.rejected {
            self.console.warn_rejected(err);
        }
        if report.changed && persist {
            if let Err(e) = self.save_cookie(None) {
                tracing::debug!(error = %e, "watch list not persisted");
            }
        }
        report.changed
    }

    pub fn is_watching(&self, name: &str) -> bool {
        self.registry.is_watching(name)
    }

    /// Watched channels, sorted.
    pub fn watching(&self) -> Vec<String> {
        self.registry.watching()
    }

    /// Every channel ever passed to a logging call, sorted.
    pub fn channels(&self) -> Vec<String> {
        self.registry.channels()
    }

    pub fn log(&self, channel: &str, message: impl fmt::Display, extra: &[Value]) {
        self.emit(Severity::Log, channel, message, extra);
    }

    pub fn info(&self, channel: &str, message: impl fmt::Display, extra: &[Value]) {
        self.emit(Severity::Info, channel, message, extra);
    }

    pub fn warn(&self, channel: &str, message: impl fmt::Display, extra: &[Value]) {
        self.emit(Severity::Warn, channel, message, extra);
    }

    pub fn error(&self, channel: &str, message: impl fmt::Display, extra: &[Value]) {
        self.emit(Severity::Error, channel, message, extra);
    }

    /// `log`, followed by a stack dump when the channel is watched.
    pub fn trace(&self, channel: &str, message: impl fmt::Display, extra: &[Value]) {
        if self.emit(Severity::Log, channel, message, extra) {
            self.console.trace();
        }
    }

    fn emit(
        &self,
        severity: Severity,
        channel: &str,
        message: impl fmt::Display,
        extra: &[Value],
    ) -> bool {
        self.registry.register(channel);
        if !self.registry.is_watching(channel) {
            return false;
        }
        self.console
            .forward(severity, channel, &message.to_string(), extra);
        true
    }

    /// Channel names currently stored in the watch cookie.
    pub fn cookie_channels(&self) -> Vec<String> {
        self.cookie.get(&self.config)
    }

    /// Write the watched set to the cookie, expiring in `expires_in_days`
    /// (configured default when `None`). Returns the new version.
    pub fn save_cookie(&self, expires_in_days: Option<i64>) -> Result<u32, DdtError> {
        self.cookie.set(
            &self.config,
            &self.hostname,
            &self.registry.serialize(),
            expires_in_days,
        )
    }

    /// Expire the watch cookie. The in-memory set is left alone.
    pub fn delete_cookie(&self) -> Result<u32, DdtError> {
        self.cookie.del(&self.config, &self.hostname)
    }

    pub fn config(&self) -> &DdtConfig {
        &self.config
    }

    pub fn page(&self) -> &PageContext {
        &self.page
    }

    /// Starts at 1; bumped on every successful cookie write.
    pub fn version(&self) -> u32 {
        self.cookie.version()
    }
}

impl fmt::Debug for Ddt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ddt")
            .field("config", &self.config)
            .field("page", &self.page)
            .field("watching", &self.registry.watching())
            .field("version", &self.version())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{MemorySink, Record};

    fn build(host: &str) -> (Arc<MemorySink>, CookieJar, Ddt) {
        let sink = Arc::new(MemorySink::new());
        let jar = CookieJar::new();
        let ddt = Ddt::builder(PageContext::new(host))
            .sink(sink.clone())
            .cookies(jar.document(host))
            .build();
        (sink, jar, ddt)
    }

    #[test]
    fn test_unwatched_log_is_silent() {
        let (sink, _jar, ddt) = build("example.com");
        ddt.log("foo", "hi", &[]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_watched_log_is_prefixed() {
        let (sink, _jar, ddt) = build("example.com");
        assert!(ddt.watch("foo"));
        ddt.log("foo", "hi", &[json!(1), json!("two")]);

        assert_eq!(
            sink.records(),
            vec![Record::Line {
                severity: Severity::Log,
                message: "[foo] hi".to_string(),
                extra: vec![json!(1), json!("two")],
            }]
        );
    }

    #[test]
    fn test_trace_dumps_only_when_watched() {
        let (sink, _jar, ddt) = build("example.com");
        ddt.trace("foo", "where", &[]);
        assert_eq!(sink.trace_count(), 0);

        ddt.watch("foo");
        ddt.trace("foo", "where", &[]);
        assert_eq!(sink.messages(Severity::Log), vec!["[foo] where"]);
        assert_eq!(sink.trace_count(), 1);
    }

    #[test]
    fn test_watch_bumps_version() {
        let (_sink, _jar, ddt) = build("www.example.com");
        assert_eq!(ddt.version(), 1);
        ddt.watch(["foo", "bar"]);
        assert_eq!(ddt.version(), 2);
        assert_eq!(ddt.cookie_channels(), vec!["bar", "foo"]);
    }

    #[test]
    fn test_reset_does_not_write_cookie() {
        let (_sink, jar, ddt) = build("example.com");
        assert!(ddt.reset("foo"));
        assert_eq!(ddt.version(), 1);
        assert_eq!(jar.total_cookie_count(), 0);
    }

    #[test]
    fn test_sink_accepts_trait_object() {
        let memory = Arc::new(MemorySink::new());
        let shared: Arc<dyn ConsoleSink> = memory.clone();
        let ddt = Ddt::builder(PageContext::new("example.com"))
            .sink(shared)
            .cookies(CookieJar::new().document("example.com"))
            .build();

        ddt.watch("net");
        ddt.warn("net", "via dyn", &[]);
        assert_eq!(memory.messages(Severity::Warn), vec!["[net] via dyn"]);
    }

    #[test]
    fn test_debug_shows_watching() {
        let (_sink, _jar, ddt) = build("example.com");
        ddt.watch("net");
        let debug = format!("{:?}", ddt);
        assert!(debug.contains("\"net\""));
    }
}
