use url::Url;

/// Where the facade is running: the page host and whether the page is
/// embedded inside another page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    host: String,
    nested_frame: bool,
}

impl PageContext {
    /// A top-level page on `host` (`host[:port]`, as `location.host` gives it).
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            nested_frame: false,
        }
    }

    /// A page loaded inside another page's frame.
    pub fn nested(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            nested_frame: true,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn is_nested_frame(&self) -> bool {
        self.nested_frame
    }

    /// The host without any port, lowercased.
    pub fn hostname(&self) -> String {
        Url::parse(&format!("http://{}/", self.host))
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
            .unwrap_or_else(|| self.host.to_ascii_lowercase())
    }
}
