//! Argument coercion for the multi-name operations.
//!
//! `watch`, `unwatch` and `reset` take either one name or a list of names.
//! Every accepted shape funnels through [`IntoChannels`] into a single
//! ordered `Vec<String>` before any validation happens.
//!
//! ```
//! use ddt::channels::args::IntoChannels;
//!
//! assert_eq!("foo".into_channels(), vec!["foo"]);
//! assert_eq!(["foo", "bar"].into_channels(), vec!["foo", "bar"]);
//! assert!(Vec::<String>::new().into_channels().is_empty());
//! ```

pub trait IntoChannels {
    fn into_channels(self) -> Vec<String>;
}

impl IntoChannels for &str {
    fn into_channels(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoChannels for String {
    fn into_channels(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoChannels for &String {
    fn into_channels(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<S: AsRef<str>> IntoChannels for Vec<S> {
    fn into_channels(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>> IntoChannels for &[S] {
    fn into_channels(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> IntoChannels for [S; N] {
    fn into_channels(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> IntoChannels for &[S; N] {
    fn into_channels(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

/// No names at all.
impl IntoChannels for () {
    fn into_channels(self) -> Vec<String> {
        Vec::new()
    }
}
