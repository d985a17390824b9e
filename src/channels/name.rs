use crate::base::ddterror::DdtError;
use std::fmt;

/// A validated, lowercased channel name.
///
/// Valid names are one or more ASCII letters. Lookups are case-insensitive,
/// so the stored form is always lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelName(String);

impl ChannelName {
    /// Validate `raw` on behalf of `method`, which is named in the error.
    pub fn parse(raw: &str, method: &'static str) -> Result<Self, DdtError> {
        if is_valid(raw) {
            Ok(Self(raw.to_ascii_lowercase()))
        } else {
            Err(DdtError::invalid_channel(raw, method))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Whether `raw` matches `^[a-zA-Z]+$`.
pub fn is_valid(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Lowercase form used for lookups. Does not validate.
pub fn normalize(raw: &str) -> String {
    raw.to_ascii_lowercase()
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ChannelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
