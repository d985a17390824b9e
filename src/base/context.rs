//! Ergonomic error context helpers.
//!
//! Provides extension traits for adding context to `Result` types,
//! converting IO errors into path-carrying `DdtError` variants.

use crate::base::ddterror::DdtError;
use std::io;
use std::path::Path;

/// Extension trait for adding context to IO Results.
pub trait IoResultExt<T> {
    /// Add configuration-file context to an IO error.
    ///
    /// # Example
    /// ```ignore
    /// use ddt::base::context::IoResultExt;
    ///
    /// let text = std::fs::read_to_string(path).config_context(path)?;
    /// // Error: "failed to read configuration ddt.json: No such file or directory"
    /// ```
    fn config_context(self, path: &Path) -> Result<T, DdtError>;

    /// Add cookie-jar-file context to an IO error.
    fn jar_context(self, path: &Path) -> Result<T, DdtError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn config_context(self, path: &Path) -> Result<T, DdtError> {
        self.map_err(|e| DdtError::ConfigRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn jar_context(self, path: &Path) -> Result<T, DdtError> {
        self.map_err(|e| DdtError::JarIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
