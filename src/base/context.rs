//! Ergonomic error context helpers.
//!
//! Provides extension traits for adding context to `Result` types,
//! converting JSON and IO errors into context-rich `NetError` variants.

use crate::base::neterror::NetError;
use std::io;
use std::path::Path;

/// Extension trait for adding cookie context to JSON Results.
pub trait JsonResultExt<T> {
    /// Add encode context to a serialization error.
    ///
    /// # Example
    /// ```ignore
    /// use cookiekit::base::context::JsonResultExt;
    ///
    /// let text = serde_json::to_string(&value).encode_context("prefs")?;
    /// // Error: "Cookie 'prefs' could not be encoded: ..."
    /// ```
    fn encode_context(self, name: &str) -> Result<T, NetError>;

    /// Add decode context to a deserialization error.
    fn decode_context(self, name: &str) -> Result<T, NetError>;
}

impl<T> JsonResultExt<T> for Result<T, serde_json::Error> {
    fn encode_context(self, name: &str) -> Result<T, NetError> {
        self.map_err(|e| NetError::cookie_encode_failed(name, e.to_string()))
    }

    fn decode_context(self, name: &str) -> Result<T, NetError> {
        self.map_err(|e| NetError::cookie_decode_failed(name, e.to_string()))
    }
}

/// Extension trait for adding configuration context to IO Results.
pub trait IoResultExt<T> {
    /// Add the offending config path to an IO error.
    fn config_context(self, path: &Path) -> Result<T, NetError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn config_context(self, path: &Path) -> Result<T, NetError> {
        self.map_err(|e| NetError::CookieConfigIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
