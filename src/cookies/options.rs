//! Partial cookie options.
//!
//! A [`CookieOptions`] value lists the transport attributes a caller wants
//! to change. Every field is optional: an absent field leaves the current
//! attribute untouched when the options are merged.

use crate::base::context::IoResultExt;
use crate::base::neterror::NetError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CookieOptions {
    /// Absolute expiry as Unix seconds. `0` means a session cookie.
    pub expires_at: Option<i64>,

    /// Lifetime in seconds from the moment the options are merged.
    /// Takes precedence over `expires_at` when both are set.
    pub expires_in: Option<i64>,

    pub path: Option<String>,

    pub domain: Option<String>,

    pub secure: Option<bool>,

    pub http_only: Option<bool>,

    /// Raw policy name; unrecognized names are ignored on merge.
    pub same_site: Option<String>,
}

impl CookieOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expires_at(mut self, unix_secs: i64) -> Self {
        self.expires_at = Some(unix_secs);
        self
    }

    pub fn expires_in(mut self, secs: i64) -> Self {
        self.expires_in = Some(secs);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = Some(http_only);
        self
    }

    /// Accepts either a [`SameSite`](crate::cookies::samesite::SameSite) or a raw name.
    pub fn same_site(mut self, same_site: impl Into<String>) -> Self {
        self.same_site = Some(same_site.into());
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Load options from a JSON document.
    ///
    /// ```ignore
    /// let options = CookieOptions::from_json_str(r#"{"path": "/app", "secure": true}"#)?;
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, NetError> {
        serde_json::from_str(json).map_err(|e| NetError::cookie_config_invalid(e.to_string()))
    }

    /// Load options from a JSON file on disk.
    pub fn from_json_file(path: &Path) -> Result<Self, NetError> {
        let json = fs::read_to_string(path).config_context(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::samesite::SameSite;
    use tempfile::tempdir;

    #[test]
    fn test_builder_sets_only_named_fields() {
        let options = CookieOptions::new().path("/app").secure(true);
        assert_eq!(options.path.as_deref(), Some("/app"));
        assert_eq!(options.secure, Some(true));
        assert_eq!(options.domain, None);
        assert_eq!(options.same_site, None);
        assert!(!options.is_empty());
        assert!(CookieOptions::new().is_empty());
    }

    #[test]
    fn test_same_site_accepts_enum() {
        let options = CookieOptions::new().same_site(SameSite::Strict);
        assert_eq!(options.same_site.as_deref(), Some("Strict"));
    }

    #[test]
    fn test_from_json_str_partial() {
        let options =
            CookieOptions::from_json_str(r#"{"path": "/shop", "http_only": true}"#).unwrap();
        assert_eq!(options, CookieOptions::new().path("/shop").http_only(true));
    }

    #[test]
    fn test_from_json_str_rejects_unknown_keys() {
        let err = CookieOptions::from_json_str(r#"{"expire": 10}"#).unwrap_err();
        assert!(matches!(err, NetError::CookieConfigInvalid { .. }));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cookies.json");
        fs::write(&path, r#"{"domain": "example.com", "same_site": "None"}"#).unwrap();

        let options = CookieOptions::from_json_file(&path).unwrap();
        assert_eq!(options.domain.as_deref(), Some("example.com"));
        assert_eq!(options.same_site.as_deref(), Some("None"));
    }

    #[test]
    fn test_from_json_file_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = CookieOptions::from_json_file(&path).unwrap_err();
        assert!(matches!(err, NetError::CookieConfigIo { .. }));
    }
}
