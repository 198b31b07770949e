//! Shared transport attributes applied to every cookie a manager writes.

use crate::cookies::options::CookieOptions;
use crate::cookies::request::RequestContext;
use crate::cookies::samesite::SameSite;
use std::net::IpAddr;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieAttributes {
    /// Unix seconds; `0` is a session cookie.
    pub expires_at: i64,
    pub path: String,
    pub domain: Option<String>,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    /// Never transmitted; kept for inspection only.
    pub remote_ip: Option<IpAddr>,
}

impl Default for CookieAttributes {
    fn default() -> Self {
        Self {
            expires_at: 0,
            path: "/".to_string(),
            domain: None,
            secure: false,
            http_only: false,
            same_site: SameSite::Lax,
            remote_ip: None,
        }
    }
}

impl CookieAttributes {
    /// Merge `options` onto the current attributes.
    ///
    /// The remote IP and the default domain are re-read from `ctx` on every
    /// call; an explicit `domain` option then overrides the default. All
    /// other attributes change only when the matching option is present.
    pub fn apply(&mut self, options: &CookieOptions, ctx: &RequestContext) {
        self.remote_ip = ctx.remote_ip;
        self.domain = ctx.default_domain();
        self.merge_fields(options);
    }

    /// Attributes for a single call: a copy of `self` with the present
    /// fields of `options` laid over it. The request context is not re-read.
    pub fn merged(&self, options: &CookieOptions) -> Self {
        let mut attrs = self.clone();
        attrs.merge_fields(options);
        attrs
    }

    fn merge_fields(&mut self, options: &CookieOptions) {
        if let Some(secs) = options.expires_in {
            self.expires_at = OffsetDateTime::now_utc()
                .unix_timestamp()
                .saturating_add(secs);
        } else if let Some(at) = options.expires_at {
            self.expires_at = at;
        }
        if let Some(path) = &options.path {
            self.path = path.clone();
        }
        if let Some(domain) = &options.domain {
            self.domain = Some(domain.clone());
        }
        if let Some(secure) = options.secure {
            self.secure = secure;
        }
        if let Some(http_only) = options.http_only {
            self.http_only = http_only;
        }
        if let Some(raw) = &options.same_site {
            match SameSite::parse(raw) {
                Some(same_site) => self.same_site = same_site,
                None => {
                    tracing::warn!(value = %raw, "ignoring unrecognized SameSite value");
                }
            }
        }
    }

    pub fn is_session(&self) -> bool {
        self.expires_at == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RequestContext {
        RequestContext::new()
            .with_remote_ip("127.0.0.1".parse().unwrap())
            .with_server_name("localhost")
    }

    #[test]
    fn test_defaults() {
        let attrs = CookieAttributes::default();
        assert_eq!(attrs.expires_at, 0);
        assert!(attrs.is_session());
        assert_eq!(attrs.path, "/");
        assert!(!attrs.secure);
        assert!(!attrs.http_only);
        assert_eq!(attrs.same_site, SameSite::Lax);
    }

    #[test]
    fn test_apply_is_partial() {
        let mut attrs = CookieAttributes::default();
        attrs.apply(&CookieOptions::new().path("/app"), &ctx());
        attrs.apply(&CookieOptions::new().secure(true), &ctx());

        assert_eq!(attrs.path, "/app");
        assert!(attrs.secure);
    }

    #[test]
    fn test_apply_recaptures_request_context() {
        let mut attrs = CookieAttributes::default();
        attrs.apply(&CookieOptions::new(), &ctx());
        assert_eq!(attrs.domain.as_deref(), Some("localhost"));
        assert_eq!(attrs.remote_ip, Some("127.0.0.1".parse().unwrap()));

        let other = RequestContext::new().with_host("example.org:8080");
        attrs.apply(&CookieOptions::new(), &other);
        assert_eq!(attrs.domain.as_deref(), Some("example.org"));
        assert_eq!(attrs.remote_ip, None);
    }

    #[test]
    fn test_explicit_domain_overrides_default() {
        let mut attrs = CookieAttributes::default();
        attrs.apply(&CookieOptions::new().domain("cdn.example.com"), &ctx());
        assert_eq!(attrs.domain.as_deref(), Some("cdn.example.com"));
    }

    #[test]
    fn test_invalid_same_site_keeps_previous() {
        let mut attrs = CookieAttributes::default();
        attrs.apply(&CookieOptions::new().same_site("Strict"), &ctx());
        attrs.apply(&CookieOptions::new().same_site("Bogus"), &ctx());
        assert_eq!(attrs.same_site, SameSite::Strict);
    }

    #[test]
    fn test_expires_in_is_relative_to_now() {
        let before = OffsetDateTime::now_utc().unix_timestamp();
        let mut attrs = CookieAttributes::default();
        attrs.apply(&CookieOptions::new().expires_in(3600), &ctx());
        let after = OffsetDateTime::now_utc().unix_timestamp();

        assert!(attrs.expires_at >= before + 3600);
        assert!(attrs.expires_at <= after + 3600);
    }

    #[test]
    fn test_expires_in_saturates() {
        let options = CookieOptions::from_json_str(r#"{"expires_in": 9223372036854775807}"#).unwrap();
        let mut attrs = CookieAttributes::default();
        attrs.apply(&options, &ctx());
        assert_eq!(attrs.expires_at, i64::MAX);

        attrs.apply(&CookieOptions::new().expires_in(i64::MIN), &ctx());
        assert!(attrs.expires_at < 0);
        assert!(attrs.expires_at > i64::MIN);
    }

    #[test]
    fn test_merged_leaves_original_untouched() {
        let mut attrs = CookieAttributes::default();
        attrs.apply(&CookieOptions::new().domain("cdn.example.com"), &ctx());

        let once = attrs.merged(&CookieOptions::new().http_only(true));
        assert!(once.http_only);
        assert_eq!(once.domain.as_deref(), Some("cdn.example.com"));
        assert!(!attrs.http_only);
    }
}
