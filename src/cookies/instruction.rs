use crate::base::neterror::NetError;
use crate::cookies::attributes::CookieAttributes;
use crate::cookies::samesite::SameSite;
use cookie::Cookie;
use http::HeaderValue;
use time::OffsetDateTime;

/// A structured "set cookie" instruction handed to the response layer.
///
/// Carries the name, the already-encoded value, and the transport
/// attributes in effect when the instruction was emitted. The remote IP is
/// deliberately absent: it is never transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    /// Unix seconds; `0` is a session cookie.
    pub expires_at: i64,
    pub path: String,
    pub domain: Option<String>,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
}

impl SetCookie {
    pub fn new(name: String, value: String, attrs: &CookieAttributes) -> Self {
        Self {
            name,
            value,
            expires_at: attrs.expires_at,
            path: attrs.path.clone(),
            domain: attrs.domain.clone(),
            secure: attrs.secure,
            http_only: attrs.http_only,
            same_site: attrs.same_site,
        }
    }

    pub fn is_session(&self) -> bool {
        self.expires_at == 0
    }

    /// True when the instruction tells the client to drop the cookie.
    pub fn is_removal(&self, current_time: OffsetDateTime) -> bool {
        !self.is_session() && self.expires_at < current_time.unix_timestamp()
    }

    pub fn expiration_time(&self) -> Option<OffsetDateTime> {
        if self.is_session() {
            return None;
        }
        match OffsetDateTime::from_unix_timestamp(self.expires_at) {
            Ok(t) => Some(t),
            // Anything before the representable range is still in the past.
            Err(_) if self.expires_at < 0 => Some(OffsetDateTime::UNIX_EPOCH),
            Err(_) => {
                tracing::warn!(
                    name = %self.name,
                    expires_at = self.expires_at,
                    "expiry out of range, sending as session cookie"
                );
                None
            }
        }
    }

    /// Convert into a `cookie` crate cookie carrying every attribute.
    pub fn to_cookie(&self) -> Cookie<'static> {
        let mut builder = Cookie::build((self.name.clone(), self.value.clone()))
            .path(self.path.clone())
            .secure(self.secure)
            .http_only(self.http_only)
            .same_site(self.same_site.into());

        if let Some(domain) = &self.domain {
            builder = builder.domain(domain.clone());
        }
        if let Some(expires) = self.expiration_time() {
            builder = builder.expires(expires);
        }

        builder.build()
    }

    /// Render the `Set-Cookie` header value, percent-encoding name and value.
    pub fn to_header_value(&self) -> Result<HeaderValue, NetError> {
        let rendered = self.to_cookie().encoded().to_string();
        Ok(HeaderValue::from_str(&rendered)?)
    }
}
