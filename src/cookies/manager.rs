use crate::base::context::JsonResultExt;
use crate::base::neterror::NetError;
use crate::cookies::attributes::CookieAttributes;
use crate::cookies::instruction::SetCookie;
use crate::cookies::jar::CookieJar;
use crate::cookies::options::CookieOptions;
use crate::cookies::request::RequestContext;
use crate::cookies::samesite::SameSite;
use crate::cookies::sink::CookieSink;
use crate::cookies::value::{encode_value, CookieValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::net::IpAddr;
use time::OffsetDateTime;

/// How far in the past a deletion pushes a cookie's expiry.
const DELETE_BACKDATE_SECS: i64 = 3600;

/// Per-request cookie manager.
///
/// Reads come from the inbound [`CookieJar`] snapshot; writes go to the
/// outbound [`CookieSink`] only. A `set` or `delete` is therefore not
/// visible to `get`/`has` on the same manager: it takes effect on the
/// client's next request.
pub struct CookieManager<S: CookieSink> {
    attributes: CookieAttributes,
    request: RequestContext,
    jar: CookieJar,
    sink: S,
}

impl<S: CookieSink> CookieManager<S> {
    pub fn new(request: RequestContext, jar: CookieJar, sink: S) -> Self {
        Self::with_options(request, jar, sink, &CookieOptions::default())
    }

    pub fn with_options(
        request: RequestContext,
        jar: CookieJar,
        sink: S,
        options: &CookieOptions,
    ) -> Self {
        let mut manager = Self {
            attributes: CookieAttributes::default(),
            request,
            jar,
            sink,
        };
        manager.set_options(options);
        manager
    }

    /// Merge `options` into the defaults used by every later write.
    ///
    /// Also re-reads the remote IP and default domain from the request
    /// context, so a domain set by an earlier call is replaced unless
    /// `options` names one again.
    pub fn set_options(&mut self, options: &CookieOptions) -> &mut Self {
        self.attributes.apply(options, &self.request);
        self
    }

    /// Write a cookie with the current default attributes.
    pub fn set<T: Serialize + ?Sized>(
        &mut self,
        name: &str,
        value: &T,
    ) -> Result<&mut Self, NetError> {
        let attrs = self.attributes.clone();
        self.emit(name, value, &attrs)
    }

    /// Write a cookie with `options` laid over the defaults for this call only.
    pub fn set_with<T: Serialize + ?Sized>(
        &mut self,
        name: &str,
        value: &T,
        options: &CookieOptions,
    ) -> Result<&mut Self, NetError> {
        let attrs = self.attributes.merged(options);
        self.emit(name, value, &attrs)
    }

    fn emit<T: Serialize + ?Sized>(
        &mut self,
        name: &str,
        value: &T,
        attrs: &CookieAttributes,
    ) -> Result<&mut Self, NetError> {
        let encoded = encode_value(name, value)?;
        tracing::debug!(
            name = %name,
            expires_at = attrs.expires_at,
            path = %attrs.path,
            "set cookie"
        );
        self.sink
            .set_cookie(SetCookie::new(name.to_string(), encoded, attrs));
        Ok(self)
    }

    /// Read a cookie from the inbound jar.
    pub fn get(&self, name: &str) -> Option<CookieValue> {
        self.jar.get(name).map(|raw| CookieValue::decode(name, raw))
    }

    /// The undecoded inbound value.
    pub fn get_raw(&self, name: &str) -> Option<&str> {
        self.jar.get(name)
    }

    /// Deserialize a cookie's raw text as JSON into `T`.
    pub fn get_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, NetError> {
        match self.jar.get(name) {
            Some(raw) => serde_json::from_str(raw).decode_context(name).map(Some),
            None => Ok(None),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.jar.contains(name)
    }

    /// Tell the client to drop `name`. Does nothing when the inbound jar
    /// has no such cookie.
    pub fn delete(&mut self, name: &str) -> &mut Self {
        let attrs = self.attributes.clone();
        self.expire(name, &attrs);
        self
    }

    /// Like [`delete`](Self::delete) with `options` applied to this call only.
    pub fn delete_with(&mut self, name: &str, options: &CookieOptions) -> &mut Self {
        let attrs = self.attributes.merged(options);
        self.expire(name, &attrs);
        self
    }

    /// Delete every inbound cookie, in jar order.
    pub fn clear(&mut self) -> &mut Self {
        let attrs = self.attributes.clone();
        self.expire_all(&attrs);
        self
    }

    pub fn clear_with(&mut self, options: &CookieOptions) -> &mut Self {
        let attrs = self.attributes.merged(options);
        self.expire_all(&attrs);
        self
    }

    fn expire_all(&mut self, attrs: &CookieAttributes) {
        let names: Vec<String> = self.jar.names().map(|n| n.to_string()).collect();
        for name in &names {
            self.expire(name, attrs);
        }
    }

    fn expire(&mut self, name: &str, attrs: &CookieAttributes) {
        let Some(value) = self.jar.get(name) else {
            return;
        };
        let mut attrs = attrs.clone();
        attrs.expires_at = OffsetDateTime::now_utc().unix_timestamp() - DELETE_BACKDATE_SECS;
        tracing::debug!(name = %name, "expire cookie");
        self.sink
            .set_cookie(SetCookie::new(name.to_string(), value.to_string(), &attrs));
    }

    pub fn count(&self) -> usize {
        self.jar.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jar.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.jar.iter()
    }

    /// An owned snapshot of the inbound jar.
    pub fn to_vec(&self) -> Vec<(String, String)> {
        self.jar
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    pub fn attributes(&self) -> &CookieAttributes {
        &self.attributes
    }

    pub fn expires_at(&self) -> i64 {
        self.attributes.expires_at
    }

    pub fn path(&self) -> &str {
        &self.attributes.path
    }

    pub fn domain(&self) -> Option<&str> {
        self.attributes.domain.as_deref()
    }

    pub fn is_secure(&self) -> bool {
        self.attributes.secure
    }

    pub fn is_http_only(&self) -> bool {
        self.attributes.http_only
    }

    pub fn same_site(&self) -> SameSite {
        self.attributes.same_site
    }

    pub fn ip(&self) -> Option<IpAddr> {
        self.attributes.remote_ip
    }

    pub fn request(&self) -> &RequestContext {
        &self.request
    }

    pub fn jar(&self) -> &CookieJar {
        &self.jar
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Hand back the inbound jar and the sink once the request is done.
    pub fn into_parts(self) -> (CookieJar, S) {
        (self.jar, self.sink)
    }
}

impl<'a, S: CookieSink> IntoIterator for &'a CookieManager<S> {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.jar.iter())
    }
}

impl<S: CookieSink> std::fmt::Debug for CookieManager<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookieManager")
            .field("attributes", &self.attributes)
            .field("request", &self.request)
            .field("cookie_count", &self.jar.len())
            .finish()
    }
}
