//! Process-wide cookie defaults and per-request managers.
//!
//! The factory holds the default [`CookieOptions`] for an application and
//! stamps out one [`CookieManager`] per request, so attribute changes made
//! while handling one request never leak into another.

use crate::cookies::jar::CookieJar;
use crate::cookies::manager::CookieManager;
use crate::cookies::options::CookieOptions;
use crate::cookies::request::RequestContext;
use crate::cookies::sink::CookieSink;
use std::net::IpAddr;
use std::sync::OnceLock;

static GLOBAL: OnceLock<CookieManagerFactory> = OnceLock::new();

#[derive(Debug, Clone, Default)]
pub struct CookieManagerFactory {
    defaults: CookieOptions,
}

impl CookieManagerFactory {
    pub fn new(defaults: CookieOptions) -> Self {
        Self { defaults }
    }

    /// The process-wide factory.
    ///
    /// The first call initializes it with `defaults`; later calls return the
    /// same factory and ignore their argument.
    pub fn global(defaults: CookieOptions) -> &'static CookieManagerFactory {
        GLOBAL.get_or_init(|| {
            tracing::debug!(?defaults, "initializing global cookie defaults");
            CookieManagerFactory::new(defaults)
        })
    }

    pub fn defaults(&self) -> &CookieOptions {
        &self.defaults
    }

    /// A manager for one request, seeded with the factory defaults.
    pub fn manager<S: CookieSink>(
        &self,
        request: RequestContext,
        jar: CookieJar,
        sink: S,
    ) -> CookieManager<S> {
        CookieManager::with_options(request, jar, sink, &self.defaults)
    }

    /// A manager for an inbound `http::Request`: the jar comes from its
    /// `Cookie` headers, the context from its URI and `Host` header.
    pub fn for_request<B, S: CookieSink>(
        &self,
        request: &http::Request<B>,
        remote_ip: Option<IpAddr>,
        sink: S,
    ) -> CookieManager<S> {
        let ctx = RequestContext::from_request(request, remote_ip);
        let jar = CookieJar::from_headers(request.headers());
        self.manager(ctx, jar, sink)
    }
}
