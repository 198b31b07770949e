//! Request-scoped cookie management.
//!
//! A [`CookieManager`](manager::CookieManager) sits between two collaborators:
//!
//! - **Inbound**: the [`CookieJar`](jar::CookieJar) the client sent with the
//!   current request. Reads (`get`, `has`, `count`, iteration) only see this
//!   snapshot.
//! - **Outbound**: a [`CookieSink`](sink::CookieSink) that receives structured
//!   [`SetCookie`](instruction::SetCookie) instructions and turns them into
//!   `Set-Cookie` response headers. Writes (`set`, `delete`, `clear`) only
//!   talk to the sink.
//!
//! Every write carries the manager's shared
//! [`CookieAttributes`](attributes::CookieAttributes): expiry, path, domain,
//! secure, http-only, and SameSite.
//!
//! # Architecture
//!
//! | Type | Responsibility |
//! |------|----------------|
//! | [`CookieManagerFactory`](factory::CookieManagerFactory) | Application defaults, one manager per request |
//! | [`CookieManager`](manager::CookieManager) | Read/write/delete/enumerate for one request |
//! | [`CookieOptions`](options::CookieOptions) | Partial attribute overrides, JSON-loadable |
//! | [`RequestContext`](request::RequestContext) | Remote IP and default-domain source |
//! | [`ResponseCookies`](sink::ResponseCookies) | Recording sink, header rendering |
//!
//! # Example
//!
//! ```rust
//! use cookiekit::cookies::factory::CookieManagerFactory;
//! use cookiekit::cookies::options::CookieOptions;
//! use cookiekit::cookies::sink::ResponseCookies;
//! use serde_json::json;
//!
//! let factory = CookieManagerFactory::new(CookieOptions::new().http_only(true));
//! let request = http::Request::builder()
//!     .uri("/")
//!     .header("host", "example.com")
//!     .header("cookie", "theme=dark")
//!     .body(())?;
//!
//! let mut cookies = factory.for_request(&request, None, ResponseCookies::new());
//! assert_eq!(cookies.get("theme").unwrap(), "dark");
//!
//! cookies.set("cart", &json!({"items": 3}))?.delete("theme");
//!
//! let mut headers = http::HeaderMap::new();
//! cookies.sink().write_headers(&mut headers)?;
//! assert_eq!(headers.get_all("set-cookie").iter().count(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod attributes;
pub mod factory;
pub mod instruction;
pub mod jar;
pub mod manager;
pub mod options;
pub mod request;
pub mod samesite;
pub mod sink;
pub mod value;
