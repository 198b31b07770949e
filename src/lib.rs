//! # cookiekit
//!
//! A request-scoped HTTP cookie manager for Rust.
//!
//! `cookiekit` reads the cookies a client sent, and answers with structured
//! `Set-Cookie` instructions that all share one set of transport
//! attributes: expiry, path, domain, secure, http-only, and SameSite.
//!
//! ## Features
//!
//! - **Shared attributes**: Partial option merges; unrecognized SameSite values are ignored
//! - **JSON-aware values**: Non-scalar values are sent as compact JSON and decoded on read
//! - **Per-request managers**: A factory holds defaults, each request gets its own manager
//! - **Header plumbing**: Parse `Cookie` headers, render `Set-Cookie` via the `cookie` crate
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cookiekit::cookies::factory::CookieManagerFactory;
//! use cookiekit::cookies::options::CookieOptions;
//!
//! let factory = CookieManagerFactory::global(CookieOptions::new().secure(true));
//! let mut cookies = factory.for_request(&request, Some(peer.ip()), http::HeaderMap::new());
//! cookies.set("session", "abc123")?;
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error types and error context helpers
//! - [`cookies`] - Cookie manager, jar, options, and sinks

pub mod base;
pub mod cookies;
