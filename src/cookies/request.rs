//! Request context - the per-request facts a cookie manager needs.
//!
//! Holds the originating client address and the names used to derive the
//! default cookie domain. Built explicitly, or from an [`http::Request`].

use std::net::IpAddr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Address of the client that sent the request.
    pub remote_ip: Option<IpAddr>,

    /// Configured server name for the virtual host.
    pub server_name: Option<String>,

    /// Value of the `Host` request header.
    pub host: Option<String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remote_ip(mut self, ip: IpAddr) -> Self {
        self.remote_ip = Some(ip);
        self
    }

    pub fn with_server_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = Some(name.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Build a context from an inbound request.
    ///
    /// The server name comes from the request URI's authority (absolute-form
    /// targets and HTTP/2 `:authority`), the host from the `Host` header.
    pub fn from_request<B>(request: &http::Request<B>, remote_ip: Option<IpAddr>) -> Self {
        let server_name = request.uri().host().map(|h| h.to_string());
        let host = request
            .headers()
            .get(http::header::HOST)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        Self {
            remote_ip,
            server_name,
            host,
        }
    }

    /// The default cookie domain: the server name, falling back to the
    /// `Host` header with any port removed.
    pub fn default_domain(&self) -> Option<String> {
        if let Some(name) = self.server_name.as_deref().filter(|n| !n.is_empty()) {
            return Some(name.to_string());
        }

        self.host
            .as_deref()
            .map(strip_port)
            .filter(|h| !h.is_empty())
            .map(|h| h.to_string())
    }
}

/// Remove a trailing `:port` from a host, keeping bracketed IPv6 literals intact.
fn strip_port(host: &str) -> &str {
    let host = host.trim();
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        };
    }

    match host.rsplit_once(':') {
        Some((name, port)) if !name.contains(':') && port.bytes().all(|b| b.is_ascii_digit()) => {
            name
        }
        _ => host,
    }
}
