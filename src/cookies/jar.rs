use cookie::Cookie;
use http::HeaderMap;

/// The inbound cookie snapshot for one request.
/// Names are unique and iteration follows the order the client sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    entries: Vec<(String, String)>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse a `Cookie` request header (`a=1; b=2`).
    /// Values are percent-decoded; unparseable pairs are skipped.
    pub fn from_header(header: &str) -> Self {
        let mut jar = Self::new();
        jar.extend_from_header(header);
        jar
    }

    /// Parse every `Cookie` header in a request's header map.
    ///
    /// Raw UTF-8 in a header is kept; invalid bytes become U+FFFD so the
    /// remaining pairs in that header still parse.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut jar = Self::new();
        for value in headers.get_all(http::header::COOKIE) {
            let header = String::from_utf8_lossy(value.as_bytes());
            jar.extend_from_header(&header);
        }
        jar
    }

    fn extend_from_header(&mut self, header: &str) {
        for parsed in Cookie::split_parse_encoded(header) {
            match parsed {
                Ok(c) => {
                    // Browsers send the most specific cookie first; keep it.
                    if !self.contains(c.name()) {
                        self.entries
                            .push((c.name().to_string(), c.value().to_string()));
                    }
                }
                Err(e) => tracing::debug!(error = %e, "skipping malformed cookie pair"),
            }
        }
    }

    /// Insert or overwrite a cookie. Existing names keep their position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some((_, v)) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            *v = value;
        } else {
            self.entries.push((name, value));
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for CookieJar {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut jar = Self::new();
        for (name, value) in iter {
            jar.insert(name, value);
        }
        jar
    }
}
