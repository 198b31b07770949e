use crate::base::neterror::NetError;
use std::fmt;
use std::str::FromStr;

/// Cross-site transmission policy for a cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SameSite {
    None,
    #[default]
    Lax,
    Strict,
}

impl SameSite {
    /// Parse a policy name, ignoring ASCII case.
    /// Returns `None` for anything other than `None`, `Lax`, or `Strict`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("none") {
            Some(SameSite::None)
        } else if value.eq_ignore_ascii_case("lax") {
            Some(SameSite::Lax)
        } else if value.eq_ignore_ascii_case("strict") {
            Some(SameSite::Strict)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::None => "None",
            SameSite::Lax => "Lax",
            SameSite::Strict => "Strict",
        }
    }
}

impl FromStr for SameSite {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SameSite::parse(s).ok_or(NetError::InvalidSameSite)
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SameSite> for String {
    fn from(same_site: SameSite) -> Self {
        same_site.as_str().to_string()
    }
}

impl From<SameSite> for cookie::SameSite {
    fn from(same_site: SameSite) -> Self {
        match same_site {
            SameSite::None => cookie::SameSite::None,
            SameSite::Lax => cookie::SameSite::Lax,
            SameSite::Strict => cookie::SameSite::Strict,
        }
    }
}
