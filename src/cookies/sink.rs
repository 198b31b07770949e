//! Outbound side of the cookie manager.
//!
//! A [`CookieSink`] receives [`SetCookie`] instructions and owns turning
//! them into `Set-Cookie` response headers. Two sinks ship with the crate:
//!
//! - [`ResponseCookies`]: records instructions in order; renders them into a
//!   header map later and can mirror them into the next request's jar.
//! - [`http::HeaderMap`]: appends a `Set-Cookie` header immediately.

use crate::base::neterror::NetError;
use crate::cookies::instruction::SetCookie;
use crate::cookies::jar::CookieJar;
use http::HeaderMap;
use time::OffsetDateTime;

pub trait CookieSink {
    fn set_cookie(&mut self, instruction: SetCookie);
}

impl<S: CookieSink + ?Sized> CookieSink for &mut S {
    fn set_cookie(&mut self, instruction: SetCookie) {
        (**self).set_cookie(instruction);
    }
}

impl CookieSink for Vec<SetCookie> {
    fn set_cookie(&mut self, instruction: SetCookie) {
        self.push(instruction);
    }
}

impl CookieSink for HeaderMap {
    fn set_cookie(&mut self, instruction: SetCookie) {
        match instruction.to_header_value() {
            Ok(value) => {
                self.append(http::header::SET_COOKIE, value);
            }
            Err(e) => {
                tracing::warn!(name = %instruction.name, error = %e, "dropping unrenderable Set-Cookie");
            }
        }
    }
}

/// Recording sink: keeps every instruction in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseCookies {
    instructions: Vec<SetCookie>,
}

impl ResponseCookies {
    pub fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    pub fn instructions(&self) -> &[SetCookie] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Most recent instruction for `name`.
    pub fn last_for(&self, name: &str) -> Option<&SetCookie> {
        self.instructions.iter().rev().find(|i| i.name == name)
    }

    pub fn take(&mut self) -> Vec<SetCookie> {
        std::mem::take(&mut self.instructions)
    }

    /// Append one `Set-Cookie` header per recorded instruction.
    pub fn write_headers(&self, headers: &mut HeaderMap) -> Result<(), NetError> {
        for instruction in &self.instructions {
            headers.append(http::header::SET_COOKIE, instruction.to_header_value()?);
        }
        Ok(())
    }

    /// Apply the recorded instructions to `jar` the way a client would
    /// before its next request: removals drop the name, everything else
    /// inserts or overwrites it.
    pub fn apply_to(&self, jar: &mut CookieJar) {
        let now = OffsetDateTime::now_utc();
        for instruction in &self.instructions {
            if instruction.is_removal(now) {
                jar.remove(&instruction.name);
            } else {
                jar.insert(instruction.name.clone(), instruction.value.clone());
            }
        }
    }
}

impl CookieSink for ResponseCookies {
    fn set_cookie(&mut self, instruction: SetCookie) {
        self.instructions.push(instruction);
    }
}
