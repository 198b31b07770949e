use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum NetError {
    // Cookie value errors
    #[error("Cookie '{name}' could not be encoded: {message}")]
    CookieEncodeFailed { name: String, message: String },
    #[error("Cookie '{name}' could not be decoded: {message}")]
    CookieDecodeFailed { name: String, message: String },
    #[error("Invalid SameSite value")]
    InvalidSameSite,

    // Header errors
    #[error("Invalid header")]
    InvalidHeader,

    // Configuration errors
    #[error("Invalid cookie configuration: {message}")]
    CookieConfigInvalid { message: String },
    #[error("Cookie configuration at {path} could not be read: {message}")]
    CookieConfigIo { path: String, message: String },
}

impl NetError {
    /// Create an encode error for the named cookie.
    pub fn cookie_encode_failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        NetError::CookieEncodeFailed {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a decode error for the named cookie.
    pub fn cookie_decode_failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        NetError::CookieDecodeFailed {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn cookie_config_invalid(message: impl Into<String>) -> Self {
        NetError::CookieConfigInvalid {
            message: message.into(),
        }
    }
}

impl From<http::header::InvalidHeaderValue> for NetError {
    fn from(_: http::header::InvalidHeaderValue) -> Self {
        NetError::InvalidHeader
    }
}
