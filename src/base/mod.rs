//! Base types and error handling.
//!
//! - [`NetError`](neterror::NetError): Error codes for cookie encoding, headers, and configuration
//! - [`context`]: Result extensions that attach cookie names and config paths to errors

pub mod context;
pub mod neterror;
