//! Record access over a REST API, and the errors callers branch on.
//!
//! A lookup fails in one of two ways: the record does not exist
//! ([`RecordNotFound`]) or the service reports an explicit error
//! ([`RequestError`]). Both are variants of [`Error`].

mod client;
mod errors;
pub mod response;
pub mod types;
pub use self::client::{Client, DEFAULT_API_VERSION};
pub use self::errors::{ClientError, Error, RecordNotFound, RequestError, Result};
