//! Infrastructure Layer
//!
//! Remote identity provider over the platform HTTP client.

pub mod http;

pub use http::HttpIdentityProvider;
