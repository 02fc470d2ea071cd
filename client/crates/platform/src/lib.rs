//! Platform Crate - Technical Infrastructure
//!
//! This crate provides the transport foundations the session gate talks
//! through:
//! - HTTP client bound to the API base URL, with a shared cookie jar
//! - Cookie parsing and CSRF token lookup
//! - Transport configuration

pub mod api_client;
pub mod config;
pub mod cookie;
