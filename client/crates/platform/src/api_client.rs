//! API Client
//!
//! Thin wrapper around `reqwest::Client` bound to the API origin.
//!
//! - Every request goes through a shared cookie jar, so the session cookie
//!   set by the server is forwarded automatically.
//! - When the jar holds an anti-forgery cookie, its value is echoed in the
//!   configured CSRF header on every request.
//! - Non-2xx responses surface as [`TransportError::Status`].

use std::sync::Arc;

use kernel::error::{app_error::AppError, kind::ErrorKind};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{ACCEPT, HeaderName, HeaderValue};
use reqwest::{Method, Request, Response, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::TransportConfig;
use crate::cookie::extract_cookie;

pub use reqwest::StatusCode;

/// Transport result type alias
pub type TransportResult<T> = Result<T, TransportError>;

/// Transport-level errors
#[derive(Debug, Error)]
pub enum TransportError {
    /// Base URL or path could not be turned into a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configured header name or value is not valid HTTP
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Connection, TLS or timeout failure
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    Status(StatusCode),

    /// Response body was not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransportError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransportError::InvalidUrl(_) | TransportError::InvalidHeader(_) => {
                ErrorKind::BadRequest
            }
            TransportError::Request(e) if e.is_timeout() => ErrorKind::GatewayTimeout,
            TransportError::Request(e) if e.is_connect() => ErrorKind::ServiceUnavailable,
            TransportError::Request(_) => ErrorKind::BadGateway,
            TransportError::Status(status) => ErrorKind::from(*status),
            TransportError::Decode(_) => ErrorKind::BadGateway,
        }
    }

    /// Whether the server rejected the credentials (401/403)
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, TransportError::Status(_)) && self.kind().is_auth_rejection()
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }
}

/// HTTP client for the remote API
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    jar: Arc<Jar>,
    base_url: Url,
    csrf_header: HeaderName,
    config: Arc<TransportConfig>,
}

impl ApiClient {
    /// Build a client from configuration
    pub fn new(config: TransportConfig) -> TransportResult<Self> {
        let mut base_url = Url::parse(&config.base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::InvalidUrl(config.base_url.clone()));
        }
        // Trailing slash makes the base path a directory for relative joins
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let csrf_header = HeaderName::from_bytes(config.csrf_header_name.as_bytes())
            .map_err(|_| TransportError::InvalidHeader(config.csrf_header_name.clone()))?;

        let jar = Arc::new(Jar::default());
        let client = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            jar,
            base_url,
            csrf_header,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a path under the base URL
    ///
    /// Leading slashes are ignored, so a base path prefix is kept:
    /// `http://host/backend` + `/api/auth/user/` is
    /// `http://host/backend/api/auth/user/`.
    pub fn url(&self, path: &str) -> TransportResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| TransportError::InvalidUrl(format!("{path}: {e}")))
    }

    /// Store a `name=value` cookie for the API origin
    pub fn add_cookie_str(&self, cookie: &str) {
        self.jar.add_cookie_str(cookie, &self.base_url);
    }

    /// Current anti-forgery token, if the jar holds one
    pub fn csrf_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.base_url)?;
        extract_cookie(&header, &self.config.csrf_cookie_name)
    }

    /// Build a request with JSON accept and CSRF headers applied
    pub fn build_request(&self, method: Method, path: &str) -> TransportResult<Request> {
        let url = self.url(path)?;
        let mut builder = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json");

        if let Some(token) = self.csrf_token() {
            let value = HeaderValue::from_str(&token)
                .map_err(|_| TransportError::InvalidHeader(self.config.csrf_header_name.clone()))?;
            builder = builder.header(self.csrf_header.clone(), value);
        }

        Ok(builder.build()?)
    }

    /// Send a request and fail on non-success status
    pub async fn send(&self, method: Method, path: &str) -> TransportResult<Response> {
        let request = self.build_request(method, path)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "Sending API request");

        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = %status, "API request rejected");
            return Err(TransportError::Status(status));
        }

        Ok(response)
    }

    /// GET a path and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> TransportResult<T> {
        let response = self.send(Method::GET, path).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(TransportConfig::with_base_url("https://api.example.com")).unwrap()
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ApiClient::new(TransportConfig::with_base_url("not a url"));
        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }

    #[test]
    fn test_invalid_csrf_header_name() {
        let config = TransportConfig {
            csrf_header_name: "bad header".to_string(),
            ..TransportConfig::default()
        };
        let result = ApiClient::new(config);
        assert!(matches!(result, Err(TransportError::InvalidHeader(_))));
    }

    #[test]
    fn test_url_joins_base() {
        let url = client().url("/api/auth/user/").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/auth/user/");
    }

    #[test]
    fn test_url_keeps_base_path_prefix() {
        for base in ["http://host/backend", "http://host/backend/"] {
            let client = ApiClient::new(TransportConfig::with_base_url(base)).unwrap();
            assert_eq!(client.base_url().as_str(), "http://host/backend/");
            assert_eq!(
                client.url("/api/auth/user/").unwrap().as_str(),
                "http://host/backend/api/auth/user/"
            );
            assert_eq!(
                client.url("api/auth/user/").unwrap().as_str(),
                "http://host/backend/api/auth/user/"
            );
        }
    }

    #[test]
    fn test_csrf_token_from_jar() {
        let client = client();
        assert_eq!(client.csrf_token(), None);

        client.add_cookie_str("csrftoken=tok123");
        assert_eq!(client.csrf_token(), Some("tok123".to_string()));
    }

    #[test]
    fn test_build_request_injects_csrf_header() {
        let client = client();
        client.add_cookie_str("csrftoken=tok123");

        let request = client.build_request(Method::POST, "/api/auth/logout/").unwrap();
        assert_eq!(
            request.headers().get("x-csrftoken").unwrap(),
            &HeaderValue::from_static("tok123")
        );
        assert_eq!(
            request.headers().get(ACCEPT).unwrap(),
            &HeaderValue::from_static("application/json")
        );
    }

    #[test]
    fn test_build_request_without_csrf_cookie() {
        let request = client().build_request(Method::GET, "/api/auth/user/").unwrap();
        assert!(request.headers().get("x-csrftoken").is_none());
    }

    #[test]
    fn test_status_error_kinds() {
        let err = TransportError::Status(StatusCode::UNAUTHORIZED);
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert!(err.is_auth_rejection());

        let err = TransportError::Status(StatusCode::FORBIDDEN);
        assert!(err.is_auth_rejection());

        let err = TransportError::Status(StatusCode::BAD_GATEWAY);
        assert_eq!(err.kind(), ErrorKind::BadGateway);
        assert!(!err.is_auth_rejection());
    }

    #[test]
    fn test_decode_error_kind() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = TransportError::from(json_err);
        assert_eq!(err.kind(), ErrorKind::BadGateway);
        assert_eq!(err.to_app_error().status_code(), 502);
    }

    #[tokio::test]
    async fn test_send_connection_refused() {
        // Nothing listens on port 9 (discard) locally
        let client = ApiClient::new(TransportConfig::with_base_url("http://127.0.0.1:9")).unwrap();
        let err = client.send(Method::GET, "/").await.unwrap_err();
        assert!(matches!(err, TransportError::Request(_)));
        assert!(!err.is_auth_rejection());
    }
}
