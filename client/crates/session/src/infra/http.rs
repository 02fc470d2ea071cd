//! HTTP Identity Provider
//!
//! Asks the API's "who am I" endpoint through the shared [`ApiClient`], so
//! the session cookie and CSRF header travel with the request.

use platform::api_client::ApiClient;

use crate::domain::provider::IdentityProvider;
use crate::domain::value_object::identity::Identity;
use crate::error::{VerificationError, VerificationResult};

/// Identity provider backed by the remote API
#[derive(Clone)]
pub struct HttpIdentityProvider {
    client: ApiClient,
    path: String,
}

impl HttpIdentityProvider {
    /// Use the identity path from the client's transport config
    pub fn new(client: ApiClient) -> Self {
        let path = client.config().identity_path.clone();
        Self { client, path }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl IdentityProvider for HttpIdentityProvider {
    async fn who_am_i(&self) -> VerificationResult<Identity> {
        self.client
            .get_json::<Identity>(&self.path)
            .await
            .map_err(VerificationError::from)
    }
}

#[cfg(test)]
mod tests {
    use platform::config::TransportConfig;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;
    use crate::domain::value_object::identity::IdentityId;

    /// Serve a single canned response, returning the raw request text
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&request).to_lowercase()
        });

        (base_url, handle)
    }

    fn provider(base_url: &str) -> HttpIdentityProvider {
        let client = ApiClient::new(TransportConfig::with_base_url(base_url)).unwrap();
        HttpIdentityProvider::new(client)
    }

    #[tokio::test]
    async fn test_success_decodes_identity() {
        let (base_url, server) =
            serve_once("200 OK", r#"{"id":1,"username":"alice","is_staff":false}"#).await;

        let identity = provider(&base_url).who_am_i().await.unwrap();

        assert_eq!(identity.id, IdentityId::Number(1));
        assert_eq!(identity.username.as_deref(), Some("alice"));
        assert_eq!(identity.extra.get("is_staff"), Some(&serde_json::Value::Bool(false)));

        let request = server.await.unwrap();
        assert!(request.starts_with("get /api/auth/user/ http/1.1"));
    }

    #[tokio::test]
    async fn test_unauthorized_status() {
        let (base_url, server) = serve_once("401 Unauthorized", r#"{"detail":"no session"}"#).await;

        let err = provider(&base_url).who_am_i().await.unwrap_err();

        assert_eq!(err, VerificationError::Unauthorized);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_forbidden_status() {
        let (base_url, server) = serve_once("403 Forbidden", "{}").await;

        let err = provider(&base_url).who_am_i().await.unwrap_err();

        assert_eq!(err, VerificationError::Unauthorized);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let (base_url, server) = serve_once("500 Internal Server Error", "{}").await;

        let err = provider(&base_url).who_am_i().await.unwrap_err();

        assert_eq!(err, VerificationError::UnexpectedStatus(500));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (base_url, server) = serve_once("200 OK", r#"{"username":"no id"}"#).await;

        let err = provider(&base_url).who_am_i().await.unwrap_err();

        assert!(matches!(err, VerificationError::InvalidPayload(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_forwards_session_cookie_and_csrf_header() {
        let (base_url, server) = serve_once("200 OK", r#"{"id":"u-1"}"#).await;
        let provider = provider(&base_url).with_path("/api/me/");
        provider.client().add_cookie_str("sessionid=abc");
        provider.client().add_cookie_str("csrftoken=tok123");

        let identity = provider.who_am_i().await.unwrap();
        assert_eq!(identity.id, IdentityId::from("u-1"));

        let request = server.await.unwrap();
        assert!(request.starts_with("get /api/me/ http/1.1"));
        assert!(request.contains("sessionid=abc"));
        assert!(request.contains("x-csrftoken: tok123"));
    }

    #[tokio::test]
    async fn test_unreachable_api_is_transport_error() {
        let err = provider("http://127.0.0.1:9").who_am_i().await.unwrap_err();
        assert!(matches!(err, VerificationError::Transport(_)));
    }
}
