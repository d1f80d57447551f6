//! The API client.

use parking_lot::RwLock;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use crate::config::{build_client, ClientConfig};
use crate::error::{ApiError, Result};
use crate::request::{headers, join_url, JsonBody};
use crate::response::decode_into;
use crate::status::Status;

/// JSON client bound to one base URL.
///
/// Every call sends `Authorization: <credential>` (empty until set) and
/// `Content-Type: application/json`. Success bodies are decoded into the
/// caller's target; 4xx and 5xx bodies are dropped unread.
///
/// The client is `Send + Sync`. Share it by reference or `Arc`; the
/// credential can be replaced while calls are in flight, each request reads
/// it once when it is built.
pub struct ApiClient {
    inner: Client,
    base_url: String,
    authorization: RwLock<String>,
}

impl ApiClient {
    /// Create a client with the default 10 second timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a client with custom transport settings.
    pub fn with_config(base_url: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let inner = build_client(&config)?;
        Ok(Self::from_reqwest(base_url, inner))
    }

    /// Wrap an existing reqwest client. Its timeout settings are used as is.
    pub fn from_reqwest(base_url: impl Into<String>, inner: Client) -> Self {
        Self {
            inner,
            base_url: base_url.into(),
            authorization: RwLock::new(String::new()),
        }
    }

    /// Get the inner reqwest client.
    pub fn inner(&self) -> &Client {
        &self.inner
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current `Authorization` header value.
    pub fn authorization(&self) -> String {
        self.authorization.read().clone()
    }

    /// Replace the `Authorization` header value. Sent verbatim, so bearer
    /// tokens need their scheme, see [`bearer`](crate::bearer).
    pub fn set_authorization(&self, credential: impl Into<String>) {
        *self.authorization.write() = credential.into();
    }

    /// GET `path` and decode the body into `target`.
    pub async fn get<T>(&self, path: &str, target: Option<&mut T>) -> Result<Status>
    where
        T: DeserializeOwned,
    {
        self.request(Method::GET, path, None, target).await
    }

    /// Same as [`get`](Self::get).
    ///
    /// This sends a GET, not a HEAD. Existing callers rely on receiving a
    /// body here, so the method is kept as is.
    pub async fn head<T>(&self, path: &str, target: Option<&mut T>) -> Result<Status>
    where
        T: DeserializeOwned,
    {
        self.request(Method::GET, path, None, target).await
    }

    /// POST `body` as JSON.
    pub async fn post<B, T>(&self, path: &str, body: &B, target: Option<&mut T>) -> Result<Status>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.push(Method::POST, path, body, target).await
    }

    /// PUT `body` as JSON.
    pub async fn put<B, T>(&self, path: &str, body: &B, target: Option<&mut T>) -> Result<Status>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.push(Method::PUT, path, body, target).await
    }

    /// PATCH `body` as JSON.
    pub async fn patch<B, T>(&self, path: &str, body: &B, target: Option<&mut T>) -> Result<Status>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.push(Method::PATCH, path, body, target).await
    }

    async fn push<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        target: Option<&mut T>,
    ) -> Result<Status>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = JsonBody(body).to_bytes()?;
        self.request(method, path, Some(bytes), target).await
    }

    async fn request<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        target: Option<&mut T>,
    ) -> Result<Status>
    where
        T: DeserializeOwned,
    {
        let url = join_url(&self.base_url, path);
        let parsed = Url::parse(&url).map_err(|source| ApiError::InvalidUrl { url, source })?;

        let credential = self.authorization();
        let mut builder = self
            .inner
            .request(method.clone(), parsed)
            .header(AUTHORIZATION, credential)
            .header(CONTENT_TYPE, headers::CONTENT_TYPE_JSON);
        if let Some(bytes) = body {
            builder = builder.body(bytes);
        }
        let request = builder.build().map_err(ApiError::Build)?;

        tracing::debug!("Making {} request to: {}", method, request.url());
        let response = self.inner.execute(request).await.map_err(ApiError::from)?;
        let status = Status::from(response.status());
        tracing::debug!("{} response: {} {}", method, status.code, response.url());

        if status.is_client_error() || status.is_server_error() {
            return Ok(status);
        }

        match target {
            Some(target) => {
                tracing::trace!("Decoding response body");
                decode_into(response, status, target).await
            }
            None => {
                tracing::trace!("No target, response body skipped");
                Ok(status)
            }
        }
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authorization", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new("https://api.example.com").unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.authorization(), "");
    }

    #[test]
    fn test_client_with_custom_config() {
        let config = ClientConfig::new().with_request_timeout(Duration::from_secs(2));
        let client = ApiClient::with_config("http://localhost", config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_from_reqwest() {
        let client = ApiClient::from_reqwest("http://localhost:1", Client::new());
        let _inner = client.inner();
        assert_eq!(client.base_url(), "http://localhost:1");
    }

    #[test]
    fn test_set_authorization() {
        let client = ApiClient::new("http://localhost").unwrap();
        client.set_authorization("Bearer abc");
        assert_eq!(client.authorization(), "Bearer abc");

        client.set_authorization(String::new());
        assert_eq!(client.authorization(), "");
    }

    #[test]
    fn test_debug_redacts_credential() {
        let client = ApiClient::new("http://localhost").unwrap();
        client.set_authorization("Bearer super-secret");

        let debug = format!("{:?}", client);
        assert!(debug.contains("http://localhost"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiClient>();
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let client = ApiClient::new("not a url").unwrap();
        let err = client.get::<()>("/x", None).await.unwrap_err();

        match err {
            ApiError::InvalidUrl { url, .. } => assert_eq!(url, "not a url/x"),
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_credential_is_build_error() {
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();
        client.set_authorization("line\nbreak");

        let err = client.get::<()>("/x", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Build(_)), "got {err:?}");
        assert!(err.status().is_none());
    }
}
