//! HTTP request trait and request parameter types

use crate::error::Result;
use crate::response::Response;

use std::future::Future;
use std::time::Duration;

pub mod common;
/// Request builder shared by all data endpoints
pub mod data;

/// Trait for HTTP clients that can make requests to the Solcast API.
///
/// Implement this trait to use custom HTTP clients with the Solcast client.
pub trait Request: Send + Sync {
    /// Associated response type
    type Response: Response;

    /// Create a new instance of the HTTP client
    fn new() -> Self
    where
        Self: Sized;

    /// Make an HTTP GET request to the given URL.
    ///
    /// Any status code the server answers with is a successful call; only failing to get an
    /// answer (connection, DNS, invalid URL, timeout) is an error.
    fn get(&self, url: &str, timeout: Duration) -> impl Future<Output = Result<Self::Response>> + Send;
}

/// HTTP response implementation
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: u16,
    body: String,
}

impl HttpResponse {
    /// Create a response from a status code and body
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl Response for HttpResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(feature = "reqwest")]
impl Request for reqwest::Client {
    type Response = HttpResponse;

    fn new() -> Self {
        reqwest::Client::new()
    }

    async fn get(&self, url: &str, timeout: Duration) -> Result<Self::Response> {
        let on_error = |e: reqwest::Error| {
            if e.is_timeout() {
                crate::error::Error::Timeout(timeout)
            } else {
                e.into()
            }
        };

        let response = self.get(url).timeout(timeout).send().await.map_err(on_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(on_error)?;
        Ok(HttpResponse { status, body })
    }
}

#[cfg(feature = "hyper")]
/// Hyper client wrapper
#[derive(Clone)]
pub struct HyperClient {
    client: std::sync::Arc<
        hyper_util::client::legacy::Client<
            hyper_tls::HttpsConnector<hyper_util::client::legacy::connect::HttpConnector>,
            http_body_util::Full<hyper::body::Bytes>,
        >,
    >,
}

#[cfg(feature = "hyper")]
impl std::fmt::Debug for HyperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClient").finish_non_exhaustive()
    }
}

#[cfg(feature = "hyper")]
impl HyperClient {
    async fn fetch(&self, uri: hyper::Uri) -> Result<HttpResponse> {
        use http_body_util::BodyExt;

        let response = self
            .client
            .get(uri)
            .await
            .map_err(|e| crate::error::Error::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status().as_u16();

        let body_bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| crate::error::Error::Transport(format!("Failed to read response body: {e}")))?
            .to_bytes();

        // Invalid UTF-8 is kept lossily; the body then fails JSON decoding on the response.
        let body = String::from_utf8_lossy(&body_bytes).into_owned();

        Ok(HttpResponse { status, body })
    }
}

#[cfg(feature = "hyper")]
impl Request for HyperClient {
    type Response = HttpResponse;

    fn new() -> Self {
        let https = hyper_tls::HttpsConnector::new();
        let client = hyper_util::client::legacy::Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);
        Self {
            client: std::sync::Arc::new(client),
        }
    }

    async fn get(&self, url: &str, timeout: Duration) -> Result<Self::Response> {
        let uri: hyper::Uri = url
            .parse()
            .map_err(|e| crate::error::Error::Transport(format!("Invalid URL: {e}")))?;

        tokio::time::timeout(timeout, self.fetch(uri))
            .await
            .map_err(|_| crate::error::Error::Timeout(timeout))?
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording transport for unit tests.
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Answers every GET with a fixed response and records the requested URLs.
    #[derive(Debug, Clone)]
    pub(crate) struct MockClient {
        pub(crate) calls: Arc<Mutex<Vec<String>>>,
        status: u16,
        body: String,
    }

    impl MockClient {
        pub(crate) fn answering(status: u16, body: impl Into<String>) -> Self {
            Self {
                calls: Arc::default(),
                status,
                body: body.into(),
            }
        }

        pub(crate) fn urls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Request for MockClient {
        type Response = HttpResponse;

        fn new() -> Self {
            Self::answering(200, "{}")
        }

        async fn get(&self, url: &str, _timeout: Duration) -> Result<Self::Response> {
            self.calls.lock().unwrap().push(url.to_owned());
            Ok(HttpResponse::new(self.status, self.body.clone()))
        }
    }
}
