//! Main Solcast API client
use std::time::Duration;

use crate::endpoint::{BASE_URL, Endpoint};
use crate::error::Result;
use crate::params::Params;
use crate::request::Request;
use crate::response::SolcastResponse;

/// Timeout applied to requests unless overridden
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The main Solcast API client.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(feature = "reqwest")]
#[derive(Clone)]
pub struct Solcast<Client: Request = reqwest::Client> {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

/// The main Solcast API client.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
#[derive(Clone)]
pub struct Solcast<Client: Request = crate::request::HyperClient> {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

/// The main Solcast API client.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
#[derive(Clone)]
pub struct Solcast<Client: Request> {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

// Implementation for any Client that implements Request
impl<Client: Request> Solcast<Client> {
    /// Create a new Solcast client using the default HTTP client.
    ///
    /// This method is only available when the `dotenvy` feature is enabled.
    /// It loads the API key from `SOLCAST_API_KEY` and, if present, the base URL from
    /// `SOLCAST_BASE_URL`, reading a `.env` file first when there is one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`](crate::Error::MissingApiKey) if the key is not set.
    #[cfg(feature = "dotenvy")]
    pub fn new() -> Result<Self> {
        dotenvy::dotenv().ok(); // a missing .env file is fine

        let api_key = std::env::var("SOLCAST_API_KEY").map_err(|_| crate::Error::MissingApiKey)?;
        let base_url = std::env::var("SOLCAST_BASE_URL").unwrap_or_else(|_| BASE_URL.to_string());

        Ok(Self {
            client: Client::new(),
            base_url,
            api_key: Some(api_key),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    #[cfg(not(feature = "dotenvy"))]
    /// Create a new Solcast client with the default HTTP client.
    ///
    /// Set the API key with [`with_key`](Self::with_key) unless your transport authenticates
    /// on its own.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a client around an existing HTTP client, with default settings.
    pub fn from_client(client: Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the HTTP client for this instance.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set the API key for this instance.
    ///
    /// The key is sent as the `api_key` query parameter.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use solcast::Solcast;
    ///
    /// let client = Solcast::default().with_key("my_api_key");
    /// ```
    pub fn with_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the client at another host, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the default request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the API key for this instance.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Default request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get a reference to the underlying HTTP client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Perform one GET against `endpoint` and wrap whatever the API answers.
    ///
    /// `format=json` is always sent, replacing any `format` in `params`. The API key is added
    /// unless `params` already carries an `api_key`. Error statuses are returned as a failed
    /// [`SolcastResponse`]; only transport failures and timeouts are `Err`.
    pub async fn request(
        &self,
        endpoint: &Endpoint,
        mut params: Params,
        timeout: Option<Duration>,
    ) -> Result<SolcastResponse> {
        params.insert("format", "json");
        if let Some(key) = &self.api_key {
            if !params.contains_key("api_key") {
                params.insert("api_key", key.as_str());
            }
        }

        let url = endpoint.url(&params.to_query()?);
        let timeout = timeout.unwrap_or(self.timeout);
        log::debug!("GET {}{} ({} params)", endpoint.base_url(), endpoint.path(), params.len());

        let raw = self.client.get(&url, timeout).await?;
        let response = SolcastResponse::new(url, raw);
        if let Some(exception) = response.exception() {
            log::warn!("{} answered HTTP {}: {}", endpoint.path(), response.code(), exception);
        }
        Ok(response)
    }
}

impl<Client: Request + std::fmt::Debug> std::fmt::Debug for Solcast<Client> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solcast")
            .field("client", &self.client)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

// Default implementation for reqwest
#[cfg(feature = "reqwest")]
impl Default for Solcast<reqwest::Client> {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// Default implementation for hyper
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
impl Default for Solcast<crate::request::HyperClient> {
    fn default() -> Self {
        Self {
            client: <crate::request::HyperClient as Request>::new(),
            base_url: BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// Default implementation when no HTTP client feature is enabled
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
impl<Client: Request> Default for Solcast<Client> {
    /// Create a default Solcast client with no API key set.
    fn default() -> Self {
        Self {
            client: Client::new(),
            base_url: BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
