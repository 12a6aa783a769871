//! Remote operation descriptors
use crate::request::common::{Horizon, Product, data_path};

/// Default Solcast API host
pub const BASE_URL: &str = "https://api.solcast.com.au";

/// One remote operation: a base URL plus a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    base_url: String,
    path: String,
}

impl Endpoint {
    /// Create an endpoint from a base URL and a path
    pub fn new(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: path.into(),
        }
    }

    /// Data endpoint for `product` over `horizon` on `base_url`
    pub fn data(base_url: impl Into<String>, horizon: Horizon, product: Product) -> Self {
        Self::new(base_url, data_path(horizon, product))
    }

    /// Base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Path of the operation
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Full URL with the given encoded query string.
    pub fn url(&self, query: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let sep = if self.path.starts_with('/') || self.path.is_empty() { "" } else { "/" };
        if query.is_empty() {
            format!("{base}{sep}{}", self.path)
        } else {
            format!("{base}{sep}{}?{query}", self.path)
        }
    }
}

/// Replace the value of any `api_key` query parameter in `url` with `***`.
pub(crate) fn redact_api_key(url: &str) -> String {
    let Some((head, query)) = url.split_once('?') else {
        return url.to_owned();
    };
    let query = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some(("api_key", _)) => "api_key=***",
            _ => pair,
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("{head}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_slashes() {
        let endpoint = Endpoint::data(BASE_URL, Horizon::Live, Product::RooftopPvPower);
        assert_eq!(
            endpoint.url("format=json"),
            "https://api.solcast.com.au/data/live/rooftop_pv_power?format=json"
        );

        let endpoint = Endpoint::new("http://localhost:8080/", "data/forecast/soiling/hsu");
        assert_eq!(endpoint.url(""), "http://localhost:8080/data/forecast/soiling/hsu");
    }

    #[test]
    fn test_redact_api_key() {
        assert_eq!(
            redact_api_key("http://h/data/live/soiling/hsu?format=json&api_key=SECRET&x=1"),
            "http://h/data/live/soiling/hsu?format=json&api_key=***&x=1"
        );
        assert_eq!(redact_api_key("http://h/p?my_api_key=1"), "http://h/p?my_api_key=1");
        assert_eq!(redact_api_key("http://h/p"), "http://h/p");
    }
}
