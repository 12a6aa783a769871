//! Rust client library for the Solcast API
//!
//! # Quick Start
//!
//! ```no_run
//! use solcast::Solcast;
//! use solcast::rest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Solcast::default().with_key("your_api_key");
//!     let res = rest::live::radiation_and_weather(&client, -33.856784, 151.215297, ["ghi", "dni"])
//!         .get()
//!         .await?;
//!
//!     if res.success() {
//!         println!("{}", res.to_table()?);
//!     } else {
//!         println!("HTTP {}: {}", res.code(), res.exception().unwrap_or_default());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Endpoint API
//!
//! Each endpoint returns a [`DataRequest`](request::data::DataRequest) builder. Call `.get()`
//! to execute it:
//!
//! ```no_run
//! use solcast::Solcast;
//! use solcast::rest::historic;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Solcast::default().with_key("your_api_key");
//!
//! // Response wrapper
//! let res = historic::rooftop_pv_power(&client, -33.856784, 151.215297, "2022-10-25T14:45:00.00Z")
//!     .duration("P3D")
//!     .param("capacity", 5)
//!     .get()
//!     .await?;
//! let records = res.records()?;
//!
//! // Straight to a DataFrame
//! let df = historic::soiling_hsu(&client, -33.856784, 151.215297, "2022-10-25T14:45:00.00Z")
//!     .end("2022-10-27T14:45:00.00Z")
//!     .table()
//!     .get()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Whatever the API answers, including 4xx and 5xx statuses, comes back as a
//! [`SolcastResponse`]. Only transport failures, timeouts and invalid argument combinations
//! are returned as [`Error`].
//!
//! # Features
//!
//! - **`hyper`** (default) - Uses [`hyper`](https://docs.rs/hyper) as the HTTP client (lightweight and fast).
//!
//! - **`reqwest`** - Alternative HTTP client using [`reqwest`](https://docs.rs/reqwest) (more features).
//!   To use reqwest instead: `default-features = false, features = ["reqwest", "table"]`.
//!
//! - **`table`** (default) - Enables Polars DataFrame output via [`polars`](https://docs.rs/polars).
//!
//! - **`dotenvy`** - Enables loading the API key from environment variables via [`dotenvy`](https://docs.rs/dotenvy).
//!   Changes `Solcast::new()` to load `SOLCAST_API_KEY` (and optionally `SOLCAST_BASE_URL`)
//!   from `.env` or the environment.
//!   Without this feature, use `Solcast::default().with_key("your_key")` instead.

#![warn(missing_docs)]

pub mod client;
pub mod endpoint;
pub mod error;
pub mod params;
pub mod period;
pub mod request;
pub mod response;
pub mod rest;

pub mod execute;
pub mod processor;

pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use params::{ParamValue, Params};
pub use period::Period;
pub use request::Request;
pub use response::{Response, SolcastResponse};

/// The main Solcast API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::Solcast<YourClient>` directly
#[cfg(feature = "reqwest")]
pub type Solcast = client::Solcast<reqwest::Client>;

/// The main Solcast API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::Solcast<YourClient>` directly
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
pub type Solcast = client::Solcast<request::HyperClient>;

// When neither reqwest nor hyper is enabled, re-export the generic Solcast
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
pub use client::Solcast;
