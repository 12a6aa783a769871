//! Historic endpoints: estimated actuals from 2007-01-01 up to now
//!
//! Every historic request takes a `start` and exactly one of `.end(..)` or
//! `.duration(..)`; anything else fails with [`Error::Validation`](crate::Error::Validation)
//! before a request is made. A window spans at most 31 days.

use crate::client::Solcast;
use crate::request::Request;
use crate::request::common::{Horizon, Product};
use crate::request::data::DataRequest;

fn located<'a, Client: Request>(
    client: &'a Solcast<Client>,
    product: Product,
    latitude: f64,
    longitude: f64,
    start: String,
) -> DataRequest<'a, Client> {
    DataRequest::new(client, Horizon::Historic, product)
        .param("latitude", latitude)
        .param("longitude", longitude)
        .param("start", start)
}

/// Get irradiance and weather estimated actuals for a location
///
/// # Example
/// ```no_run
/// # use solcast::Solcast;
/// # async fn example() {
/// # let client = Solcast::default().with_key("api-key");
/// let table = solcast::rest::historic::radiation_and_weather(&client, -33.856784, 151.215297, "2022-10-25T14:45:00.00Z")
///     .duration("P3D")
///     .output_parameters(["ghi", "air_temp"])
///     .table()
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn radiation_and_weather<'a, Client: Request>(
    client: &'a Solcast<Client>,
    latitude: f64,
    longitude: f64,
    start: impl Into<String>,
) -> DataRequest<'a, Client> {
    located(client, Product::RadiationAndWeather, latitude, longitude, start.into())
}

/// Get basic rooftop PV power estimated actuals for a location
pub fn rooftop_pv_power<'a, Client: Request>(
    client: &'a Solcast<Client>,
    latitude: f64,
    longitude: f64,
    start: impl Into<String>,
) -> DataRequest<'a, Client> {
    located(client, Product::RooftopPvPower, latitude, longitude, start.into())
}

/// Get high spec PV power estimated actuals for a registered site
pub fn advanced_pv_power<'a, Client: Request>(
    client: &'a Solcast<Client>,
    resource_id: impl Into<String>,
    start: impl Into<String>,
) -> DataRequest<'a, Client> {
    DataRequest::new(client, Horizon::Historic, Product::AdvancedPvPower)
        .param("resource_id", resource_id.into())
        .param("start", start.into())
}

/// Get soiling loss estimated actuals of the Kimber model for a location
pub fn soiling_kimber<'a, Client: Request>(
    client: &'a Solcast<Client>,
    latitude: f64,
    longitude: f64,
    start: impl Into<String>,
) -> DataRequest<'a, Client> {
    located(client, Product::SoilingKimber, latitude, longitude, start.into())
}

/// Get soiling loss estimated actuals of the HSU model for a location
pub fn soiling_hsu<'a, Client: Request>(
    client: &'a Solcast<Client>,
    latitude: f64,
    longitude: f64,
    start: impl Into<String>,
) -> DataRequest<'a, Client> {
    located(client, Product::SoilingHsu, latitude, longitude, start.into())
}
