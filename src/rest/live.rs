//! Live endpoints: estimated actuals for the last 7 days up to now

use crate::client::Solcast;
use crate::params::ParamValue;
use crate::request::Request;
use crate::request::common::{Horizon, Product};
use crate::request::data::DataRequest;

/// Get irradiance and weather estimated actuals for a location
pub fn radiation_and_weather<'a, Client: Request>(
    client: &'a Solcast<Client>,
    latitude: f64,
    longitude: f64,
    output_parameters: impl Into<ParamValue>,
) -> DataRequest<'a, Client> {
    DataRequest::new(client, Horizon::Live, Product::RadiationAndWeather)
        .param("latitude", latitude)
        .param("longitude", longitude)
        .output_parameters(output_parameters)
}

/// Get basic rooftop PV power estimated actuals for a location
///
/// Without a positive `capacity` the API rejects the request with HTTP 400.
pub fn rooftop_pv_power<'a, Client: Request>(
    client: &'a Solcast<Client>,
    latitude: f64,
    longitude: f64,
) -> DataRequest<'a, Client> {
    DataRequest::new(client, Horizon::Live, Product::RooftopPvPower)
        .param("latitude", latitude)
        .param("longitude", longitude)
}

/// Get high spec PV power estimated actuals for a registered site
pub fn advanced_pv_power<'a, Client: Request>(
    client: &'a Solcast<Client>,
    resource_id: impl Into<String>,
) -> DataRequest<'a, Client> {
    DataRequest::new(client, Horizon::Live, Product::AdvancedPvPower).param("resource_id", resource_id.into())
}

/// Get soiling loss estimated actuals of the Kimber model for a location
pub fn soiling_kimber<'a, Client: Request>(
    client: &'a Solcast<Client>,
    latitude: f64,
    longitude: f64,
) -> DataRequest<'a, Client> {
    DataRequest::new(client, Horizon::Live, Product::SoilingKimber)
        .param("latitude", latitude)
        .param("longitude", longitude)
}

/// Get soiling loss estimated actuals of the HSU model for a location
pub fn soiling_hsu<'a, Client: Request>(
    client: &'a Solcast<Client>,
    latitude: f64,
    longitude: f64,
) -> DataRequest<'a, Client> {
    DataRequest::new(client, Horizon::Live, Product::SoilingHsu)
        .param("latitude", latitude)
        .param("longitude", longitude)
}
