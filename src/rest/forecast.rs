//! Forecast endpoints: from now up to 14 days ahead

use crate::client::Solcast;
use crate::params::ParamValue;
use crate::request::Request;
use crate::request::common::{Horizon, Product};
use crate::request::data::DataRequest;

/// Get irradiance and weather forecasts for a location
///
/// Derived from satellite nowcasts for the first hours and numerical weather models
/// beyond that. `latitude` and `longitude` are decimal degrees, north and east positive.
///
/// # Example
/// ```no_run
/// # use solcast::Solcast;
/// # async fn example() {
/// # let client = Solcast::default().with_key("api-key");
/// let res = solcast::rest::forecast::radiation_and_weather(&client, -33.856784, 151.215297, ["ghi", "dni"])
///     .param("hours", 48)
///     .get()
///     .await
///     .unwrap();
/// assert!(res.success());
/// # }
/// ```
pub fn radiation_and_weather<'a, Client: Request>(
    client: &'a Solcast<Client>,
    latitude: f64,
    longitude: f64,
    output_parameters: impl Into<ParamValue>,
) -> DataRequest<'a, Client> {
    DataRequest::new(client, Horizon::Forecast, Product::RadiationAndWeather)
        .param("latitude", latitude)
        .param("longitude", longitude)
        .output_parameters(output_parameters)
}

/// Get basic rooftop PV power forecasts for a location
///
/// The API requires a `capacity` parameter; pass it with `.param("capacity", kw)`.
pub fn rooftop_pv_power<'a, Client: Request>(
    client: &'a Solcast<Client>,
    latitude: f64,
    longitude: f64,
    output_parameters: impl Into<ParamValue>,
) -> DataRequest<'a, Client> {
    DataRequest::new(client, Horizon::Forecast, Product::RooftopPvPower)
        .param("latitude", latitude)
        .param("longitude", longitude)
        .output_parameters(output_parameters)
}

/// Get high spec PV power forecasts for a registered site
pub fn advanced_pv_power<'a, Client: Request>(
    client: &'a Solcast<Client>,
    resource_id: impl Into<String>,
) -> DataRequest<'a, Client> {
    DataRequest::new(client, Horizon::Forecast, Product::AdvancedPvPower).param("resource_id", resource_id.into())
}

/// Get the soiling loss forecast of the Kimber model for a location
///
/// Model inputs such as `depo_veloc_pm10` or `initial_soiling` go through `.param()`.
pub fn soiling_kimber<'a, Client: Request>(
    client: &'a Solcast<Client>,
    latitude: f64,
    longitude: f64,
) -> DataRequest<'a, Client> {
    DataRequest::new(client, Horizon::Forecast, Product::SoilingKimber)
        .param("latitude", latitude)
        .param("longitude", longitude)
}

/// Get the soiling loss forecast of the HSU model for a location
pub fn soiling_hsu<'a, Client: Request>(
    client: &'a Solcast<Client>,
    latitude: f64,
    longitude: f64,
) -> DataRequest<'a, Client> {
    DataRequest::new(client, Horizon::Forecast, Product::SoilingHsu)
        .param("latitude", latitude)
        .param("longitude", longitude)
}
