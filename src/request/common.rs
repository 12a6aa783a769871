//! Common types used across multiple endpoints
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Time horizon of a data endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    /// From now up to 14 days ahead
    Forecast,
    /// Estimated actuals for a past window
    Historic,
    /// Estimated actuals for the last 7 days up to now
    Live,
}

impl Horizon {
    /// Path segment of the horizon
    pub fn as_str(self) -> &'static str {
        match self {
            Horizon::Forecast => "forecast",
            Horizon::Historic => "historic",
            Horizon::Live => "live",
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Horizon {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forecast" => Ok(Horizon::Forecast),
            "historic" => Ok(Horizon::Historic),
            "live" => Ok(Horizon::Live),
            _ => Err(crate::error::Error::Validation(format!("Invalid horizon: {s}"))),
        }
    }
}

/// Data product served by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    /// Irradiance and weather
    RadiationAndWeather,
    /// Basic rooftop PV power for a location
    RooftopPvPower,
    /// High spec PV power for a registered site
    AdvancedPvPower,
    /// Soiling loss, Kimber model
    SoilingKimber,
    /// Soiling loss, HSU model
    SoilingHsu,
}

impl Product {
    /// Path segment(s) of the product
    pub fn as_str(self) -> &'static str {
        match self {
            Product::RadiationAndWeather => "radiation_and_weather",
            Product::RooftopPvPower => "rooftop_pv_power",
            Product::AdvancedPvPower => "advanced_pv_power",
            Product::SoilingKimber => "soiling/kimber",
            Product::SoilingHsu => "soiling/hsu",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Product {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "radiation_and_weather" => Ok(Product::RadiationAndWeather),
            "rooftop_pv_power" => Ok(Product::RooftopPvPower),
            "advanced_pv_power" => Ok(Product::AdvancedPvPower),
            "soiling/kimber" | "soiling_kimber" => Ok(Product::SoilingKimber),
            "soiling/hsu" | "soiling_hsu" => Ok(Product::SoilingHsu),
            _ => Err(crate::error::Error::Validation(format!("Invalid product: {s}"))),
        }
    }
}

/// Path of the data endpoint for `product` over `horizon`, e.g. `/data/live/soiling/hsu`.
pub fn data_path(horizon: Horizon, product: Product) -> String {
    format!("/data/{horizon}/{product}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_paths() {
        assert_eq!(
            data_path(Horizon::Forecast, Product::RadiationAndWeather),
            "/data/forecast/radiation_and_weather"
        );
        assert_eq!(
            data_path(Horizon::Historic, Product::SoilingKimber),
            "/data/historic/soiling/kimber"
        );
        assert_eq!(data_path(Horizon::Live, Product::SoilingHsu), "/data/live/soiling/hsu");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Historic".parse::<Horizon>().unwrap(), Horizon::Historic);
        assert_eq!("soiling_hsu".parse::<Product>().unwrap(), Product::SoilingHsu);
        assert!("tmy".parse::<Horizon>().is_err());
    }
}
