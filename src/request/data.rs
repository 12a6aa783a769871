use std::time::Duration;

use crate::client::Solcast;
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::execute::Execute;
use crate::params::{ParamValue, Params};
use crate::processor::{Processor, Wrapped};
use crate::request::Request;
use crate::request::common::{Horizon, Product};

/// Request builder shared by every data endpoint
pub struct DataRequest<'a, Client: Request, P: Processor = Wrapped> {
    client: &'a Solcast<Client>,
    /// Time horizon of the endpoint
    pub horizon: Horizon,
    /// Data product of the endpoint
    pub product: Product,
    /// Query parameters, in the order they were set
    pub params: Params,
    /// Timeout for this call; the client default when unset
    pub timeout: Option<Duration>,
    processor: P,
}

// Constructor - always starts with Wrapped
impl<'a, C: Request> DataRequest<'a, C, Wrapped> {
    /// Create a new request for `product` over `horizon`, with no parameters
    pub fn new(client: &'a Solcast<C>, horizon: Horizon, product: Product) -> Self {
        Self {
            client,
            horizon,
            product,
            params: Params::new(),
            timeout: None,
            processor: Wrapped,
        }
    }

    /// Resolve to a Polars DataFrame instead of the response wrapper.
    ///
    /// Failed requests then surface as [`Error::Shape`].
    #[cfg(feature = "table")]
    pub fn table(self) -> DataRequest<'a, C, crate::processor::Table> {
        self.with_processor(crate::processor::Table)
    }
}

// Processor conversion and builder methods work on any processor type
impl<'a, C: Request, P: Processor + 'a> DataRequest<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }

    /// Replace the processor that turns the response into the output
    pub fn with_processor<Q: Processor>(self, processor: Q) -> DataRequest<'a, C, Q> {
        DataRequest {
            client: self.client,
            horizon: self.horizon,
            product: self.product,
            params: self.params,
            timeout: self.timeout,
            processor,
        }
    }

    /// Set any query parameter the endpoint accepts, e.g. `capacity` or `tilt`
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Set the output parameters to return, e.g. `["ghi", "dni"]`
    pub fn output_parameters(self, parameters: impl Into<ParamValue>) -> Self {
        self.param("output_parameters", parameters)
    }

    /// Set the period length of the returned records, e.g. `PT30M`
    pub fn period(self, period: impl Into<String>) -> Self {
        self.param("period", period.into())
    }

    /// Set the end of a historic window (exclusive with [`duration`](Self::duration))
    pub fn end(self, end: impl Into<String>) -> Self {
        self.param("end", end.into())
    }

    /// Set the ISO-8601 length of a historic window, within 31 days of the start
    /// (exclusive with [`end`](Self::end))
    pub fn duration(self, duration: impl Into<String>) -> Self {
        self.param("duration", duration.into())
    }

    /// Override the client timeout for this call
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Endpoint the request is sent to
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::data(self.client.base_url(), self.horizon, self.product)
    }

    /// Check argument combinations the API would reject anyway.
    ///
    /// Historic requests need exactly one of `end` and `duration`.
    pub fn validate(&self) -> Result<()> {
        if self.horizon == Horizon::Historic {
            match (self.params.contains_key("end"), self.params.contains_key("duration")) {
                (true, false) | (false, true) => {}
                (true, true) => {
                    return Err(Error::Validation(format!(
                        "historic {} takes only one of `end` or `duration`",
                        self.product
                    )));
                }
                (false, false) => {
                    return Err(Error::Validation(format!(
                        "historic {} needs one of `end` or `duration`",
                        self.product
                    )));
                }
            }
        }
        Ok(())
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for DataRequest<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        // Nothing goes over the wire for an invalid combination
        self.validate()?;

        let endpoint = self.endpoint();
        let response = self.client.request(&endpoint, self.params, self.timeout).await?;

        // Process using associated Processor type
        self.processor.process(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::mock::MockClient;
    use serde_json::json;

    fn client(mock: &MockClient) -> Solcast<MockClient> {
        Solcast::from_client(mock.clone()).with_base_url("http://solcast.test")
    }

    fn historic(client: &Solcast<MockClient>) -> DataRequest<'_, MockClient> {
        DataRequest::new(client, Horizon::Historic, Product::RooftopPvPower)
            .param("latitude", -33.856784)
            .param("longitude", 151.215297)
            .param("start", "2022-10-25T14:45:00.00Z")
    }

    #[tokio::test]
    async fn test_historic_with_end_and_duration_never_dispatches() {
        let mock = MockClient::new();
        let client = client(&mock);

        let err = historic(&client)
            .end("2022-10-28T14:45:00.00Z")
            .duration("P3D")
            .get()
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)), "{err}");
        assert!(mock.urls().is_empty());
    }

    #[tokio::test]
    async fn test_historic_without_window_never_dispatches() {
        let mock = MockClient::new();
        let client = client(&mock);

        let err = historic(&client).get().await.unwrap_err();

        assert!(matches!(err, Error::Validation(_)), "{err}");
        assert!(mock.urls().is_empty());
    }

    #[tokio::test]
    async fn test_passthrough_window_counts_for_validation() {
        let mock = MockClient::new();
        let client = client(&mock);

        let result = historic(&client).duration("P3D").param("end", "2022-10-26").get().await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(mock.urls().is_empty());
    }

    #[tokio::test]
    async fn test_historic_dispatches_once_with_forced_format() {
        let mock = MockClient::new();
        let client = client(&mock).with_key("secret");

        let res = historic(&client)
            .duration("P3D")
            .param("format", "csv")
            .param("capacity", 5)
            .get()
            .await
            .unwrap();

        assert!(res.success());
        let urls = mock.urls();
        assert_eq!(urls.len(), 1);
        assert_eq!(
            urls[0],
            "http://solcast.test/data/historic/rooftop_pv_power?latitude=-33.856784&longitude=151.215297\
             &start=2022-10-25T14%3A45%3A00.00Z&duration=P3D&format=json&capacity=5&api_key=secret"
        );
        assert_eq!(urls[0].matches("format=").count(), 1);
    }

    #[tokio::test]
    async fn test_forecast_has_no_window_rule() {
        let mock = MockClient::new();
        let client = client(&mock);

        let res = DataRequest::new(&client, Horizon::Forecast, Product::SoilingHsu)
            .param("latitude", -33.856784)
            .param("longitude", 151.215297)
            .get()
            .await
            .unwrap();

        assert!(res.success());
        assert_eq!(
            mock.urls(),
            ["http://solcast.test/data/forecast/soiling/hsu?latitude=-33.856784&longitude=151.215297&format=json"]
        );
    }

    #[tokio::test]
    async fn test_rejection_is_data_not_error() {
        let body = json!({"response_status": {"message": "'capacity' must be greater than '0'."}});
        let mock = MockClient::answering(400, body.to_string());
        let client = client(&mock);

        let res = DataRequest::new(&client, Horizon::Live, Product::RooftopPvPower)
            .get()
            .await
            .unwrap();

        assert!(!res.success());
        assert_eq!(res.code(), 400);
        assert_eq!(res.exception(), Some("'capacity' must be greater than '0'."));
    }

    #[cfg(feature = "table")]
    #[tokio::test]
    async fn test_table_processor() {
        let body = json!({"estimated_actuals": [
            {"ghi": 100, "period_end": "2024-01-01T00:30:00.0000000Z", "period": "PT30M"},
        ]});
        let mock = MockClient::answering(200, body.to_string());
        let client = client(&mock);

        let df = DataRequest::new(&client, Horizon::Live, Product::RadiationAndWeather)
            .output_parameters(["ghi"])
            .table()
            .get()
            .await
            .unwrap();
        assert_eq!(df.height(), 1);

        let failing = MockClient::answering(400, "{}");
        let client = Solcast::from_client(failing);
        let result = DataRequest::new(&client, Horizon::Live, Product::RadiationAndWeather)
            .table()
            .get()
            .await;
        assert!(matches!(result, Err(Error::Shape(_))));
    }
}
