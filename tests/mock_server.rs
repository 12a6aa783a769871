//! End-to-end tests of the default HTTP client against a local mock of the Solcast API
#![cfg(all(feature = "table", any(feature = "hyper", feature = "reqwest")))]

use std::time::Duration;

use chrono::{TimeDelta, TimeZone, Utc};
use httpmock::{Method::GET, MockServer};
use serde_json::{Value, json};
use solcast::{Error, Solcast, rest};

const LAT: f64 = -33.856784;
const LON: f64 = 151.215297;
const START: &str = "2022-10-25T14:45:00.00Z";

/// `count` half-hourly records ending from 15:00 on the start day.
fn half_hourly(count: usize, fields: impl Fn(usize) -> Value) -> Vec<Value> {
    let first = Utc.with_ymd_and_hms(2022, 10, 25, 15, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let mut record = fields(i);
            let end = first + TimeDelta::minutes(30 * i as i64);
            record["period_end"] = json!(end.format("%Y-%m-%dT%H:%M:%S.0000000Z").to_string());
            record["period"] = json!("PT30M");
            record
        })
        .collect()
}

fn client(server: &MockServer) -> Solcast {
    Solcast::default().with_key("test-key").with_base_url(server.base_url())
}

#[tokio::test]
async fn test_historic_three_days_is_boundary_inclusive() {
    let server = MockServer::start_async().await;
    let records = half_hourly(3 * 48 + 1, |i| json!({"ghi": i * 2, "air_temp": 20.5}));
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/data/historic/radiation_and_weather")
                .query_param("start", START)
                .query_param("duration", "P3D")
                .query_param("format", "json")
                .query_param("api_key", "test-key");
            then.status(200).json_body(json!({ "estimated_actuals": records }));
        })
        .await;

    let client = client(&server);
    let res = rest::historic::radiation_and_weather(&client, LAT, LON, START)
        .duration("P3D")
        .param("install_date", "2022-10-01")
        .param("capacity", 1)
        .param("time_zone", -3)
        .get()
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(res.success());
    assert!(res.exception().is_none());
    assert_eq!(res.to_dict().unwrap()["estimated_actuals"].as_array().unwrap().len(), 145);
    assert_eq!(res.records().unwrap().len(), 145);
    assert_eq!(res.to_table().unwrap().height(), 145);
}

#[tokio::test]
async fn test_table_is_idempotent() {
    let server = MockServer::start_async().await;
    let records = half_hourly(10, |i| json!({"pv_power_rooftop": i as f64 / 4.0}));
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/data/historic/rooftop_pv_power");
            then.status(200).json_body(json!({ "estimated_actuals": records }));
        })
        .await;

    let client = client(&server);
    let res = rest::historic::rooftop_pv_power(&client, LAT, LON, START)
        .end("2022-10-25T19:45:00.00Z")
        .param("capacity", 10)
        .get()
        .await
        .unwrap();

    let first = res.to_table().unwrap().clone();
    let second = res.to_table().unwrap();
    assert_eq!(first.height(), second.height());
    assert!(first.equals_missing(second));
    // only the one request, no refetch for the second table
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_capacity_is_a_failed_response() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/data/live/rooftop_pv_power");
            then.status(400).json_body(json!({
                "response_status": {
                    "error_code": "BadRequest",
                    "message": "'capacity' must be greater than '0'.",
                    "errors": [{"error_code": "GreaterThan", "message": "'capacity' must be greater than '0'."}]
                }
            }));
        })
        .await;

    let client = client(&server);
    let res = rest::live::rooftop_pv_power(&client, LAT, LON).get().await.unwrap();

    mock.assert_async().await;
    assert!(!res.success());
    assert_eq!(res.code(), 400);
    assert_eq!(res.exception(), Some("'capacity' must be greater than '0'."));
    assert!(matches!(res.to_table(), Err(Error::Shape(_))));
}

#[tokio::test]
async fn test_live_output_parameters_are_comma_joined() {
    let server = MockServer::start_async().await;
    let records = half_hourly(4, |_| json!({"dni": 512, "ghi": 640}));
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/data/live/radiation_and_weather")
                .query_param("output_parameters", "dni,ghi");
            then.status(200).json_body(json!({ "estimated_actuals": records }));
        })
        .await;

    let client = client(&server);
    let df = rest::live::radiation_and_weather(&client, LAT, LON, ["dni", "ghi"])
        .table()
        .get()
        .await
        .unwrap();

    mock.assert_async().await;
    let names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    assert_eq!(names, ["dni", "ghi", "period_end", "period"]);
}

#[tokio::test]
async fn test_soiling_periods_are_iso_durations() {
    let server = MockServer::start_async().await;
    let records = half_hourly(48, |i| json!({"kimber_loss_fraction": 0.001 * i as f64}));
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/data/historic/soiling/kimber")
                .query_param("manual_washdates", "2022-10-01");
            then.status(200).json_body(json!({ "estimated_actuals": records }));
        })
        .await;

    let client = client(&server);
    let res = rest::historic::soiling_kimber(&client, LAT, LON, START)
        .duration("P1D")
        .param("manual_washdates", vec!["2022-10-01"])
        .get()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(res.to_dict().unwrap()["estimated_actuals"][0]["period"], "PT30M");
    let periods = res.periods().unwrap();
    assert_eq!(periods.len(), 48);
    assert!(periods.iter().all(|p| p.as_duration() == TimeDelta::minutes(30)));
    assert!(res.to_table().unwrap().height() > 0);
}

#[tokio::test]
async fn test_forecast_soiling_hsu() {
    let server = MockServer::start_async().await;
    let records = half_hourly(6, |_| json!({"hsu_loss_fraction": 0.02}));
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/data/forecast/soiling/hsu");
            then.status(200).json_body(json!({ "forecasts": records }));
        })
        .await;

    let client = client(&server);
    let df = rest::forecast::soiling_hsu(&client, LAT, LON).table().get().await.unwrap();

    mock.assert_async().await;
    assert_eq!(df.height(), 6);
}

#[tokio::test]
async fn test_invalid_json_with_success_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/data/forecast/advanced_pv_power");
            then.status(200).body("<html>upstream maintenance</html>");
        })
        .await;

    let client = client(&server);
    let res = rest::forecast::advanced_pv_power(&client, "ba75-e17a-7374-95ed")
        .get()
        .await
        .unwrap();

    assert!(!res.success());
    assert_eq!(res.code(), 200);
    assert!(matches!(res.to_dict(), Err(Error::Decode(_))));
    assert!(matches!(res.to_table(), Err(Error::Shape(_))));
}

#[tokio::test]
async fn test_slow_answer_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/data/live/advanced_pv_power");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!({"estimated_actuals": []}));
        })
        .await;

    let client = client(&server).with_timeout(Duration::from_secs(10));
    let err = rest::live::advanced_pv_power(&client, "ba75-e17a-7374-95ed")
        .timeout(Duration::from_millis(50))
        .get()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout(d) if d == Duration::from_millis(50)), "{err}");
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // Nothing listens on port 1
    let client = Solcast::default().with_base_url("http://127.0.0.1:1");
    let err = rest::live::soiling_hsu(&client, LAT, LON).get().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "{err}");
}
