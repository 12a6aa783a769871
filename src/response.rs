//! Response types for the Solcast API
use serde_json::Value;

use crate::endpoint::redact_api_key;
use crate::error::{Error, Result};
use crate::period::Period;

#[cfg(feature = "table")]
use polars_core::frame::DataFrame;
#[cfg(feature = "table")]
use std::sync::OnceLock;

/// Trait for HTTP response objects
pub trait Response {
    /// Get the HTTP status code
    fn status(&self) -> u16;

    /// Get the response body as a string
    fn body(&self) -> &str;
}

/// Fields holding the time series, in lookup order.
const SERIES_FIELDS: [&str; 2] = ["forecasts", "estimated_actuals"];

/// Outcome of one Solcast API call.
///
/// A response is either successful (2xx status with a JSON body) or failed, in which case
/// [`exception`](Self::exception) carries the message the API sent back. The state is fixed
/// at construction; the only thing computed later is the cached table behind
/// [`to_table`](Self::to_table).
#[derive(Debug)]
pub struct SolcastResponse {
    code: u16,
    url: String,
    body: String,
    json: Option<Value>,
    exception: Option<String>,
    #[cfg(feature = "table")]
    table: OnceLock<DataFrame>,
}

impl SolcastResponse {
    /// Wrap a raw HTTP response received from `url`.
    pub fn new<R: Response>(url: impl Into<String>, response: R) -> Self {
        Self::from_parts(url, response.status(), response.body().to_owned())
    }

    /// Build a response from its status code and body.
    pub fn from_parts(url: impl Into<String>, code: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let json = serde_json::from_str::<Value>(&body).ok();
        let accepted = (200..300).contains(&code);

        let exception = match (&json, accepted) {
            (Some(Value::Object(_) | Value::Array(_)), true) => None,
            (Some(other), true) => Some(format!("expected a JSON object, got {} (HTTP {code})", kind_of(other))),
            (None, true) => Some(format!("response body is not valid JSON (HTTP {code})")),
            (json, false) => Some(error_message(json.as_ref(), &body, code)),
        };

        Self {
            code,
            url: url.into(),
            body,
            json,
            exception,
            #[cfg(feature = "table")]
            table: OnceLock::new(),
        }
    }

    /// Whether the API accepted the request and returned a JSON object or array.
    pub fn success(&self) -> bool {
        self.exception.is_none()
    }

    /// The HTTP status code received.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Error message sent by the API, present only on failed responses.
    pub fn exception(&self) -> Option<&str> {
        self.exception.as_deref()
    }

    /// The requested URL, including the query string and the API key.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The raw response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The parsed JSON body.
    ///
    /// Also available on failed responses whose body is JSON (the API's error envelope).
    pub fn to_dict(&self) -> Result<&Value> {
        self.json.as_ref().ok_or_else(|| {
            let reason = serde_json::from_str::<Value>(&self.body)
                .err()
                .map(|e| e.to_string())
                .unwrap_or_default();
            Error::Decode(format!("HTTP {} from {}: {reason}", self.code, redact_api_key(&self.url)))
        })
    }

    /// The period records of the time series carried by this response.
    pub fn records(&self) -> Result<&[Value]> {
        if let Some(exception) = &self.exception {
            return Err(Error::Shape(format!(
                "request failed with HTTP {}: {exception}",
                self.code
            )));
        }
        let json = self.to_dict()?;
        let object = json
            .as_object()
            .ok_or_else(|| Error::Shape(format!("expected a JSON object, got {}", kind_of(json))))?;

        if let Some(series) = SERIES_FIELDS.iter().find_map(|field| object.get(*field)) {
            return series
                .as_array()
                .map(Vec::as_slice)
                .ok_or_else(|| Error::Shape(format!("time series is {}, not an array", kind_of(series))));
        }

        let mut arrays = object.values().filter_map(Value::as_array);
        match (arrays.next(), arrays.next()) {
            (Some(series), None) => Ok(series.as_slice()),
            _ => Err(Error::Shape(format!(
                "no time series field in response (fields: {})",
                object.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
            ))),
        }
    }

    /// The `period` of every record, parsed as an ISO-8601 duration.
    pub fn periods(&self) -> Result<Vec<Period>> {
        self.records()?
            .iter()
            .enumerate()
            .map(|(i, record)| {
                record
                    .get("period")
                    .and_then(Value::as_str)
                    .ok_or_else(|| Error::Shape(format!("record {i} has no period")))?
                    .parse()
            })
            .collect()
    }

    /// Tabular view of the time series, one row per period and one column per field.
    ///
    /// Built on first call and cached; later calls return the same frame.
    #[cfg(feature = "table")]
    pub fn to_table(&self) -> Result<&DataFrame> {
        if let Some(df) = self.table.get() {
            return Ok(df);
        }
        let df = crate::processor::table::records_to_frame(self.records()?)?;
        log::debug!("built {}x{} table from {}", df.height(), df.width(), redact_api_key(&self.url));
        Ok(self.table.get_or_init(|| df))
    }

    /// Consume the response and return its tabular view.
    #[cfg(feature = "table")]
    pub fn into_table(self) -> Result<DataFrame> {
        self.to_table()?;
        self.table
            .into_inner()
            .ok_or_else(|| Error::Shape("table cache is empty".to_string()))
    }
}

fn error_message(json: Option<&Value>, body: &str, code: u16) -> String {
    let message = json.and_then(|v| {
        v.pointer("/response_status/message")
            .or_else(|| v.get("message"))
            .and_then(Value::as_str)
    });
    match message {
        Some(m) => m.to_owned(),
        None if !body.trim().is_empty() => body.trim().to_owned(),
        None => format!("HTTP {code}"),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
