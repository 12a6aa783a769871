//! Table processor using Polars DataFrames
use crate::error::{Error, Result};
use crate::processor::Processor;
use crate::response::SolcastResponse;
use polars_core::prelude::*;
use serde_json::{Map, Value};

/// Table processor that converts responses to Polars DataFrames
#[derive(Debug, Clone, Copy, Default)]
pub struct Table;

impl Processor for Table {
    type Output = DataFrame;

    fn process(&self, response: SolcastResponse) -> Result<DataFrame> {
        response.into_table()
    }
}

/// Build a frame with one row per record and one column per distinct key.
///
/// Columns appear in the order their key is first seen. A key missing from a record is a
/// null in that row. Column types: Int64 when every value is an integer, Float64 when every
/// value is a number (or the column is all null), Boolean when every value is a bool,
/// String otherwise.
pub(crate) fn records_to_frame(records: &[Value]) -> Result<DataFrame> {
    let rows = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            record
                .as_object()
                .ok_or_else(|| Error::Shape(format!("record {i} is not a JSON object")))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut names: Vec<&str> = Vec::new();
    for row in &rows {
        for key in row.keys() {
            if !names.contains(&key.as_str()) {
                names.push(key);
            }
        }
    }

    let columns = names.iter().map(|name| column(name, &rows)).collect();
    Ok(DataFrame::new(columns)?)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    Integer,
    Float,
    Boolean,
    Text,
}

fn infer<'a>(values: impl Iterator<Item = &'a Value>) -> Kind {
    let mut kind = Kind::Float;
    let mut first = true;
    for value in values {
        let this = match value {
            Value::Number(n) if n.is_i64() => Kind::Integer,
            Value::Number(_) => Kind::Float,
            Value::Bool(_) => Kind::Boolean,
            _ => return Kind::Text,
        };
        kind = match (first, kind, this) {
            (true, _, this) => this,
            (_, Kind::Integer, Kind::Float) | (_, Kind::Float, Kind::Integer) => Kind::Float,
            (_, prev, this) if prev == this => prev,
            _ => return Kind::Text,
        };
        first = false;
    }
    kind
}

fn column(name: &str, rows: &[&Map<String, Value>]) -> Column {
    let cells: Vec<Option<&Value>> = rows
        .iter()
        .map(|row| row.get(name).filter(|v| !v.is_null()))
        .collect();

    let series = match infer(cells.iter().flatten().copied()) {
        Kind::Integer => Series::new(
            name.into(),
            cells.iter().map(|c| c.and_then(Value::as_i64)).collect::<Vec<_>>(),
        ),
        Kind::Float => Series::new(
            name.into(),
            cells.iter().map(|c| c.and_then(Value::as_f64)).collect::<Vec<_>>(),
        ),
        Kind::Boolean => Series::new(
            name.into(),
            cells.iter().map(|c| c.and_then(Value::as_bool)).collect::<Vec<_>>(),
        ),
        Kind::Text => Series::new(
            name.into(),
            cells.iter().map(|c| c.map(text)).collect::<Vec<Option<String>>>(),
        ),
    };
    Column::from(series)
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
