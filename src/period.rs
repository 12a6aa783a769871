//! ISO-8601 durations as used by the `period` field of Solcast records
use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;

use crate::error::Error;

/// Sampling interval of a period record, e.g. `PT30M`.
///
/// Only fixed-length units are accepted: weeks, days, hours, minutes and (fractional)
/// seconds. Years and months have no fixed length and are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    text: String,
    duration: TimeDelta,
}

impl Period {
    /// Length of the period.
    pub fn as_duration(&self) -> TimeDelta {
        self.duration
    }

    /// The period as written in the response.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |why: &str| Error::Shape(format!("invalid ISO-8601 duration '{s}': {why}"));

        let rest = s.strip_prefix('P').ok_or_else(|| invalid("missing 'P' designator"))?;
        let (date, time) = match rest.split_once('T') {
            Some((_, "")) => return Err(invalid("empty time part")),
            Some((date, time)) => (date, Some(time)),
            None => (rest, None),
        };
        if date.is_empty() && time.is_none() {
            return Err(invalid("no components"));
        }
        if date.contains(['Y', 'M']) {
            return Err(invalid("calendar units are not supported"));
        }

        let date = total_millis(date, &DATE_UNITS).map_err(|e| invalid(&e))?;
        let time = total_millis(time.unwrap_or_default(), &TIME_UNITS).map_err(|e| invalid(&e))?;
        let duration = date
            .checked_add(time)
            .and_then(TimeDelta::try_milliseconds)
            .ok_or_else(|| invalid("out of range"))?;

        Ok(Self {
            text: s.to_owned(),
            duration,
        })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

const DATE_UNITS: [(char, i64); 2] = [('W', 7 * 86_400_000), ('D', 86_400_000)];
const TIME_UNITS: [(char, i64); 3] = [('H', 3_600_000), ('M', 60_000), ('S', 1_000)];

/// Sum the components of one part, in milliseconds. Units must follow the order of `units`
/// and appear at most once.
fn total_millis(part: &str, units: &[(char, i64)]) -> Result<i64, String> {
    let mut total: i64 = 0;
    let mut next = 0;
    for (value, unit) in components(part)? {
        let pos = units
            .iter()
            .position(|(u, _)| *u == unit)
            .ok_or_else(|| format!("unknown unit '{unit}'"))?;
        if pos < next {
            return Err(format!("unit '{unit}' is repeated or out of order"));
        }
        next = pos + 1;

        let millis = if unit == 'S' {
            let seconds: f64 = value.parse().map_err(|_| format!("bad seconds '{value}'"))?;
            let millis = (seconds * 1000.0).round();
            (millis < i64::MAX as f64).then_some(millis as i64)
        } else {
            whole(value, unit)?.checked_mul(units[pos].1)
        };
        total = millis
            .and_then(|m| total.checked_add(m))
            .ok_or_else(|| "out of range".to_string())?;
    }
    Ok(total)
}

/// Split `3DT` style text into `(number, unit)` pairs.
fn components(part: &str) -> Result<Vec<(&str, char)>, String> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in part.char_indices() {
        if c.is_ascii_digit() || c == '.' {
            continue;
        }
        if i == start {
            return Err(format!("unit '{c}' without a value"));
        }
        out.push((&part[start..i], c));
        start = i + c.len_utf8();
    }
    if start != part.len() {
        return Err("trailing value without a unit".to_string());
    }
    Ok(out)
}

fn whole(value: &str, unit: char) -> Result<i64, String> {
    value
        .parse()
        .map_err(|_| format!("'{value}{unit}' must be a whole number"))
}
