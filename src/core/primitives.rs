use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer};

use crate::error::{ChartError, ChartResult};

/// Smallest magnitude written without an exponent by the upstream producers.
const PLAIN_NOTATION_MIN: f64 = 1e-6;
/// Magnitude from which numbers switch to exponential notation.
const PLAIN_NOTATION_MAX: f64 = 1e21;

/// Returns `true` when `value` takes part in domain and scale computation.
///
/// Non-finite values and magnitudes that only have an exponential textual form
/// are treated as absent data.
#[must_use]
pub fn is_plain_number(value: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    let magnitude = value.abs();
    magnitude == 0.0 || (PLAIN_NOTATION_MIN..PLAIN_NOTATION_MAX).contains(&magnitude)
}

/// Returns the value when it is present and numeric.
#[must_use]
pub fn numeric(value: Option<f64>) -> Option<f64> {
    value.filter(|v| is_plain_number(*v))
}

/// Parses a textual sample value; exponential notation is rejected.
#[must_use]
pub fn parse_plain_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.contains(['e', 'E']) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| is_plain_number(*v))
}

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}

#[must_use]
pub fn unix_millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

/// Accepts numbers, numeric strings and null; anything else becomes absent.
pub(crate) fn deserialize_lenient_value<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<LenientValue>::deserialize(deserializer)?;
    Ok(match raw {
        Some(LenientValue::Number(v)) => numeric(Some(v)),
        Some(LenientValue::Text(text)) => parse_plain_number(&text),
        Some(LenientValue::Other(_)) | None => None,
    })
}
