//! Response mapping from raw JSON to typed records.
//!
//! Every record in [`crate::models`] derives `Deserialize` with field-level
//! helpers from [`de`], so mapping never fails because of a missing or
//! wrongly typed optional field: such fields fall back to `None`, an empty
//! list, or `false`. Only a value that is not a JSON object at all is
//! rejected.
//!
//! Mapping is a pure function of its input.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

use crate::error::RelationError;

/// Maps a JSON object into a typed record.
///
/// # Errors
///
/// Returns `RelationError::Serialization` if `value` is not an object.
pub fn map_record<T>(value: Value) -> Result<T, RelationError>
where
    T: DeserializeOwned,
{
    if !value.is_object() {
        return Err(RelationError::Serialization(serde_json::Error::custom(
            format!("expected a JSON object, got {}", json_kind(&value)),
        )));
    }
    Ok(serde_json::from_value(value)?)
}

/// Maps a JSON array of objects into typed records, preserving order.
///
/// A value that is not an array maps to an empty list.
///
/// # Errors
///
/// Returns `RelationError::Serialization` if an element is not an object.
pub fn map_list<T>(value: Value) -> Result<Vec<T>, RelationError>
where
    T: DeserializeOwned,
{
    match value {
        Value::Array(items) => items.into_iter().map(map_record).collect(),
        other => {
            tracing::warn!(
                kind = json_kind(&other),
                "Expected a JSON array in list response, returning an empty list"
            );
            Ok(Vec::new())
        }
    }
}

/// Parses an ISO-8601 timestamp, treating a trailing `Z` as `+00:00`.
///
/// Values without an offset are taken as UTC; a bare date is midnight UTC.
/// Anything else yields `None`.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let normalized = match raw.strip_suffix('Z').or_else(|| raw.strip_suffix('z')) {
        Some(head) => format!("{head}+00:00"),
        None => raw.to_string(),
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(ts);
    }

    const WITH_OFFSET: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f%:z",
        "%Y-%m-%dT%H:%M:%S%.f%z",
        "%Y-%m-%d %H:%M:%S%.f%:z",
        "%Y-%m-%dT%H:%M%:z",
    ];
    for format in WITH_OFFSET {
        if let Ok(ts) = DateTime::parse_from_str(&normalized, format) {
            return Some(ts);
        }
    }

    let utc = FixedOffset::east_opt(0)?;
    const NAIVE: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
    for format in NAIVE {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Some(utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| utc.from_utc_datetime(&naive))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Field-level deserializers that never fail on malformed input.
///
/// Use together with `#[serde(default)]` so absent keys also get defaults.
pub(crate) mod de {
    use chrono::{DateTime, FixedOffset};
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Deserializes an optional value, yielding `None` when it has the wrong shape.
    pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).ok())
    }

    /// Deserializes a list element-wise, skipping elements with the wrong
    /// shape. Anything other than an array yields an empty list.
    pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
            _ => Vec::new(),
        })
    }

    /// Deserializes a flag; anything but a JSON boolean is `false`.
    pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_bool().unwrap_or(false))
    }

    /// Deserializes an optional ISO-8601 timestamp.
    pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().and_then(super::parse_timestamp))
    }
}
