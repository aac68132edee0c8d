//! Validation and extraction on the raw OVATION payload.
//!
//! The payload is kept as untyped JSON: the feed has changed shape before,
//! and everything we need is two timestamp strings plus one indexed cell of
//! the `coordinates` list, each cell a `[lon, lat, probability]` triple.

use crate::error::AuroraError;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

pub const OBSERVATION_TIME_KEY: &str = "Observation Time";
pub const FORECAST_TIME_KEY: &str = "Forecast Time";

/// Reads the probability (third triple component) at `index`.
///
/// Validation short-circuits: a payload without a list-shaped `coordinates`
/// field is invalid outright; a missing, short, or non-numeric cell is a
/// failed grid lookup. The probability itself must be a percentage.
pub fn aurora_probability(payload: &Value, index: usize) -> Result<f64, AuroraError> {
    let coordinates = payload
        .get("coordinates")
        .and_then(Value::as_array)
        .ok_or(AuroraError::InvalidPayload)?;

    let cell = coordinates
        .get(index)
        .and_then(Value::as_array)
        .filter(|cell| cell.len() >= 3)
        .ok_or(AuroraError::GridLookup)?;

    let probability = cell[2].as_f64().ok_or(AuroraError::GridLookup)?;
    if !(0.0..=100.0).contains(&probability) {
        return Err(AuroraError::ProbabilityRange(probability));
    }

    Ok(probability)
}

/// Parses the timestamp field stored under `key` into epoch milliseconds.
///
/// SWPC serves RFC 3339 (`2026-02-25T09:12:00Z`); older table feeds use a
/// space-separated variant, accepted as a fallback.
pub fn timestamp_ms(payload: &Value, key: &str) -> Result<i64, AuroraError> {
    let raw = payload
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(AuroraError::MissingTimestamp)?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc).timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&dt).timestamp_millis());
    }

    Err(AuroraError::MalformedTimestamp)
}
