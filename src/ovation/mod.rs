//! NOAA OVATION aurora feed: fetching, extraction, timestamps.

pub mod fetcher;
pub mod payload;

pub use fetcher::{FETCH_TIMEOUT, OVATION_USER_AGENT, ReqwestTransport, Transport, fetch_ovation};
pub use payload::{FORECAST_TIME_KEY, OBSERVATION_TIME_KEY, aurora_probability, timestamp_ms};
