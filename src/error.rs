//! Error taxonomy for the whole report cycle.

use thiserror::Error;

/// Everything that can abort a report run.
///
/// The display strings for the NOAA-facing variants are load-bearing:
/// downstream consumers and the test suite match on them verbatim.
#[derive(Debug, Error)]
pub enum AuroraError {
    /// Missing or invalid coordinates / configuration file.
    #[error("{0}")]
    Config(String),

    /// NOAA answered with a non-2xx status.
    #[error("NOAA HTTP {0}")]
    Fetch(u16),

    /// The request did not complete within the deadline.
    #[error("NOAA request timeout")]
    Timeout,

    /// The payload carries no list-shaped `coordinates` field.
    #[error("Invalid NOAA payload")]
    InvalidPayload,

    /// The cell at the computed grid index is absent or too short.
    #[error("NOAA grid lookup failed")]
    GridLookup,

    #[error("Invalid NOAA payload: missing timestamp")]
    MissingTimestamp,

    #[error("Invalid NOAA payload: malformed timestamp")]
    MalformedTimestamp,

    /// NOAA probabilities are percentages; anything else is a broken feed.
    #[error("NOAA probability {0} outside 0-100 range")]
    ProbabilityRange(f64),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
