//! aurora-borealis: fetches the NOAA OVATION aurora forecast and reports the
//! probability for one configured location.
//!
//! One run per process; scheduling is the host's job (cron, systemd timer).
//! Any failure aborts the run with a non-zero status and no partial report.

mod config;
mod coord;
mod error;
mod ovation;
mod report;

use config::{Config, EnvLocation};
use ovation::{FETCH_TIMEOUT, ReqwestTransport, fetch_ovation};
use report::{AuroraReport, JsonLineSink, ReportSink};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    let coordinate = config.resolve_coordinate(&EnvLocation)?;
    let index = coordinate.grid_cell().ovation_index();
    log::debug!(
        "lat: {}, lon: {}, grid index: {index}",
        coordinate.latitude,
        coordinate.longitude
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let payload = runtime.block_on(async {
        let transport = ReqwestTransport::new()?;
        fetch_ovation(&transport, &config.ovation_url, FETCH_TIMEOUT).await
    })?;

    let probability = ovation::aurora_probability(&payload, index)?;
    log::debug!("probability: {probability}");

    let report = AuroraReport {
        probability,
        observation_time_ms: ovation::timestamp_ms(&payload, ovation::OBSERVATION_TIME_KEY)?,
        forecast_time_ms: ovation::timestamp_ms(&payload, ovation::FORECAST_TIME_KEY)?,
    };

    JsonLineSink::new(std::io::stdout().lock()).report(&report)?;
    log::info!(
        "reported aurora probability {} for ({}, {})",
        report.probability,
        coordinate.latitude,
        coordinate.longitude
    );
    Ok(())
}
