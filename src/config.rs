//! Adapter configuration and coordinate resolution.

use crate::coord::Coordinate;
use crate::error::AuroraError;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Public SWPC endpoint for the latest OVATION forecast.
pub const DEFAULT_OVATION_URL: &str =
    "https://services.swpc.noaa.gov/json/ovation_aurora_latest.json";

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "AURORA_BOREALIS_CONFIG";

/// Environment variables carrying the system-wide location, consulted when
/// `use_system_location` is set.
pub const SYSTEM_LATITUDE_ENV: &str = "AURORA_SYSTEM_LATITUDE";
pub const SYSTEM_LONGITUDE_ENV: &str = "AURORA_SYSTEM_LONGITUDE";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Take the coordinate from the system-wide location instead of the
    /// explicit `latitude`/`longitude` below.
    pub use_system_location: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub ovation_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            use_system_location: false,
            latitude: None,
            longitude: None,
            ovation_url: DEFAULT_OVATION_URL.to_string(),
        }
    }
}

/// Where the host keeps its shared location, if anywhere.
pub trait LocationSource {
    fn system_location(&self) -> Option<(f64, f64)>;
}

/// Reads the system location from the environment.
pub struct EnvLocation;

impl LocationSource for EnvLocation {
    fn system_location(&self) -> Option<(f64, f64)> {
        let latitude = std::env::var(SYSTEM_LATITUDE_ENV).ok()?.parse().ok()?;
        let longitude = std::env::var(SYSTEM_LONGITUDE_ENV).ok()?.parse().ok()?;
        Some((latitude, longitude))
    }
}

impl Config {
    /// Loads the config file, falling back to defaults when none exists.
    /// Defaults carry no coordinates, so resolution fails later with the
    /// usual configuration error instead of here.
    pub fn load() -> Result<Self, AuroraError> {
        let path = Self::config_path()?;
        if !path.exists() {
            log::warn!("no config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self, AuroraError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, AuroraError> {
        toml::from_str(contents).map_err(|e| AuroraError::Config(e.to_string()))
    }

    fn config_path() -> Result<PathBuf, AuroraError> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        let proj_dirs = ProjectDirs::from("", "", "aurora-borealis")
            .ok_or_else(|| AuroraError::Config("Failed to resolve config directory".into()))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Picks the coordinate for this run, aborting before any network work
    /// when neither the system location nor explicit values are usable.
    pub fn resolve_coordinate(
        &self,
        system: &dyn LocationSource,
    ) -> Result<Coordinate, AuroraError> {
        if self.use_system_location {
            let (latitude, longitude) = system.system_location().ok_or_else(|| {
                AuroraError::Config(
                    "System coordinates are configured to be used, but not set.".into(),
                )
            })?;
            return Coordinate::new(latitude, longitude);
        }

        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Coordinate::new(latitude, longitude),
            _ => Err(AuroraError::Config(
                "Neither system nor specific coordinates are set.".into(),
            )),
        }
    }
}
