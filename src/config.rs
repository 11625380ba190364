/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::error::{SimError, SimResult};
use crate::shared::structs::{DEFAULT_TIME_AT_FLOOR, DEFAULT_TIME_BETWEEN_FLOORS};
use crate::shared::{BuildingBounds, TravelParams};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub travel: TravelConfig,
    pub building: BuildingBounds,
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TravelConfig {
    pub time_between_floors: f64,
    pub time_at_floor: f64,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for TravelConfig {
    fn default() -> Self {
        TravelConfig {
            time_between_floors: DEFAULT_TIME_BETWEEN_FLOORS,
            time_at_floor: DEFAULT_TIME_AT_FLOOR,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn travel_params(&self) -> SimResult<TravelParams> {
        TravelParams::new(self.travel.time_between_floors, self.travel.time_at_floor)
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_config(config_str: &str) -> SimResult<Config> {
    let config: Config = toml::from_str(config_str)
        .map_err(|e| SimError::Config(format!("failed to parse configuration: {}", e)))?;

    // Reject bad time constants at load time rather than mid run
    config.travel_params()?;
    Ok(config)
}

/**
 * Load the configuration file.
 *
 * Without an explicit path, `config.toml` in the working directory is used if
 * it exists and the defaults otherwise. An explicit path must exist.
 */
pub fn load_config(path: Option<&Path>) -> SimResult<Config> {
    let path = match path {
        Some(path) => path,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if !default_path.exists() {
                return Ok(Config::default());
            }
            default_path
        }
    };

    let config_str = fs::read_to_string(path)
        .map_err(|e| SimError::Config(format!("failed to read {}: {}", path.display(), e)))?;
    parse_config(&config_str)
}
