/***************************************/
/*        3rd party libraries          */
/***************************************/
use clap::Parser;
use std::path::PathBuf;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Config;
use crate::elevator::TripRequest;
use crate::input::positive_time;
use crate::shared::error::SimResult;
use crate::shared::{BuildingBounds, Floor, TravelParams};

/**
 * Command line arguments.
 *
 * Time values and building bounds given here override the configuration file.
 */
#[derive(Parser, Debug)]
#[clap(name = "elevator_sim", version, about = "Simulate an elevator visiting a list of floors")]
#[clap(allow_negative_numbers = true)]
pub struct Cli {
    /// Floor where the elevator is located at the start of the simulation
    #[clap(short = 's', long = "start-floor", alias = "start_floor", value_parser)]
    pub start_floor: Floor,

    /// Comma separated list of floors at which to stop
    #[clap(short = 'f', long, allow_hyphen_values = true)]
    pub floors: String,

    /// Time in seconds to travel between each floor [default: 10]
    #[clap(short = 't', long = "time-between-floors", alias = "time_between_floors", value_parser = positive_time)]
    pub time_between_floors: Option<f64>,

    /// Time in seconds spent waiting at each floor [default: 0]
    #[clap(short = 'w', long = "time-at-floor", alias = "time_at_floor", value_parser = positive_time)]
    pub time_at_floor: Option<f64>,

    /// Highest floor in the building
    #[clap(short = 'm', long = "top-floor", alias = "top_floor", value_parser)]
    pub top_floor: Option<Floor>,

    /// Lowest floor in the building
    #[clap(short = 'b', long = "bottom-floor", alias = "bottom_floor", value_parser)]
    pub bottom_floor: Option<Floor>,

    /// Optimize the traveled path
    #[clap(short = 'o', long, action)]
    pub optimize: bool,

    /// Print the trip as JSON
    #[clap(long, action)]
    pub json: bool,

    /// Configuration file [default: config.toml if present]
    #[clap(short = 'c', long, value_parser)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Combine the arguments with the configuration into a request for `stops`.
    pub fn trip_request(&self, config: &Config, stops: Vec<Floor>) -> SimResult<TripRequest> {
        let params = TravelParams::new(
            self.time_between_floors
                .unwrap_or(config.travel.time_between_floors),
            self.time_at_floor.unwrap_or(config.travel.time_at_floor),
        )?;
        let bounds = BuildingBounds::new(
            self.top_floor.or(config.building.top_floor),
            self.bottom_floor.or(config.building.bottom_floor),
        );

        Ok(TripRequest {
            start_floor: self.start_floor,
            stops,
            optimize: self.optimize,
            params,
            bounds,
        })
    }
}
