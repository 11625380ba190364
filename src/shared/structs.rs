/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::error::{SimError, SimResult};

/***************************************/
/*       Public data structures        */
/***************************************/
pub type Floor = i32;

pub const DEFAULT_TIME_BETWEEN_FLOORS: f64 = 10.0;
pub const DEFAULT_TIME_AT_FLOOR: f64 = 0.0;

/// Optional top and bottom limits of the building. Both limits are inclusive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct BuildingBounds {
    pub top_floor: Option<Floor>,
    pub bottom_floor: Option<Floor>,
}

impl BuildingBounds {
    pub fn new(top_floor: Option<Floor>, bottom_floor: Option<Floor>) -> BuildingBounds {
        BuildingBounds {
            top_floor,
            bottom_floor,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.top_floor.is_none() && self.bottom_floor.is_none()
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.top_floor.map_or(true, |top| floor <= top)
            && self.bottom_floor.map_or(true, |bottom| floor >= bottom)
    }
}

/**
 * Time constants of a single car.
 *
 * # Fields
 * - `time_between_floors`: Time to travel one floor. Strictly positive.
 * - `time_at_floor`:       Time waited at every floor on the path. Zero or more.
 */
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct TravelParams {
    pub time_between_floors: f64,
    pub time_at_floor: f64,
}

impl TravelParams {
    pub fn new(time_between_floors: f64, time_at_floor: f64) -> SimResult<TravelParams> {
        if !time_between_floors.is_finite() || time_between_floors <= 0.0 {
            return Err(SimError::InvalidParameter {
                name: "time_between_floors",
                requirement: "a positive number",
                value: time_between_floors,
            });
        }
        if !time_at_floor.is_finite() || time_at_floor < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "time_at_floor",
                requirement: "zero or a positive number",
                value: time_at_floor,
            });
        }

        Ok(TravelParams {
            time_between_floors,
            time_at_floor,
        })
    }
}

impl Default for TravelParams {
    fn default() -> Self {
        TravelParams {
            time_between_floors: DEFAULT_TIME_BETWEEN_FLOORS,
            time_at_floor: DEFAULT_TIME_AT_FLOOR,
        }
    }
}

/**
 * Result of one simulated run.
 *
 * # Fields
 * - `total_time`:  Travel time plus dwell time over the whole path.
 * - `path`:        Floors in visiting order, starting with the start floor.
 * - `dropped`:     Requested stops that were outside the building bounds.
 */
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Trip {
    pub total_time: f64,
    pub path: Vec<Floor>,
    pub dropped: Vec<Floor>,
}

impl Trip {
    /// Same format as the plain command line output, e.g. `560 [12, 2, 9, 1, 32]`.
    pub fn summary(&self) -> String {
        format!("{} {:?}", self.total_time, self.path)
    }
}
