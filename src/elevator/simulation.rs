/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::path_optimizer::optimize;
use crate::elevator::range_filter::{filter, FilteredStops};
use crate::elevator::time_accumulator::accumulate;
use crate::shared::error::SimResult;
use crate::shared::{BuildingBounds, Floor, TravelParams, Trip};

/**
 * Everything needed for one run of the car.
 *
 * # Fields
 * - `start_floor`: Floor the car stands at when the run begins.
 * - `stops`:       Requested stops, duplicates and any order allowed.
 * - `optimize`:    Reorder the stops instead of visiting them as given.
 * - `params`:      Travel and dwell time constants.
 * - `bounds`:      Optional building limits.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub start_floor: Floor,
    pub stops: Vec<Floor>,
    pub optimize: bool,
    pub params: TravelParams,
    pub bounds: BuildingBounds,
}

impl TripRequest {
    pub fn new(start_floor: Floor, stops: Vec<Floor>) -> TripRequest {
        TripRequest {
            start_floor,
            stops,
            optimize: false,
            params: TravelParams::default(),
            bounds: BuildingBounds::default(),
        }
    }
}

/// Filter, optionally optimize, and time the requested stops.
pub fn operate(request: &TripRequest) -> SimResult<Trip> {
    let FilteredStops { kept, dropped } = if request.bounds.is_unbounded() {
        FilteredStops {
            kept: request.stops.clone(),
            dropped: Vec::new(),
        }
    } else {
        filter(request.start_floor, &request.stops, &request.bounds)?
    };

    // Duplicates are only collapsed when optimizing. Unoptimized runs visit
    // every requested stop, repeats included.
    let stops = if request.optimize {
        optimize(request.start_floor, &kept)
    } else {
        kept
    };

    let mut path = Vec::with_capacity(stops.len() + 1);
    path.push(request.start_floor);
    path.extend(stops);

    let total_time = accumulate(
        &path,
        request.params.time_between_floors,
        request.params.time_at_floor,
    )?;
    debug!("Path {:?} takes {}", path, total_time);

    Ok(Trip {
        total_time,
        path,
        dropped,
    })
}
