/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::error::SimResult;
use crate::shared::{Floor, TravelParams};

/// Time to travel between two floors. Symmetric in direction.
pub fn travel_time(from: Floor, to: Floor, time_between_floors: f64) -> f64 {
    (to as i64 - from as i64).abs() as f64 * time_between_floors
}

/// Time spent waiting at the floors of a path, the start floor included.
pub fn dwell_time(path: &[Floor], time_at_floor: f64) -> f64 {
    path.len() as f64 * time_at_floor
}

/**
 * Total time to run through `path` in order.
 *
 * `path` is expected to start with the start floor. The time constants are
 * validated first; nothing is computed for invalid ones.
 */
pub fn accumulate(path: &[Floor], time_between_floors: f64, time_at_floor: f64) -> SimResult<f64> {
    let params = TravelParams::new(time_between_floors, time_at_floor)?;

    let travel: f64 = path
        .windows(2)
        .map(|pair| travel_time(pair[0], pair[1], params.time_between_floors))
        .sum();

    Ok(travel + dwell_time(path, params.time_at_floor))
}
