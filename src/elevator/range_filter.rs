/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::error::{SimError, SimResult};
use crate::shared::{BuildingBounds, Floor};

/**
 * Stops left after applying the building bounds.
 *
 * # Fields
 * - `kept`:    Stops inside the bounds, in requested order.
 * - `dropped`: Stops outside the bounds, in requested order.
 */
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredStops {
    pub kept: Vec<Floor>,
    pub dropped: Vec<Floor>,
}

/***************************************/
/*             Public API              */
/***************************************/

/// Verify that the start floor lies inside the bounds and the bounds are ordered.
pub fn check_bounds(start_floor: Floor, bounds: &BuildingBounds) -> SimResult<()> {
    if let Some(top) = bounds.top_floor {
        if start_floor > top {
            return Err(SimError::StartAboveTop {
                start: start_floor,
                top,
            });
        }
    }
    if let Some(bottom) = bounds.bottom_floor {
        if start_floor < bottom {
            return Err(SimError::StartBelowBottom {
                start: start_floor,
                bottom,
            });
        }
    }
    if let (Some(top), Some(bottom)) = (bounds.top_floor, bounds.bottom_floor) {
        if bottom >= top {
            return Err(SimError::BottomNotBelowTop { top, bottom });
        }
    }
    Ok(())
}

/**
 * Split the requested stops into those inside the building and those outside.
 *
 * A stop equal to the top or bottom floor is kept. Fails if the bounds are
 * inconsistent with each other or with the start floor.
 */
pub fn filter(start_floor: Floor, stops: &[Floor], bounds: &BuildingBounds) -> SimResult<FilteredStops> {
    check_bounds(start_floor, bounds)?;

    let (kept, dropped): (Vec<Floor>, Vec<Floor>) =
        stops.iter().partition(|&&floor| bounds.contains(floor));

    Ok(FilteredStops { kept, dropped })
}
