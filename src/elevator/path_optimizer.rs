/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Floor;

/***************************************/
/*               Enums                 */
/***************************************/

/// Order in which the two segments around the start floor are visited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sweep {
    UpOnly,
    DownOnly,
    DownThenUp,
    UpThenDown,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Pick the sweep from the farthest excursion on each side of the start floor.
 *
 * `lower` and `upper` must be sorted ascending. Equal excursions go down first.
 */
pub fn choose_sweep(start_floor: Floor, lower: &[Floor], upper: &[Floor]) -> Sweep {
    let max_lower = lower.first().map_or(0, |&floor| start_floor as i64 - floor as i64);
    let max_upper = upper.last().map_or(0, |&floor| floor as i64 - start_floor as i64);

    if max_lower == 0 {
        Sweep::UpOnly
    } else if max_upper == 0 {
        Sweep::DownOnly
    } else if max_lower <= max_upper {
        Sweep::DownThenUp
    } else {
        Sweep::UpThenDown
    }
}

/**
 * Reorder the stops to shorten the trip from `start_floor`.
 *
 * Duplicates and stops equal to the start floor are removed. The floors below
 * and above the start are each visited in one sweep, the side with the shorter
 * excursion first. This is a greedy heuristic, not a shortest-path search.
 */
pub fn optimize(start_floor: Floor, stops: &[Floor]) -> Vec<Floor> {
    let mut unique = stops.to_vec();
    unique.sort_unstable();
    unique.dedup();

    let lower: Vec<Floor> = unique.iter().copied().filter(|&floor| floor < start_floor).collect();
    let upper: Vec<Floor> = unique.iter().copied().filter(|&floor| floor > start_floor).collect();

    let sweep = choose_sweep(start_floor, &lower, &upper);
    debug!(
        "Optimizing {} stops from floor {}: {:?}",
        unique.len(),
        start_floor,
        sweep
    );

    match sweep {
        Sweep::UpOnly => upper,
        Sweep::DownOnly => lower.into_iter().rev().collect(),
        Sweep::DownThenUp => lower.into_iter().chain(upper).collect(),
        Sweep::UpThenDown => upper.into_iter().chain(lower).collect(),
    }
}
