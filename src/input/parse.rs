/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::error::{SimError, SimResult};
use crate::shared::Floor;

/**
 * Floors read from a comma separated list.
 *
 * # Fields
 * - `floors`:  Tokens that are integers, in input order.
 * - `ignored`: Tokens that are not, reported back to the user.
 */
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFloors {
    pub floors: Vec<Floor>,
    pub ignored: Vec<String>,
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_floor_list(values: &str) -> ParsedFloors {
    let mut parsed = ParsedFloors::default();

    for token in values.split(',') {
        match token.trim().parse::<Floor>() {
            Ok(floor) => parsed.floors.push(floor),
            Err(_) => parsed.ignored.push(token.to_string()),
        }
    }
    parsed
}

/// Parse a time value that must be strictly positive.
pub fn positive_time(value: &str) -> SimResult<f64> {
    let time = value
        .trim()
        .parse::<f64>()
        .map_err(|_| SimError::InvalidNumber(value.to_string()))?;

    if !time.is_finite() {
        return Err(SimError::InvalidNumber(value.to_string()));
    }
    if time <= 0.0 {
        return Err(SimError::InvalidParameter {
            name: "time",
            requirement: "a positive number",
            value: time,
        });
    }
    Ok(time)
}
