/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Floor;

/**
 * Every way a simulation can fail.
 *
 * The bound and configuration variants are fatal input errors: the run is
 * aborted and nothing is produced. The parameter variants cover time values
 * and numeric input that cannot be used.
 */
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("top floor ({top}) must be greater than or equal to the starting floor ({start})")]
    StartAboveTop { start: Floor, top: Floor },

    #[error("bottom floor ({bottom}) must be less than or equal to the starting floor ({start})")]
    StartBelowBottom { start: Floor, bottom: Floor },

    #[error("bottom floor ({bottom}) must be less than the top floor ({top})")]
    BottomNotBelowTop { top: Floor, bottom: Floor },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{name} must be {requirement}, got {value}")]
    InvalidParameter {
        name: &'static str,
        requirement: &'static str,
        value: f64,
    },

    #[error("{0} is not a valid number")]
    InvalidNumber(String),
}

impl SimError {
    /// True for errors caused by inconsistent building or configuration input.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SimError::StartAboveTop { .. }
                | SimError::StartBelowBottom { .. }
                | SimError::BottomNotBelowTop { .. }
                | SimError::Config(_)
        )
    }
}

pub type SimResult<T> = Result<T, SimError>;
