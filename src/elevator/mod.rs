pub mod path_optimizer;
pub mod range_filter;
pub mod simulation;
pub mod time_accumulator;

mod range_filter_tests;
mod time_accumulator_tests;

pub use simulation::{operate, TripRequest};
