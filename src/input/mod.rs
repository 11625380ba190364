pub mod parse;

pub use parse::{parse_floor_list, positive_time};
