pub mod error;
#[macro_use]
pub mod macros;
pub mod structs;

pub use error::SimError;
pub use structs::BuildingBounds;
pub use structs::Floor;
pub use structs::TravelParams;
pub use structs::Trip;
