//! Domain entities - Core business objects with identity

mod location_record;

pub use location_record::{LocationRecord, LocationSet, NewLocation};
