//! Value objects - Immutable objects defined by their attributes

mod coordinate;
mod names;

pub use coordinate::{
    Coordinate, PlanePoint, COORDINATE_STEP, DEFAULT_COORDINATE, PLANE_MAX, PLANE_MIN,
};
pub use names::LocationName;
