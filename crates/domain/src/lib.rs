//! Friend Map domain.
//!
//! Location records on a bounded 2D plane, plus the value objects that keep
//! them valid by construction. This crate does no I/O.

extern crate self as friendmap_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{LocationRecord, LocationSet, NewLocation};
pub use error::DomainError;
pub use ids::RecordId;
pub use value_objects::{
    Coordinate, LocationName, PlanePoint, COORDINATE_STEP, DEFAULT_COORDINATE, PLANE_MAX,
    PLANE_MIN,
};
