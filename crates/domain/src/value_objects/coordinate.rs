//! Plane coordinates
//!
//! The plane is a fixed 500x500 square. Coordinates are whole units and are
//! clamped into bounds at input time; nothing downstream re-validates them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Lower bound of both axes (inclusive)
pub const PLANE_MIN: i64 = 0;

/// Upper bound of both axes (inclusive)
pub const PLANE_MAX: i64 = 500;

/// Value the add form starts with on both axes
pub const DEFAULT_COORDINATE: i64 = 250;

/// Increment used by the numeric form inputs
pub const COORDINATE_STEP: i64 = 10;

/// A single axis value in `[PLANE_MIN, PLANE_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Coordinate(i64);

impl Coordinate {
    /// Create a coordinate, rejecting values outside the plane.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `value` is outside `[0, 500]`.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if !(PLANE_MIN..=PLANE_MAX).contains(&value) {
            return Err(DomainError::validation(format!(
                "Coordinate {} is outside [{}, {}]",
                value, PLANE_MIN, PLANE_MAX
            )));
        }
        Ok(Self(value))
    }

    /// Create a coordinate, pulling out-of-range values onto the nearest bound.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(PLANE_MIN, PLANE_MAX))
    }

    /// Clamp a fractional value, truncating toward zero first.
    ///
    /// Returns `None` for NaN and infinities.
    pub fn from_f64_clamped(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Self::clamped(value.trunc() as i64))
    }

    /// Parse a raw form value.
    ///
    /// Integers are clamped, decimals are truncated then clamped, and empty or
    /// non-numeric text falls back to [`DEFAULT_COORDINATE`].
    pub fn parse_clamped(raw: &str) -> Self {
        let raw = raw.trim();
        if let Ok(value) = raw.parse::<i64>() {
            return Self::clamped(value);
        }
        raw.parse::<f64>()
            .ok()
            .and_then(Self::from_f64_clamped)
            .unwrap_or_default()
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self(DEFAULT_COORDINATE)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Coordinate {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Coordinate> for i64 {
    fn from(value: Coordinate) -> i64 {
        value.0
    }
}

/// A point on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlanePoint {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl PlanePoint {
    pub fn new(x: Coordinate, y: Coordinate) -> Self {
        Self { x, y }
    }

    /// Build a point from raw integers, clamping both axes.
    pub fn clamped(x: i64, y: i64) -> Self {
        Self {
            x: Coordinate::clamped(x),
            y: Coordinate::clamped(y),
        }
    }
}

impl fmt::Display for PlanePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(Coordinate::new(0).unwrap().value(), 0);
        assert_eq!(Coordinate::new(500).unwrap().value(), 500);
        assert!(Coordinate::new(-1).is_err());
        assert!(Coordinate::new(501).is_err());
    }

    #[test]
    fn clamps_onto_nearest_bound() {
        assert_eq!(Coordinate::clamped(-40).value(), 0);
        assert_eq!(Coordinate::clamped(9000).value(), 500);
        assert_eq!(Coordinate::clamped(130).value(), 130);
    }

    #[test]
    fn default_is_plane_center() {
        assert_eq!(Coordinate::default().value(), 250);
        assert_eq!(PlanePoint::default().to_string(), "(250, 250)");
    }

    #[test]
    fn parse_keeps_values_off_the_step_grid() {
        assert_eq!(Coordinate::parse_clamped("123").value(), 123);
    }

    #[test]
    fn parse_truncates_decimals() {
        assert_eq!(Coordinate::parse_clamped("99.9").value(), 99);
        assert_eq!(Coordinate::parse_clamped(" 100.0 ").value(), 100);
    }

    #[test]
    fn parse_clamps_out_of_range() {
        assert_eq!(Coordinate::parse_clamped("-5").value(), 0);
        assert_eq!(Coordinate::parse_clamped("1e9").value(), 500);
    }

    #[test]
    fn parse_falls_back_to_default() {
        assert_eq!(Coordinate::parse_clamped("").value(), 250);
        assert_eq!(Coordinate::parse_clamped("abc").value(), 250);
        assert_eq!(Coordinate::parse_clamped("NaN").value(), 250);
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(Coordinate::from_f64_clamped(f64::INFINITY).is_none());
        assert!(Coordinate::from_f64_clamped(f64::NAN).is_none());
    }

    #[test]
    fn serializes_as_number() {
        let point = PlanePoint::clamped(100, 200);
        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json, serde_json::json!({ "x": 100, "y": 200 }));

        let bad: Result<Coordinate, _> = serde_json::from_str("501");
        assert!(bad.is_err());
    }
}
