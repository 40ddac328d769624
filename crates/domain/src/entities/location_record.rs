//! Location record entity - A named point on the plane
//!
//! Records are created by the store (which assigns the id), never edited,
//! and removed only by explicit delete.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::RecordId;
use crate::value_objects::{LocationName, PlanePoint};

/// Every record the store currently holds, keyed by id.
///
/// Iteration follows id order; for push ids that is creation order.
pub type LocationSet = BTreeMap<RecordId, LocationRecord>;

/// Payload written under a fresh id.
///
/// Wire shape is `{ "name": string, "x": number, "y": number }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLocation {
    pub name: LocationName,
    #[serde(flatten)]
    pub point: PlanePoint,
}

impl NewLocation {
    pub fn new(name: LocationName, point: PlanePoint) -> Self {
        Self { name, point }
    }

    /// Attach the id the store assigned.
    pub fn into_record(self, id: RecordId) -> LocationRecord {
        LocationRecord {
            id,
            name: self.name,
            point: self.point,
        }
    }
}

/// A stored location.
///
/// Simple data struct with public fields: every invariant lives in the field
/// types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: RecordId,
    pub name: LocationName,
    #[serde(flatten)]
    pub point: PlanePoint,
}

impl LocationRecord {
    /// True when name and coordinates equal the given payload.
    pub fn matches(&self, new: &NewLocation) -> bool {
        self.name == new.name && self.point == new.point
    }
}
