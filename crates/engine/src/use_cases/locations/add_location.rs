//! Add location use case.
//!
//! Turns raw form input into a record: the name is trimmed and must be
//! non-empty, coordinates are clamped onto the plane. An empty name is not an
//! error, the submission is simply dropped.

use std::sync::Arc;

use friendmap_domain::{Coordinate, LocationName, LocationRecord, NewLocation, PlanePoint};
use serde::Deserialize;

use crate::infrastructure::ports::{LocationStore, StoreError};

/// Raw add-form fields, exactly as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddLocationInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub x: String,
    #[serde(default)]
    pub y: String,
}

impl AddLocationInput {
    pub fn new(name: impl Into<String>, x: impl ToString, y: impl ToString) -> Self {
        Self {
            name: name.into(),
            x: x.to_string(),
            y: y.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The record was written; carries what the store now holds.
    Added(LocationRecord),
    /// Name was empty after trimming; the store was not called.
    Skipped,
}

pub struct AddLocation {
    store: Arc<dyn LocationStore>,
}

impl AddLocation {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self { store }
    }

    /// Execute the add location use case.
    ///
    /// # Returns
    /// * `Ok(AddOutcome::Added)` - Record stored under a fresh id
    /// * `Ok(AddOutcome::Skipped)` - Blank name, nothing written
    /// * `Err(StoreError)` - The store call failed
    pub async fn execute(&self, input: AddLocationInput) -> Result<AddOutcome, StoreError> {
        let Ok(name) = LocationName::new(input.name) else {
            tracing::debug!("Ignoring add with blank or invalid name");
            return Ok(AddOutcome::Skipped);
        };
        let point = PlanePoint::new(
            Coordinate::parse_clamped(&input.x),
            Coordinate::parse_clamped(&input.y),
        );
        let location = NewLocation::new(name, point);

        let id = self.store.add(&location).await?;
        tracing::info!(record_id = %id, name = %location.name, point = %point, "Added location");
        Ok(AddOutcome::Added(location.into_record(id)))
    }
}
