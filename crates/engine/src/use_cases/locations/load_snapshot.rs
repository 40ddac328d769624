//! Load snapshot use case.
//!
//! One store read per render cycle. The map and the list render from the same
//! snapshot, so they can never disagree.

use std::sync::Arc;

use friendmap_domain::LocationRecord;

use crate::infrastructure::ports::LocationStore;

/// Message both regions show when the store cannot be read.
pub const UNAVAILABLE_MESSAGE: &str =
    "The location store is unavailable right now. Reload the page to try again.";

/// What one render cycle has to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationSnapshot {
    /// The store answered with no records.
    Empty,
    /// Records in store order.
    Loaded(Vec<LocationRecord>),
    /// The store call failed; nothing stale is kept.
    Unavailable { message: String },
}

pub struct LoadSnapshot {
    store: Arc<dyn LocationStore>,
}

impl LoadSnapshot {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self { store }
    }

    /// Read the whole collection once.
    ///
    /// Store failures are not retried; they become
    /// [`LocationSnapshot::Unavailable`].
    pub async fn execute(&self) -> LocationSnapshot {
        match self.store.list_all().await {
            Ok(set) if set.is_empty() => LocationSnapshot::Empty,
            Ok(set) => LocationSnapshot::Loaded(set.into_values().collect()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load locations");
                LocationSnapshot::Unavailable {
                    message: UNAVAILABLE_MESSAGE.to_string(),
                }
            }
        }
    }
}
