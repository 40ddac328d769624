//! Location use cases.
//!
//! The view controller's side of the store: one snapshot per render cycle,
//! and the two mutations a user can trigger from the page.

mod add_location;
mod delete_location;
mod load_snapshot;

use std::sync::Arc;

use crate::infrastructure::ports::LocationStore;

pub use add_location::{AddLocation, AddLocationInput, AddOutcome};
pub use delete_location::DeleteLocation;
pub use load_snapshot::{LoadSnapshot, LocationSnapshot, UNAVAILABLE_MESSAGE};

/// Container for location use cases.
pub struct LocationUseCases {
    pub snapshot: Arc<LoadSnapshot>,
    pub add: Arc<AddLocation>,
    pub delete: Arc<DeleteLocation>,
}

impl LocationUseCases {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self {
            snapshot: Arc::new(LoadSnapshot::new(store.clone())),
            add: Arc::new(AddLocation::new(store.clone())),
            delete: Arc::new(DeleteLocation::new(store)),
        }
    }
}
