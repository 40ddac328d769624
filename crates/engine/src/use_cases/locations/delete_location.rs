//! Delete location use case.

use std::sync::Arc;

use friendmap_domain::RecordId;

use crate::infrastructure::ports::{LocationStore, StoreError};

pub struct DeleteLocation {
    store: Arc<dyn LocationStore>,
}

impl DeleteLocation {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self { store }
    }

    /// Remove a record. Deleting an id that is already gone succeeds.
    pub async fn execute(&self, id: &RecordId) -> Result<(), StoreError> {
        self.store.delete(id).await?;
        tracing::info!(record_id = %id, "Deleted location");
        Ok(())
    }
}
