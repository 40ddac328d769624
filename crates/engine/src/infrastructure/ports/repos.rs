//! Store port trait for location persistence.

use async_trait::async_trait;
use friendmap_domain::{LocationSet, NewLocation, RecordId};

use super::error::StoreError;

// =============================================================================
// Location Store
// =============================================================================

/// Remote mapping of opaque ids to location records.
///
/// No ordering, locking, or conflict detection across clients: concurrent
/// writers are last-write-wins at the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Fetch the whole collection. An empty or absent collection is an empty set.
    async fn list_all(&self) -> Result<LocationSet, StoreError>;

    /// Write `location` under a freshly generated id and return that id.
    async fn add(&self, location: &NewLocation) -> Result<RecordId, StoreError>;

    /// Remove the record at `id`. Unknown ids are a no-op.
    async fn delete(&self, id: &RecordId) -> Result<(), StoreError>;
}
