//! Process-local location store.
//!
//! Backs the `memory` backend for local runs and the use case / API tests.
//! Ids come from [`PushIdGenerator`], so id order is creation order, same as
//! the Firebase backend.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use friendmap_domain::{LocationSet, NewLocation, RecordId};
use tokio::sync::RwLock;

use crate::infrastructure::clock::{SystemClock, SystemRandom};
use crate::infrastructure::ports::{ClockPort, LocationStore, RandomPort, StoreError};
use crate::infrastructure::push_id::PushIdGenerator;

pub struct InMemoryLocationStore {
    records: RwLock<LocationSet>,
    ids: PushIdGenerator,
    available: AtomicBool,
}

impl InMemoryLocationStore {
    pub fn new(clock: Arc<dyn ClockPort>, random: Arc<dyn RandomPort>) -> Self {
        Self {
            records: RwLock::new(LocationSet::new()),
            ids: PushIdGenerator::new(clock, random),
            available: AtomicBool::new(true),
        }
    }

    /// Toggle a simulated outage. While unavailable every call fails with
    /// `StoreError::Unavailable` and the stored records are left untouched.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self, operation: &'static str) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::unavailable(operation, "in-memory store is offline"))
        }
    }
}

impl Default for InMemoryLocationStore {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(SystemRandom))
    }
}

#[async_trait]
impl LocationStore for InMemoryLocationStore {
    async fn list_all(&self) -> Result<LocationSet, StoreError> {
        self.check_available("list_all")?;
        Ok(self.records.read().await.clone())
    }

    async fn add(&self, location: &NewLocation) -> Result<RecordId, StoreError> {
        self.check_available("add")?;
        let id = self.ids.next_id().map_err(StoreError::serialization)?;
        self.records
            .write()
            .await
            .insert(id.clone(), location.clone().into_record(id.clone()));
        tracing::debug!(record_id = %id, "Stored location in memory");
        Ok(id)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), StoreError> {
        self.check_available("delete")?;
        self.records.write().await.remove(id);
        Ok(())
    }
}
