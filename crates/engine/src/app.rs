//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    config::StoreBackendConfig,
    firebase::FirebaseLocationStore,
    memory_store::InMemoryLocationStore,
    ports::{LocationStore, StoreError},
};
use crate::use_cases::LocationUseCases;

/// Main application state.
///
/// The store handle lives inside the use cases built on it.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub locations: LocationUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        let use_cases = UseCases {
            locations: LocationUseCases::new(store),
        };
        Self { use_cases }
    }

    /// Build the store for the configured backend and wire the app around it.
    pub fn from_backend(backend: &StoreBackendConfig) -> Result<Self, StoreError> {
        let store: Arc<dyn LocationStore> = match backend {
            StoreBackendConfig::Firebase(firebase) => {
                tracing::info!(
                    database_url = %firebase.database_url,
                    collection = %firebase.collection,
                    credential = firebase.credential.kind(),
                    project_id = ?firebase.credential.project_id(),
                    "Using Firebase location store"
                );
                Arc::new(FirebaseLocationStore::new(firebase)?)
            }
            StoreBackendConfig::Memory => {
                tracing::warn!("Using in-memory location store; records are lost on exit");
                Arc::new(InMemoryLocationStore::default())
            }
        };
        Ok(Self::new(store))
    }
}
