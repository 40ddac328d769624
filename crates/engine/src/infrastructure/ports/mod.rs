//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - The location store (could swap Firebase -> anything with list/push/delete)
//! - Clock/Random (for testing)

mod error;
mod repos;
mod testing;

// =============================================================================
// Store Ports
// =============================================================================
pub use repos::LocationStore;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::MockLocationStore;

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::StoreError;
