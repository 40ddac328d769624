//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod config;
pub mod firebase;
pub mod memory_store;
pub mod ports;
pub mod push_id;
pub mod service_account;
