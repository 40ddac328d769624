//! Use cases - User story orchestration.
//!
//! Each use case owns the port handles it needs and exposes `execute`.
//! HTTP handlers stay thin and only translate between forms, use cases, and views.

pub mod locations;

pub use locations::LocationUseCases;
