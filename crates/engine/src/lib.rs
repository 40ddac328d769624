//! Friend Map Engine library.
//!
//! Server-side code for the friend houses map.
//!
//! ## Structure
//!
//! - `use_cases/` - Render cycle and mutations against the location store
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `views/` - Page, plot and card rendering
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;
pub mod views;

pub use app::App;
