//! HTTP request handlers for the gateway endpoints.
//!
//! - [`insert`] - Index a JSON document
//! - [`count`] - Count documents across all indices
//! - [`health`] - Health and probe endpoints

pub mod count;
pub mod health;
pub mod insert;

// Re-export handlers for convenience
pub use count::count_handler;
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use insert::insert_handler;
