//! Shared types for the order pricing backend
//!
//! Pure data models used across crates: menu reference data (ingredients,
//! dishes, offers) and the order pricing request/response types. No engine
//! logic lives here.

pub mod models;
pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};
