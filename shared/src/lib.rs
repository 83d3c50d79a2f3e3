//! Shared types for the shop service
//!
//! Document models stored in the shop collection, the `type` tag that tells
//! them apart, and identifier generation.

pub mod models;
pub mod util;

// Re-exports
pub use models::{DecodeError, Document, Entity, Kind};
pub use serde::{Deserialize, Serialize};
