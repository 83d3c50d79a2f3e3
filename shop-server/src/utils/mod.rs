//! Utilities - HTTP error type and logging setup

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult, ErrorBody};
