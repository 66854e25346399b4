// src/utils/mod.rs
pub mod error;
pub mod logging;

pub use error::{AppError, SourceError, StorageError}; // Re-export error types for convenience
