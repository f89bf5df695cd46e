//! Persistence layer for the Roster user directory
//!
//! This crate provides the SQLite-backed storage manager and the
//! repository implementation for the user list.

pub mod error;
pub mod manager;
pub mod migrations;
pub mod repositories;

pub use error::{Error, Result};
pub use manager::{DatabaseConfig, DatabaseStats, StorageManager};

/// Re-export core types for convenience
pub use roster_core as core;
