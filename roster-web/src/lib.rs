//! Web interface for the Roster user directory
//!
//! Server-rendered pages for browsing the user list with pagination and
//! debounced search, plus a small JSON API mirroring the same queries.

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod templates;

pub use error::{Error, Result};
pub use server::{router, WebConfig, WebServer};

/// Re-export core types for convenience
pub use roster_core as core;
pub use roster_storage as storage;
