//! Core domain models and logic for the Roster user directory
//!
//! This crate contains the domain types plus the two request-independent
//! logic components: page/query resolution for the paginated user list
//! and the debounced search committer.

pub mod debounce;
pub mod error;
pub mod pagination;
pub mod user;

pub use error::{Error, Result};
