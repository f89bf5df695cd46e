//! Web handlers for the user directory

pub mod api;
pub mod users;
