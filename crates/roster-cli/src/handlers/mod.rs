//! Command handlers that delegate to `RosterService`.
//!
//! Handlers parse CLI-specific input, call the service and format
//! output for the terminal. They never touch the database directly.

pub mod import;
pub mod init;
pub mod list;
pub mod serve;
pub mod stats;
