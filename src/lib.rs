//! dbclean empties a task-manager REST API of every user and task.
//!
//! It lists each collection by identifier, deletes every record returned,
//! and lists again until the collection is empty.

pub mod api;
pub mod cleaner;
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
