//! Persistence layer for Taskdeck.
//!
//! This crate provides the storage abstraction for users and tasks: async
//! `UserStore`/`TaskStore` traits, a SQLite implementation, and an in-memory
//! implementation for tests.

mod config;
mod database;
mod error;
mod memory;
mod rows;
mod sqlite;
mod traits;

pub use config::*;
pub use database::*;
pub use error::*;
pub use memory::*;
pub use sqlite::*;
pub use traits::*;
