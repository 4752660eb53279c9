//! Core entity definitions for Taskdeck.
//!
//! This crate defines the data types shared across the Taskdeck workspace:
//! users, tasks, and the fixed category/priority/status vocabularies.

mod task;
mod user;

pub use task::*;
pub use user::*;
