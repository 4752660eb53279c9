//! Credential handling and sessions for Taskdeck.
//!
//! This crate provides:
//! - Salted SHA-256 password hashing and verification
//! - Registration and login against a `UserStore`
//! - An explicit session object replacing any global logged-in flag

mod error;
mod password;
mod service;
mod session;

pub use error::*;
pub use password::*;
pub use service::*;
pub use session::*;
