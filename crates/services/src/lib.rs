//! Task lifecycle, profile, and analytics services for Taskdeck.
//!
//! Services sit between the presentation layer and the stores: they validate
//! input at the boundary, enforce the task state machine, and retry busy
//! store calls with a bounded backoff.

mod analytics;
mod error;
mod profile;
mod retry;
mod task;
mod validation;

pub use analytics::*;
pub use error::*;
pub use profile::*;
pub use task::*;
pub use validation::*;
