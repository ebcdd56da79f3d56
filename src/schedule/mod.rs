//! Explicit timer registrations.
//!
//! Countdowns and delayed steps are owned by whoever scheduled them and are
//! cancelled through their [`TimerId`], never left running in the
//! background.

mod scheduler;

pub use scheduler::{Scheduler, TimerId};
