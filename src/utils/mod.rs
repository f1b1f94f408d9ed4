//! Utility functions shared across the crate.

mod clock;
mod format;

pub use clock::{Clock, FixedClock, SystemClock};
pub use format::{format_datetime, render_markup};
