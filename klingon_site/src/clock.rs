//! Wall-clock source for values derived at render time.

use chrono::{Datelike, Local};

/// Supplies the calendar year for the footer copyright line.
pub trait Clock {
    /// The calendar year at the moment of the call.
    fn current_year(&self) -> i32;
}

/// Reads the local system time on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Always reports the same year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
