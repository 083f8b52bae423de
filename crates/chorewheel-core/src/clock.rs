//! Calendar-day clock seam.

use chrono::{Local, NaiveDate};

/// Source of "today" as a local calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local time zone of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
