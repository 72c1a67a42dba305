//! Wall-clock source for stamping snapshots that arrive without `capturedAt`.

use crate::infrastructure::ports::ClockPort;
use chrono::{DateTime, Utc};

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
