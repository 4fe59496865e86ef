//! System clock adapter.

use chrono::{DateTime, Utc};

use super::ports::ClockPort;

/// Wall-clock implementation of [`ClockPort`].
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
