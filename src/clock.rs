//! Timestamp source for writes.
//!
//! "Latest" reads order by `created_at` / `updated_at`, so two writes must never
//! share a timestamp. Values are truncated to microseconds to match what
//! PostgreSQL stores, then bumped past the previous value when the wall clock
//! has not moved (or moved backwards).

use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MonotonicClock {
    last: Mutex<Option<DateTime<Utc>>>,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next timestamp, strictly greater than any previously returned by this clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.advance(Utc::now())
    }

    fn advance(&self, wall: DateTime<Utc>) -> DateTime<Utc> {
        let step = TimeDelta::microseconds(1);
        let wall = wall.duration_trunc(step).unwrap_or(wall);
        let mut last = self.last.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let next = match *last {
            Some(prev) if wall <= prev => prev + step,
            _ => wall,
        };
        *last = Some(next);
        next
    }
}
