// SPDX-FileCopyrightText: 2026 Cetak Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A pinnable clock for time-dependent tests.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use cetak_core::traits::clock::Clock;

/// A clock that returns a fixed moment until moved.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Parse an RFC 3339 timestamp into a pinned clock.
    pub fn at(rfc3339: &str) -> Self {
        let now = DateTime::parse_from_rfc3339(rfc3339)
            .expect("valid RFC 3339 timestamp")
            .with_timezone(&Utc);
        Self::new(now)
    }

    /// Move the clock to a new moment.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().expect("lock poisoned") = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_moment_is_returned_until_moved() {
        let clock = FixedClock::at("2026-08-27T03:00:00+00:00");
        assert_eq!(clock.now().to_rfc3339(), "2026-08-27T03:00:00+00:00");

        let later = clock.now() + chrono::Duration::hours(5);
        clock.set(later);
        assert_eq!(clock.now(), later);
    }
}
