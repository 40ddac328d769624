//! Time and randomness sources behind `ClockPort` / `RandomPort`.
//!
//! Push ids and token expiry read the clock; push ids also draw their
//! random suffix here.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::infrastructure::ports::{ClockPort, RandomPort};

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Clock frozen at one instant.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Always answers the same value, pulled into the requested range.
#[cfg(test)]
pub struct FixedRandom(pub i32);

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        self.0.clamp(min, max)
    }
}
