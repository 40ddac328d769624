//! Chronologically ordered push ids.
//!
//! Same shape as the ids the Firebase Realtime Database assigns on push:
//! 8 characters of millisecond timestamp followed by 12 random characters,
//! all drawn from a 64-character alphabet in ASCII order. Sorting ids
//! lexically therefore sorts them by creation time.

use std::sync::{Arc, Mutex, PoisonError};

use friendmap_domain::{DomainError, RecordId};

use crate::infrastructure::ports::{ClockPort, RandomPort};

/// Alphabet in ASCII order.
const PUSH_CHARS: &[u8; 64] = b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

const TIMESTAMP_LEN: usize = 8;
const RANDOM_LEN: usize = 12;

#[derive(Default)]
struct PushIdState {
    last_millis: i64,
    last_random: [u8; RANDOM_LEN],
}

/// Generates strictly increasing push ids.
pub struct PushIdGenerator {
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
    state: Mutex<PushIdState>,
}

impl PushIdGenerator {
    pub fn new(clock: Arc<dyn ClockPort>, random: Arc<dyn RandomPort>) -> Self {
        Self {
            clock,
            random,
            state: Mutex::new(PushIdState::default()),
        }
    }

    pub fn next_id(&self) -> Result<RecordId, DomainError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        // A clock that steps backwards reuses the last timestamp.
        let now = self.clock.now().timestamp_millis().max(state.last_millis);
        let duplicate = now == state.last_millis;
        state.last_millis = now;

        if duplicate {
            increment(&mut state.last_random);
        } else {
            for slot in state.last_random.iter_mut() {
                *slot = self.random.gen_range(0, 63) as u8;
            }
        }

        let mut id = String::with_capacity(TIMESTAMP_LEN + RANDOM_LEN);
        id.push_str(&encode_timestamp(now));
        id.extend(
            state
                .last_random
                .iter()
                .map(|&i| PUSH_CHARS[usize::from(i & 63)] as char),
        );

        RecordId::new(id)
    }
}

fn encode_timestamp(millis: i64) -> String {
    let mut remaining = millis.max(0);
    let mut chars = [b'-'; TIMESTAMP_LEN];
    for slot in chars.iter_mut().rev() {
        *slot = PUSH_CHARS[(remaining % 64) as usize];
        remaining /= 64;
    }
    chars.iter().map(|&c| c as char).collect()
}

/// Add one to the random suffix, carrying from the right.
fn increment(random: &mut [u8; RANDOM_LEN]) {
    for slot in random.iter_mut().rev() {
        if *slot == 63 {
            *slot = 0;
        } else {
            *slot += 1;
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, FixedRandom, SystemRandom};
    use crate::infrastructure::ports::MockClockPort;
    use chrono::{TimeZone, Utc};

    #[test]
    fn ids_are_twenty_characters() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap());
        let ids = PushIdGenerator::new(Arc::new(clock), Arc::new(SystemRandom));
        let id = ids.next_id().unwrap();
        assert_eq!(id.as_str().len(), 20);
        assert!(id.as_str().bytes().all(|b| PUSH_CHARS.contains(&b)));
    }

    #[test]
    fn same_millisecond_ids_increase() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap());
        let ids = PushIdGenerator::new(Arc::new(clock), Arc::new(FixedRandom(7)));

        let first = ids.next_id().unwrap();
        let second = ids.next_id().unwrap();
        let third = ids.next_id().unwrap();
        assert!(first < second);
        assert!(second < third);
        assert_eq!(&first.as_str()[..8], &second.as_str()[..8]);
    }

    #[test]
    fn later_timestamps_sort_after_earlier_ones() {
        let mut clock = MockClockPort::new();
        let mut seq = mockall::Sequence::new();
        let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 1).unwrap();
        clock
            .expect_now()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move || t0);
        clock
            .expect_now()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move || t1);

        // High random suffix first, low suffix second: timestamp must dominate.
        let ids = PushIdGenerator::new(Arc::new(clock), Arc::new(FixedRandom(63)));
        let first = ids.next_id().unwrap();
        let second = ids.next_id().unwrap();
        assert!(first < second);
    }

    #[test]
    fn clock_stepping_back_keeps_order() {
        let mut clock = MockClockPort::new();
        let mut seq = mockall::Sequence::new();
        let later = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 5).unwrap();
        let earlier = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 1).unwrap();
        clock
            .expect_now()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move || later);
        clock
            .expect_now()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move || earlier);

        let ids = PushIdGenerator::new(Arc::new(clock), Arc::new(FixedRandom(0)));
        let first = ids.next_id().unwrap();
        let second = ids.next_id().unwrap();
        assert!(first < second);
    }

    #[test]
    fn increment_carries() {
        let mut random = [0u8; RANDOM_LEN];
        random[RANDOM_LEN - 1] = 63;
        increment(&mut random);
        assert_eq!(random[RANDOM_LEN - 1], 0);
        assert_eq!(random[RANDOM_LEN - 2], 1);
    }

    #[test]
    fn timestamp_encoding_is_order_preserving() {
        assert!(encode_timestamp(1_000) < encode_timestamp(1_001));
        assert!(encode_timestamp(63) < encode_timestamp(64));
        assert_eq!(encode_timestamp(0), "--------");
    }
}
