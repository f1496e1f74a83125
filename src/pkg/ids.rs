//! Sources of `ceh_event_id` values.
//!
//! Handlers never touch a global generator; they draw from the [`IdSource`]
//! carried in the app state, which lets tests swap in a seeded or fixed one.

use std::ops::RangeInclusive;
use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Every issued event id is a six digit number.
pub const EVENT_ID_RANGE: RangeInclusive<u32> = 100_000..=999_999;

pub trait IdSource: Send + Sync {
    /// Draws one value uniformly from `range`.
    fn draw(&self, range: RangeInclusive<u32>) -> u32;

    /// Short label reported by the health probe.
    fn kind(&self) -> &'static str {
        "custom"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl IdSource for ThreadRngSource {
    fn draw(&self, range: RangeInclusive<u32>) -> u32 {
        rand::thread_rng().gen_range(range)
    }

    fn kind(&self) -> &'static str {
        "thread_rng"
    }
}

/// Reproducible sequence for a given seed.
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IdSource for SeededSource {
    fn draw(&self, range: RangeInclusive<u32>) -> u32 {
        // a poisoned lock still holds a usable rng
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_range(range)
    }

    fn kind(&self) -> &'static str {
        "seeded"
    }
}

pub fn source_for(seed: Option<u64>) -> Arc<dyn IdSource> {
    match seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded event id source");
            Arc::new(SeededSource::new(seed))
        }
        None => Arc::new(ThreadRngSource),
    }
}

/// Draws an event id, clamping whatever the source returns into [`EVENT_ID_RANGE`].
pub fn next_event_id(source: &dyn IdSource) -> u32 {
    source
        .draw(EVENT_ID_RANGE)
        .clamp(*EVENT_ID_RANGE.start(), *EVENT_ID_RANGE.end())
}

#[cfg(test)]
pub mod testing {
    use std::ops::RangeInclusive;

    use super::IdSource;

    /// Always returns the same value, ignoring the requested range.
    pub struct FixedSource(pub u32);

    impl IdSource for FixedSource {
        fn draw(&self, _range: RangeInclusive<u32>) -> u32 {
            self.0
        }

        fn kind(&self) -> &'static str {
            "fixed"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FixedSource;
    use super::*;

    #[test]
    fn test_thread_rng_stays_in_range() {
        let source = ThreadRngSource;
        for _ in 0..10_000 {
            assert!(EVENT_ID_RANGE.contains(&next_event_id(&source)));
        }
    }

    #[test]
    fn test_seeded_sources_agree() {
        let a = SeededSource::new(7);
        let b = SeededSource::new(7);
        let xs: Vec<u32> = (0..32).map(|_| next_event_id(&a)).collect();
        let ys: Vec<u32> = (0..32).map(|_| next_event_id(&b)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|v| EVENT_ID_RANGE.contains(v)));
    }

    #[test]
    fn test_range_bounds_are_reachable() {
        assert_eq!(next_event_id(&FixedSource(100_000)), 100_000);
        assert_eq!(next_event_id(&FixedSource(999_999)), 999_999);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        assert_eq!(next_event_id(&FixedSource(0)), 100_000);
        assert_eq!(next_event_id(&FixedSource(99_999)), 100_000);
        assert_eq!(next_event_id(&FixedSource(1_000_000)), 999_999);
        assert_eq!(next_event_id(&FixedSource(u32::MAX)), 999_999);
    }

    #[test]
    fn test_source_for_picks_seeded() {
        let a = source_for(Some(3));
        let b = SeededSource::new(3);
        assert_eq!(next_event_id(a.as_ref()), next_event_id(&b));
    }
}
