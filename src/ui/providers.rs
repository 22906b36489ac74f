//! Injectable clock and randomness
//!
//! The page never reads the wall clock or a random source directly. It asks
//! a `Clock` (reference tokens, chat timestamps) and an `Entropy` (chat
//! reply choice and delay). Tests pass fixed implementations.

use std::time::Duration;

use chrono::{DateTime, Local, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of the current time
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;

    /// Wall-clock label shown next to chat messages (`HH:MM`)
    fn time_label(&self) -> String;
}

/// System wall clock (local time for labels)
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn time_label(&self) -> String {
        Local::now().format("%H:%M").to_string()
    }
}

/// Clock frozen at a fixed instant (labels in UTC)
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    millis: i64,
}

impl FixedClock {
    /// Creates a clock frozen at `millis` since the epoch
    pub fn new(millis: i64) -> Self {
        Self { millis }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }

    fn time_label(&self) -> String {
        DateTime::<Utc>::from_timestamp_millis(self.millis)
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "00:00".to_string())
    }
}

/// Source of randomness for mocked behaviour
pub trait Entropy {
    /// Uniform index in `0..len` (`len` is never zero)
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform extra delay in `0..=max`
    fn jitter(&mut self, max: Duration) -> Duration;
}

/// Seedable pseudo-random source
#[derive(Debug)]
pub struct SeededEntropy {
    rng: StdRng,
}

impl SeededEntropy {
    /// Deterministic source for a given seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Entropy for SeededEntropy {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    fn jitter(&mut self, max: Duration) -> Duration {
        let max = max.as_millis() as u64;
        if max == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(self.rng.gen_range(0..=max))
    }
}

/// Always the same choice and no jitter
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedEntropy {
    index: usize,
}

impl FixedEntropy {
    /// Always picks `index` (clamped to the range asked for)
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Entropy for FixedEntropy {
    fn pick(&mut self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }

    fn jitter(&mut self, _max: Duration) -> Duration {
        Duration::ZERO
    }
}

/// Builds a reference token from a millisecond timestamp
///
/// `REF` followed by the last six digits of the timestamp.
pub fn reference_token(millis: i64) -> String {
    format!("REF{:06}", millis.rem_euclid(1_000_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_token_last_six_digits() {
        assert_eq!(reference_token(1_760_000_123_456), "REF123456");
        assert_eq!(reference_token(1_760_000_000_042), "REF000042");
    }

    #[test]
    fn test_fixed_clock_label() {
        // 1970-01-01 10:30 UTC
        let clock = FixedClock::new(10 * 3_600_000 + 30 * 60_000);
        assert_eq!(clock.time_label(), "10:30");
    }

    #[test]
    fn test_seeded_entropy_is_deterministic() {
        let mut a = SeededEntropy::from_seed(7);
        let mut b = SeededEntropy::from_seed(7);

        for _ in 0..20 {
            assert_eq!(a.pick(5), b.pick(5));
            assert_eq!(
                a.jitter(Duration::from_millis(2000)),
                b.jitter(Duration::from_millis(2000))
            );
        }
    }

    #[test]
    fn test_seeded_entropy_stays_in_range() {
        let mut entropy = SeededEntropy::from_seed(42);
        for _ in 0..100 {
            assert!(entropy.pick(5) < 5);
            assert!(entropy.jitter(Duration::from_millis(10)) <= Duration::from_millis(10));
        }
    }

    #[test]
    fn test_fixed_entropy_clamps() {
        let mut entropy = FixedEntropy::new(9);
        assert_eq!(entropy.pick(5), 4);
        assert_eq!(entropy.jitter(Duration::from_secs(3)), Duration::ZERO);
    }
}
