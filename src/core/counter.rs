//! Statistic counter animation
//!
//! A statistic such as `"25M+"` counts up from zero when it scrolls into
//! view. The display string is split into a number (its digits) and a
//! suffix (everything else). A `K` or `M` in the suffix scales the number
//! and selects the compact rendering (`12.5K`, `3.0M`).
//!
//! The animation is a pure function of elapsed time: it advances in fixed
//! frames and lands exactly on the target at the end.

use std::time::Duration;

/// Total animation length
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

/// Length of one animation frame
pub const COUNTER_FRAME: Duration = Duration::from_millis(16);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Unit {
    One,
    Thousand,
    Million,
}

impl Unit {
    fn scale(self) -> u64 {
        match self {
            Unit::One => 1,
            Unit::Thousand => 1_000,
            Unit::Million => 1_000_000,
        }
    }
}

/// Count-up animation for one statistic
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    unit: Unit,
    suffix: String,
}

impl CounterAnimation {
    /// Parses a statistic display string
    ///
    /// Returns `None` if the text contains no digits.
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        let number: u64 = digits.parse().ok()?;

        let suffix: String = text
            .chars()
            .filter(|c| !c.is_ascii_digit() && *c != ',')
            .collect();

        let unit = if suffix.contains('M') {
            Unit::Million
        } else if suffix.contains('K') {
            Unit::Thousand
        } else {
            Unit::One
        };

        let suffix = match unit {
            Unit::One => suffix,
            Unit::Thousand => suffix.replacen('K', "", 1),
            Unit::Million => suffix.replacen('M', "", 1),
        };

        Some(Self {
            target: number.saturating_mul(unit.scale()),
            unit,
            suffix,
        })
    }

    /// Final counter value
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Counter value after `elapsed` time
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        let total_frames = (COUNTER_DURATION.as_millis() / COUNTER_FRAME.as_millis()) as u64;
        let frames = (elapsed.as_millis() / COUNTER_FRAME.as_millis()) as u64;

        if frames >= total_frames {
            return self.target;
        }

        let current = self.target as f64 * frames as f64 / total_frames as f64;
        (current.floor() as u64).min(self.target)
    }

    /// Display string after `elapsed` time
    pub fn display_at(&self, elapsed: Duration) -> String {
        self.render(self.value_at(elapsed))
    }

    /// Returns true once the animation has reached its target
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= COUNTER_DURATION
    }

    fn render(&self, value: u64) -> String {
        match self.unit {
            Unit::Million => format!("{:.1}M{}", value as f64 / 1_000_000.0, self.suffix),
            Unit::Thousand => format!("{:.1}K{}", value as f64 / 1_000.0, self.suffix),
            Unit::One => format!("{}{}", value, self.suffix),
        }
    }
}
