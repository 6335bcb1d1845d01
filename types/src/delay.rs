use std::fmt;
use std::ops::{Add, AddAssign};
use std::time::Duration;

/// A whole number of milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DelayMs(u64);

impl DelayMs {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(ms: u64) -> Self {
        Self(ms)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl fmt::Display for DelayMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for DelayMs {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for DelayMs {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// A bounded random delay: `base + ceil(u * spread)` for a unit sample `u`.
///
/// The random part is never zero, so every draw lies in `[base + 1, base + spread]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    base: u64,
    spread: u64,
}

impl DelayRange {
    #[must_use]
    pub const fn new(base: u64, spread: u64) -> Self {
        assert!(spread > 0, "DelayRange spread must be positive");
        Self { base, spread }
    }

    #[must_use]
    pub const fn base(self) -> u64 {
        self.base
    }

    #[must_use]
    pub const fn spread(self) -> u64 {
        self.spread
    }

    #[must_use]
    pub const fn min(self) -> DelayMs {
        DelayMs(self.base + 1)
    }

    #[must_use]
    pub const fn max(self) -> DelayMs {
        DelayMs(self.base + self.spread)
    }

    /// Map a unit sample in `[0, 1)` onto this range.
    ///
    /// Samples outside the unit interval are clamped first.
    #[must_use]
    pub fn sample(self, unit: f64) -> DelayMs {
        let unit = if unit.is_nan() { 0.0 } else { unit.clamp(0.0, 1.0) };
        let offset = (unit * self.spread as f64).ceil() as u64;
        DelayMs(self.base + offset.clamp(1, self.spread))
    }

    #[must_use]
    pub fn contains(self, delay: DelayMs) -> bool {
        (self.min()..=self.max()).contains(&delay)
    }
}

/// Timing constants for a session.
///
/// There is no runtime configuration; the engine takes this struct so tests can
/// pin or shorten the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceTimings {
    pub defuse: DelayRange,
    pub bomb: DelayRange,
    /// Delay before the post-loop failure settles.
    pub terminal_delay: DelayMs,
}

impl RaceTimings {
    pub const DEFAULT: Self = Self {
        defuse: DelayRange::new(500, 500),
        bomb: DelayRange::new(800, 200),
        terminal_delay: DelayMs::new(1000),
    };
}

impl Default for RaceTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}
