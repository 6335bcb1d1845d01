//! Delay sources for race operations.
//!
//! The race engine never touches a global random generator; it draws every
//! delay from an injected [`DelaySource`]. Within one race the defuse delay is
//! drawn before the bomb delay.

use std::collections::VecDeque;

use timebomb_types::{DelayMs, DelayRange};

pub trait DelaySource: Send {
    /// Draw one delay inside `range`.
    fn draw(&mut self, range: DelayRange) -> DelayMs;
}

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDelays;

impl DelaySource for RandomDelays {
    fn draw(&mut self, range: DelayRange) -> DelayMs {
        range.sample(rand::random::<f64>())
    }
}

/// Replays a fixed sequence of delays, then falls back to [`RandomDelays`].
///
/// Scripted values are returned as given, even outside `range`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDelays {
    script: VecDeque<DelayMs>,
    fallback: RandomDelays,
}

impl ScriptedDelays {
    #[must_use]
    pub fn new(delays: impl IntoIterator<Item = u64>) -> Self {
        Self {
            script: delays.into_iter().map(DelayMs::new).collect(),
            fallback: RandomDelays,
        }
    }

    /// Script whole races as `(defuse, bomb)` pairs.
    #[must_use]
    pub fn races(races: &[(u64, u64)]) -> Self {
        Self::new(races.iter().flat_map(|&(defuse, bomb)| [defuse, bomb]))
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DelaySource for ScriptedDelays {
    fn draw(&mut self, range: DelayRange) -> DelayMs {
        match self.script.pop_front() {
            Some(delay) => delay,
            None => self.fallback.draw(range),
        }
    }
}
