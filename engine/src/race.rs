//! Timer race engine.
//!
//! A race starts a defuse and a bomb timer together and settles with whichever
//! fires first. Both operations share a [`SettleGuard`]; only the operation that
//! claims it produces a [`Settlement`]. The loser is dropped once the race
//! settles, and an operation that fires after the guard was claimed never
//! resolves.
//!
//! Tie-break: when both timers are due in the same tick, defuse (registered
//! first) wins because the selection polls it first.

use std::future::pending;
use std::sync::atomic::{AtomicBool, Ordering};

use timebomb_types::{DelayMs, OperationKind, Polarity, RaceTimings, Settlement};
use tokio::time::sleep;

use crate::delays::DelaySource;

/// First-settler-wins flag shared by the operations of one race.
#[derive(Debug, Default)]
pub struct SettleGuard {
    settled: AtomicBool,
}

impl SettleGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` for exactly one caller.
    pub fn try_claim(&self) -> bool {
        self.settled
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled.load(Ordering::Acquire)
    }
}

/// A single delayed unit of work whose payload is its own delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedOperation {
    kind: OperationKind,
    delay: DelayMs,
}

impl TimedOperation {
    #[must_use]
    pub const fn new(kind: OperationKind, delay: DelayMs) -> Self {
        Self { kind, delay }
    }

    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        self.kind
    }

    #[must_use]
    pub const fn delay(&self) -> DelayMs {
        self.delay
    }

    #[must_use]
    pub const fn polarity(&self) -> Polarity {
        self.kind.polarity()
    }

    /// Wait out the delay, then settle if `guard` is still unclaimed.
    ///
    /// When another operation already claimed `guard` this future stays pending
    /// forever and has no side effect.
    pub async fn settle(self, guard: &SettleGuard) -> Settlement {
        sleep(self.delay.as_duration()).await;
        if !guard.try_claim() {
            return pending().await;
        }
        Settlement::new(self.kind, self.delay)
    }
}

/// Race two operations; `first` wins ties.
pub async fn race_between(first: TimedOperation, second: TimedOperation) -> Settlement {
    let guard = SettleGuard::new();
    tokio::select! {
        biased;
        settlement = first.settle(&guard) => settlement,
        settlement = second.settle(&guard) => settlement,
    }
}

/// Draws delays for each race and runs it.
#[derive(Debug)]
pub struct RaceEngine<D> {
    delays: D,
    timings: RaceTimings,
}

impl<D: DelaySource> RaceEngine<D> {
    #[must_use]
    pub fn new(delays: D, timings: RaceTimings) -> Self {
        Self { delays, timings }
    }

    #[must_use]
    pub fn timings(&self) -> RaceTimings {
        self.timings
    }

    /// Draw the next pair of competitors, defuse first.
    pub fn draw(&mut self) -> (TimedOperation, TimedOperation) {
        let defuse = TimedOperation::new(
            OperationKind::Defuse,
            self.delays.draw(self.timings.defuse),
        );
        let bomb = TimedOperation::new(OperationKind::Bomb, self.delays.draw(self.timings.bomb));
        (defuse, bomb)
    }

    /// Settles after `min(defuse, bomb)` with the winner's kind and delay.
    pub async fn race(&mut self) -> Settlement {
        let (defuse, bomb) = self.draw();
        tracing::trace!(
            defuse_ms = defuse.delay().value(),
            bomb_ms = bomb.delay().value(),
            "Race started"
        );
        let settlement = race_between(defuse, bomb).await;
        tracing::debug!(
            winner = settlement.kind.as_str(),
            value_ms = settlement.value.value(),
            "Race settled"
        );
        settlement
    }
}
