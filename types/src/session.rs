//! Session loop state machine.
//!
//! ```text
//! Racing --accumulate--> Accumulating --advance(Success)--> Racing
//!                                     --advance(Failure)--> Exited --fail--> TerminalFailure
//! ```

use std::fmt;

use thiserror::Error;

use crate::{DelayMs, Polarity, Settlement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Racing,
    Accumulating,
    Exited,
    TerminalFailure,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Racing => "racing",
            Phase::Accumulating => "accumulating",
            Phase::Exited => "exited",
            Phase::TerminalFailure => "terminal-failure",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionStateError {
    #[error("cannot {action} a session that is {phase}")]
    InvalidTransition { action: &'static str, phase: Phase },
}

/// Totals of a finished session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionReport {
    /// Sum of every observed settlement, the losing bomb included.
    pub total_elapsed: DelayMs,
    /// Number of races run, the losing one included.
    pub rounds: u32,
}

/// Running accumulator owned by the session loop.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    total_elapsed: DelayMs,
    rounds: u32,
    phase: Phase,
    last: Option<Polarity>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn total_elapsed(&self) -> DelayMs {
        self.total_elapsed
    }

    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Check that another race may start. Does not change the phase.
    pub fn begin_race(&self) -> Result<(), SessionStateError> {
        self.expect_phase(Phase::Racing, "race in")
    }

    /// `Racing -> Accumulating`: add a race settlement to the total, whatever its polarity.
    pub fn accumulate(&mut self, settlement: Settlement) -> Result<DelayMs, SessionStateError> {
        self.expect_phase(Phase::Racing, "accumulate into")?;
        self.total_elapsed += settlement.value;
        self.rounds = self.rounds.saturating_add(1);
        self.last = Some(settlement.polarity());
        self.phase = Phase::Accumulating;
        Ok(self.total_elapsed)
    }

    /// Leave `Accumulating`: back to `Racing` after a success, `Exited` after a failure.
    pub fn advance(&mut self) -> Result<Phase, SessionStateError> {
        self.expect_phase(Phase::Accumulating, "advance")?;
        self.phase = match self.last {
            Some(Polarity::Failure) => Phase::Exited,
            Some(Polarity::Success) | None => Phase::Racing,
        };
        Ok(self.phase)
    }

    /// `Exited -> TerminalFailure`. Returns the final totals.
    pub fn fail(&mut self) -> Result<SessionReport, SessionStateError> {
        self.expect_phase(Phase::Exited, "fail")?;
        self.phase = Phase::TerminalFailure;
        Ok(self.report())
    }

    #[must_use]
    pub fn report(&self) -> SessionReport {
        SessionReport {
            total_elapsed: self.total_elapsed,
            rounds: self.rounds,
        }
    }

    fn expect_phase(&self, expected: Phase, action: &'static str) -> Result<(), SessionStateError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionStateError::InvalidTransition {
                action,
                phase: self.phase,
            })
        }
    }
}
