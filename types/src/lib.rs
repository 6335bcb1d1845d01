//! Core domain types for Timebomb.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! The race engine and session loop in `timebomb-engine` are built on top of these.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod delay;
mod event;
mod session;
mod settlement;

pub use delay::{DelayMs, DelayRange, RaceTimings};
pub use event::GameEvent;
pub use session::{Phase, SessionReport, SessionState, SessionStateError};
pub use settlement::{OperationKind, Polarity, Settlement};

use thiserror::Error;

// ============================================================================
// Terminal Failure
// ============================================================================

/// Message carried by the post-loop failure.
pub const TERMINAL_FAILURE_MESSAGE: &str = "try to throw an error :)";

/// The failure raised once the session loop has exited.
///
/// Nothing inside the engine recovers from this error. It is returned to the
/// process entry point, which must let it escape so the runtime reports it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TerminalFailure {
    message: &'static str,
    report: SessionReport,
}

impl TerminalFailure {
    #[must_use]
    pub fn new(report: SessionReport) -> Self {
        Self {
            message: TERMINAL_FAILURE_MESSAGE,
            report,
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Totals of the session that ended in this failure.
    #[must_use]
    pub fn report(&self) -> SessionReport {
        self.report
    }
}

/// Everything that can end a session.
///
/// `Terminal` is the only outcome of a correctly wired session; `InvalidState`
/// means the loop drove its state machine out of order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Terminal(#[from] TerminalFailure),
    #[error("session state machine violated: {0}")]
    InvalidState(#[from] SessionStateError),
}

impl SessionError {
    #[must_use]
    pub fn as_terminal(&self) -> Option<&TerminalFailure> {
        match self {
            SessionError::Terminal(failure) => Some(failure),
            SessionError::InvalidState(_) => None,
        }
    }
}
