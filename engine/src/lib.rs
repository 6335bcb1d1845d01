//! Timebomb engine - timer races and the session loop.
//!
//! # Architecture
//!
//! ```text
//! run() -> Session::play() -> loop { RaceEngine::race() } -> TerminalFailure
//!                                     |
//!                                     v
//!                    select!(defuse timer, bomb timer) + SettleGuard
//! ```
//!
//! Randomness and console output are injected through [`DelaySource`] and
//! [`OutputSink`], so every race can be scripted in tests.

mod bootstrap;
mod delays;
mod output;
mod race;
mod session;

pub use bootstrap::run;
pub use delays::{DelaySource, RandomDelays, ScriptedDelays};
pub use output::{ConsoleSink, OutputSink, RecordingSink, SharedSink};
pub use race::{RaceEngine, SettleGuard, TimedOperation, race_between};
pub use session::Session;

pub use timebomb_types::{
    DelayMs, DelayRange, GameEvent, OperationKind, Phase, Polarity, RaceTimings, SessionError,
    SessionReport, SessionState, Settlement, TERMINAL_FAILURE_MESSAGE, TerminalFailure,
};
