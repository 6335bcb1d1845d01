//! Process start-up sequence.
//!
//! ```text
//! spawn(In next tick) -> In main -> Game start! -> [yield] -> In next tick
//!     -> races ... -> Game end -> [1000 ms] -> Before throwing ... -> Err(terminal)
//! ```
//!
//! The ordering relies on a current-thread runtime: the spawned continuation
//! runs when the session yields right after "Game start!", before its first
//! race, whatever the timer delays.

use std::convert::Infallible;
use std::sync::Arc;

use timebomb_types::{GameEvent, RaceTimings, SessionError};

use crate::delays::DelaySource;
use crate::output::SharedSink;
use crate::session::Session;

/// Run the whole demo and hand back the failure it ends with.
pub async fn run<D: DelaySource>(
    sink: SharedSink,
    delays: D,
    timings: RaceTimings,
) -> Result<Infallible, SessionError> {
    let next_tick = Arc::clone(&sink);
    // Detached; it has nothing to report back.
    drop(tokio::spawn(async move {
        next_tick.emit(GameEvent::InNextTick);
    }));

    sink.emit(GameEvent::InMain);

    let outcome = Session::new(delays, timings, Arc::clone(&sink)).play().await;

    sink.emit(GameEvent::BeforeThrowing);
    outcome
}
