//! Session loop: race until the bomb wins, then raise the terminal failure.

use std::convert::Infallible;

use timebomb_types::{
    GameEvent, Phase, Polarity, RaceTimings, SessionError, SessionReport, SessionState,
    TerminalFailure,
};
use tokio::task::yield_now;
use tokio::time::sleep;

use crate::delays::DelaySource;
use crate::output::SharedSink;
use crate::race::RaceEngine;

pub struct Session<D> {
    engine: RaceEngine<D>,
    sink: SharedSink,
    state: SessionState,
}

impl<D: DelaySource> Session<D> {
    #[must_use]
    pub fn new(delays: D, timings: RaceTimings, sink: SharedSink) -> Self {
        Self {
            engine: RaceEngine::new(delays, timings),
            sink,
            state: SessionState::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Play one game.
    ///
    /// This never returns `Ok`. A bomb settlement ends the loop normally; the
    /// session then waits out the terminal delay and returns
    /// [`SessionError::Terminal`], which the caller must propagate rather than
    /// handle.
    pub async fn play(mut self) -> Result<Infallible, SessionError> {
        self.sink.emit(GameEvent::GameStart);
        // Let continuations queued before the game run ahead of the first
        // race, even when its timers are already due.
        yield_now().await;
        let report = self.race_until_exploded().await?;
        tracing::debug!(
            total_ms = report.total_elapsed.value(),
            rounds = report.rounds,
            "Session loop exited"
        );
        Err(self.detonate().await?.into())
    }

    /// Run races until one settles with a failure. Returns the loop totals.
    async fn race_until_exploded(&mut self) -> Result<SessionReport, SessionError> {
        loop {
            self.state.begin_race()?;
            let settlement = self.engine.race().await;
            self.state.accumulate(settlement)?;
            let phase = self.state.advance()?;

            match settlement.polarity() {
                Polarity::Success => self.sink.emit(GameEvent::Defused(settlement.value)),
                Polarity::Failure => self.sink.emit(GameEvent::Exploded(settlement.value)),
            }

            if phase == Phase::Exited {
                break;
            }
        }

        self.sink.emit(GameEvent::GameEnd(self.state.total_elapsed()));
        Ok(self.state.report())
    }

    /// Wait the fixed terminal delay, then settle with the terminal failure.
    async fn detonate(&mut self) -> Result<TerminalFailure, SessionError> {
        sleep(self.engine.timings().terminal_delay.as_duration()).await;
        let report = self.state.fail()?;
        Ok(TerminalFailure::new(report))
    }
}
