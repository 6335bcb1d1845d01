//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::sync::Arc;

use timebomb_engine::{DelayMs, RaceTimings, RecordingSink, ScriptedDelays, SessionError, run};

/// Run the full demo with scripted `(defuse, bomb)` races.
pub async fn run_scripted(races: &[(u64, u64)]) -> (SessionError, RecordingSink) {
    let sink = RecordingSink::new();
    let outcome = run(
        Arc::new(sink.clone()),
        ScriptedDelays::races(races),
        RaceTimings::default(),
    )
    .await;
    let err = match outcome {
        Ok(never) => match never {},
        Err(err) => err,
    };
    (err, sink)
}

/// Parse the number out of `Defuse after {n}ms~` / `Bomb after {n}ms~`.
pub fn race_value(line: &str) -> Option<DelayMs> {
    let rest = line
        .strip_prefix("Defuse after ")
        .or_else(|| line.strip_prefix("Bomb after "))?;
    rest.strip_suffix("ms~")?.parse().ok().map(DelayMs::new)
}

/// Parse the number out of `Game end after {n}ms!`.
pub fn game_end_total(line: &str) -> Option<DelayMs> {
    line.strip_prefix("Game end after ")?
        .strip_suffix("ms!")?
        .parse()
        .ok()
        .map(DelayMs::new)
}
