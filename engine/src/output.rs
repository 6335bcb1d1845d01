//! Output sinks for game events.

use std::io::{Write, stdout};
use std::sync::{Arc, Mutex, PoisonError};

use timebomb_types::GameEvent;

/// Where console lines go. Shared between the session and the deferred
/// next-tick continuation, so it must be usable behind an `Arc`.
pub trait OutputSink: Send + Sync {
    fn emit(&self, event: GameEvent);
}

pub type SharedSink = Arc<dyn OutputSink>;

/// Writes each event as one line on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn emit(&self, event: GameEvent) {
        let mut out = stdout().lock();
        if let Err(e) = writeln!(out, "{event}") {
            tracing::warn!(error = %e, "Failed to write game event to stdout");
        }
    }
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rendered console lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.events().iter().map(ToString::to_string).collect()
    }
}

impl OutputSink for RecordingSink {
    fn emit(&self, event: GameEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
