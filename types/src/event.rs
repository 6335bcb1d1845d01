use std::fmt;

use crate::DelayMs;

/// Every line the demo prints, in typed form.
///
/// `Display` renders the exact console text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Printed synchronously by the process entry point.
    InMain,
    /// Printed by the deferred continuation queued before `InMain`.
    InNextTick,
    GameStart,
    Defused(DelayMs),
    Exploded(DelayMs),
    GameEnd(DelayMs),
    /// Printed after the session settles, right before the failure escapes.
    BeforeThrowing,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::InMain => f.write_str("In main"),
            GameEvent::InNextTick => f.write_str("In next tick"),
            GameEvent::GameStart => f.write_str("Game start!"),
            GameEvent::Defused(ms) => write!(f, "Defuse after {ms}ms~"),
            GameEvent::Exploded(ms) => write!(f, "Bomb after {ms}ms~"),
            GameEvent::GameEnd(total) => write!(f, "Game end after {total}ms!"),
            GameEvent::BeforeThrowing => {
                f.write_str("Before throwing UnhandledPromiseRejection on finally!")
            }
        }
    }
}
