//! Timebomb CLI - binary entry point.
//!
//! Prints the game to stdout and exits with the terminal failure:
//!
//! ```text
//! main() -> init_tracing() -> timebomb_engine::run() -> Err(try to throw an error :))
//! ```
//!
//! The runtime is current-thread on purpose: the "In next tick" continuation
//! must not run until the session reaches its first timer.

use std::io::stderr;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use timebomb_engine::{ConsoleSink, RaceTimings, RandomDelays};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    // Game lines own stdout; diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(stderr))
        .with(env_filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    // `run` never succeeds; its terminal failure escapes to the runtime,
    // which reports it and exits non-zero.
    let sink = Arc::new(ConsoleSink);
    match timebomb_engine::run(sink, RandomDelays, RaceTimings::default()).await? {}
}
