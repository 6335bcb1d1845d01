//! End-to-end scenarios with scripted delays and a paused clock.

use std::time::Duration;

use timebomb_engine::{DelayMs, GameEvent, TERMINAL_FAILURE_MESSAGE};
use tokio::time::Instant;

use crate::common::run_scripted;

#[tokio::test(start_paused = true)]
async fn defuse_600_beats_bomb_900_and_the_loop_continues() {
    let (err, sink) = run_scripted(&[(600, 900), (1000, 850)]).await;

    let report = err.as_terminal().expect("terminal failure").report();
    assert_eq!(report.rounds, 2);
    assert_eq!(report.total_elapsed, DelayMs::new(600 + 850));

    let events = sink.events();
    assert_eq!(events[3], GameEvent::Defused(DelayMs::new(600)));
    assert_eq!(events[4], GameEvent::Exploded(DelayMs::new(850)));
}

#[tokio::test(start_paused = true)]
async fn bomb_650_beats_defuse_700_and_ends_the_loop() {
    let (err, sink) = run_scripted(&[(700, 650)]).await;

    assert_eq!(err.to_string(), TERMINAL_FAILURE_MESSAGE);
    assert_eq!(
        sink.lines(),
        vec![
            "In main",
            "Game start!",
            "In next tick",
            "Bomb after 650ms~",
            "Game end after 650ms!",
            "Before throwing UnhandledPromiseRejection on finally!",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn finally_line_waits_for_the_terminal_delay() {
    let start = Instant::now();
    let (_, sink) = run_scripted(&[(900, 900), (950, 820)]).await;

    // Tie goes to defuse, then the bomb wins; 900 + 820 + 1000.
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(2720), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(2721), "{elapsed:?}");
    assert_eq!(sink.events().last(), Some(&GameEvent::BeforeThrowing));
}

#[tokio::test(start_paused = true)]
async fn many_defuses_accumulate_into_the_final_total() {
    let script: Vec<(u64, u64)> = (0..25)
        .map(|i| (501 + i * 10, 1000))
        .chain([(1000, 801)])
        .collect();
    let (err, sink) = run_scripted(&script).await;

    let expected: u64 = (0..25).map(|i| 501 + i * 10).sum::<u64>() + 801;
    let report = err.as_terminal().expect("terminal failure").report();
    assert_eq!(report.total_elapsed, DelayMs::new(expected));
    assert_eq!(report.rounds, 26);
    assert!(sink.lines().contains(&format!("Game end after {expected}ms!")));
}
