//! Runs the real binary and checks what reaches the process boundary.

use std::process::Command;

use timebomb_engine::{DelayMs, RaceTimings, TERMINAL_FAILURE_MESSAGE};

use crate::common::{game_end_total, race_value};

#[test]
fn binary_prints_the_game_then_dies_with_the_unhandled_failure() {
    let output = Command::new(env!("CARGO_BIN_EXE_timebomb"))
        .env_remove("RUST_LOG")
        .output()
        .expect("run timebomb binary");

    assert!(!output.status.success(), "terminal failure must not be swallowed");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(&format!("Error: {TERMINAL_FAILURE_MESSAGE}")),
        "stderr: {stderr}"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines.len() >= 6, "stdout: {stdout}");
    assert_eq!(&lines[..3], ["In main", "Game start!", "In next tick"]);
    assert_eq!(
        lines[lines.len() - 1],
        "Before throwing UnhandledPromiseRejection on finally!"
    );

    let races = &lines[3..lines.len() - 2];
    let (bomb, defuses) = races.split_last().expect("at least one race");
    assert!(bomb.starts_with("Bomb after "), "last race: {bomb}");
    assert!(defuses.iter().all(|l| l.starts_with("Defuse after ")));

    let timings = RaceTimings::default();
    let mut sum = DelayMs::ZERO;
    for line in defuses {
        let value = race_value(line).expect("defuse value");
        assert!(timings.defuse.contains(value), "{line}");
        sum += value;
    }
    let bomb_value = race_value(bomb).expect("bomb value");
    assert!(timings.bomb.contains(bomb_value), "{bomb}");
    sum += bomb_value;

    assert_eq!(game_end_total(lines[lines.len() - 2]), Some(sum));
}
