//! Integration tests for the hunt CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn hunt() -> Command {
    let mut cmd = Command::cargo_bin("hunt").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Run a seeded game with the given input and return stdout.
fn play(seed: &str, input: &str) -> String {
    let output = hunt()
        .args(["play", "--seed", seed])
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

/// The cave number from the first "You are in cave N." line.
fn starting_cave(stdout: &str) -> u32 {
    let rest = stdout
        .split("You are in cave ")
        .nth(1)
        .expect("no cave description in output");
    rest.split('.').next().unwrap().parse().unwrap()
}

// ---------------------------------------------------------------------------
// map
// ---------------------------------------------------------------------------

#[test]
fn map_lists_every_tunnel() {
    hunt()
        .arg("map")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Tunnels")
                .and(predicate::str::contains("2, 5, 6"))
                .and(predicate::str::contains("6, 10, 15"))
                .and(predicate::str::contains("20 caves")),
        );
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_describes_the_starting_cave() {
    hunt()
        .args(["play", "--seed", "7"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You are in cave")
                .and(predicate::str::contains("Tunnels lead to"))
                .and(predicate::str::contains("Arrows: 5"))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_ends_quietly_on_eof() {
    hunt()
        .args(["play", "--seed", "7"])
        .write_stdin("")
        .assert()
        .success();
}

#[test]
fn play_shows_help() {
    hunt()
        .args(["play", "--seed", "1"])
        .write_stdin("help\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("shoot <cave>"));
}

#[test]
fn play_rejects_unknown_caves() {
    hunt()
        .args(["play", "--seed", "1"])
        .write_stdin("move 99\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("there is no cave 99"));
}

#[test]
fn play_rejects_gibberish() {
    hunt()
        .args(["play", "--seed", "1"])
        .write_stdin("dance\nshoot\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("unknown command: dance")
                .and(predicate::str::contains("usage: shoot")),
        );
}

#[test]
fn play_rejects_overlong_arrow_paths() {
    hunt()
        .args(["play", "--seed", "1"])
        .write_stdin("shoot 1 2 3 4 5 6\nlook\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("at most 5 caves")
                .and(predicate::str::contains("Arrows: 5")),
        );
}

#[test]
fn same_seed_same_dungeon() {
    assert_eq!(play("2024", "look\nquit\n"), play("2024", "look\nquit\n"));
}

#[test]
fn shooting_your_own_cave_is_fatal() {
    let cave = starting_cave(&play("31", "quit\n"));
    let stdout = play("31", &format!("shoot {cave}\nlook\n"));
    assert!(stdout.contains("You shot yourself."), "{stdout}");
    assert!(!stdout.contains("Goodbye!"));
}

#[test]
fn walking_in_circles_is_rejected() {
    let cave = starting_cave(&play("5", "quit\n"));
    let stdout = play("5", &format!("move {cave}\nquit\n"));
    assert!(
        stdout.contains(&format!("No tunnel leads to cave {cave}.")),
        "{stdout}"
    );
}

#[test]
fn restart_after_death_refills_the_quiver() {
    let cave = starting_cave(&play("31", "quit\n"));
    let stdout = play("31", &format!("shoot {cave}\nmove 1\nrestart\nquit\n"));
    assert!(stdout.contains("You shot yourself."), "{stdout}");
    assert!(stdout.contains("the game is over"), "{stdout}");
    assert!(stdout.contains("a fresh dungeon"), "{stdout}");
    assert_eq!(stdout.matches("Arrows: 5").count(), 2, "{stdout}");
    assert!(stdout.contains("Goodbye!"));
}

#[test]
fn arrows_flag_sets_the_quiver() {
    hunt()
        .args(["play", "--seed", "3", "--arrows", "2"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Arrows: 2"));
}

#[test]
fn arrows_flag_rejects_an_empty_quiver() {
    hunt()
        .args(["play", "--arrows", "0"])
        .assert()
        .failure();
}
