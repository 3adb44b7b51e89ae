//! Integration tests for the `arcana` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn arcana() -> Command {
    Command::cargo_bin("arcana").unwrap()
}

fn store_arg(dir: &TempDir) -> String {
    dir.path().join("readings.json").display().to_string()
}

// ---------------------------------------------------------------------------
// read
// ---------------------------------------------------------------------------

#[test]
fn read_saves_and_prints_a_reading() {
    let dir = TempDir::new().unwrap();
    arcana()
        .args([
            "read",
            "Will my relationship last?",
            "--seed",
            "7",
            "--store",
            &store_arg(&dir),
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("love")
                .and(predicate::str::contains("Three Card"))
                .and(predicate::str::contains("Summary:"))
                .and(predicate::str::contains("Saved as")),
        );

    assert!(dir.path().join("readings.json").exists());
}

#[test]
fn read_no_save_leaves_no_log() {
    let dir = TempDir::new().unwrap();
    arcana()
        .args([
            "read",
            "Just a general question",
            "--no-save",
            "--store",
            &store_arg(&dir),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not saved."));

    assert!(!dir.path().join("readings.json").exists());
}

#[test]
fn read_with_explicit_layout() {
    let dir = TempDir::new().unwrap();
    arcana()
        .args([
            "read",
            "A big question",
            "--layout",
            "celtic_cross",
            "--seed",
            "7",
            "--store",
            &store_arg(&dir),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Celtic Cross"));
}

#[test]
fn read_unknown_layout_falls_back_to_single() {
    let dir = TempDir::new().unwrap();
    arcana()
        .args([
            "read",
            "A question",
            "--layout",
            "grand_tableau",
            "--no-save",
            "--store",
            &store_arg(&dir),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Single Card"));
}

#[test]
fn seeded_reads_are_reproducible() {
    let dir = TempDir::new().unwrap();
    let run = || {
        arcana()
            .args([
                "read",
                "A question",
                "--seed",
                "42",
                "--no-save",
                "--store",
                &store_arg(&dir),
            ])
            .output()
            .unwrap()
    };
    assert_eq!(run().stdout, run().stdout);
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

#[test]
fn history_empty_store() {
    let dir = TempDir::new().unwrap();
    arcana()
        .args(["history", "--store", &store_arg(&dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("No readings found."));
}

#[test]
fn history_lists_saved_readings() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    arcana()
        .args(["read", "Will my relationship last?", "--store", &store])
        .assert()
        .success();
    arcana()
        .args(["read", "How is my health?", "--store", &store])
        .assert()
        .success();

    arcana()
        .args(["history", "--store", &store])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Will my relationship last?")
                .and(predicate::str::contains("2 readings")),
        );

    arcana()
        .args(["history", "--store", &store, "--category", "love"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1 readings")
                .and(predicate::str::contains("How is my health?").not()),
        );
}

#[test]
fn history_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();
    arcana()
        .args(["history", "--store", &store_arg(&dir), "--category", "destiny"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_on_empty_store() {
    let dir = TempDir::new().unwrap();
    arcana()
        .args(["stats", "--store", &store_arg(&dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total readings: 0"));
}

#[test]
fn stats_counts_saved_readings() {
    let dir = TempDir::new().unwrap();
    let store = store_arg(&dir);
    arcana()
        .args(["read", "Will my relationship last?", "--store", &store])
        .assert()
        .success();

    arcana()
        .args(["stats", "--store", &store])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Total readings: 1")
                .and(predicate::str::contains("three_card")),
        );
}

// ---------------------------------------------------------------------------
// layouts
// ---------------------------------------------------------------------------

#[test]
fn layouts_lists_all_six() {
    arcana()
        .arg("layouts")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("single")
                .and(predicate::str::contains("three_card"))
                .and(predicate::str::contains("Celtic Cross")),
        );
}

#[test]
fn layouts_filters_by_difficulty() {
    arcana()
        .args(["layouts", "--difficulty", "advanced"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("celtic_cross")
                .and(predicate::str::contains("single").not()),
        );
}

#[test]
fn layouts_rejects_unknown_difficulty() {
    arcana()
        .args(["layouts", "--difficulty", "grandmaster"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown difficulty"));
}

// ---------------------------------------------------------------------------
// cards
// ---------------------------------------------------------------------------

#[test]
fn cards_lists_the_catalogue() {
    arcana()
        .arg("cards")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Fool")
                .and(predicate::str::contains("The World"))
                .and(predicate::str::contains("31 cards")),
        );
}

#[test]
fn cards_filters_by_suit() {
    arcana()
        .args(["cards", "--suit", "cups"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Ace of Cups")
                .and(predicate::str::contains("The Fool").not()),
        );
}

#[test]
fn cards_rejects_unknown_suit() {
    arcana()
        .args(["cards", "--suit", "hearts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown suit"));
}
