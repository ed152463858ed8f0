//! Integration tests for the splice binary
//!
//! Each test writes fixture files into a temp dir and runs the built binary
//! there, so no splice.toml from the workspace is picked up.

use std::path::Path;
use std::process::{Command, Output};

use splice_drum::{CodecOptions, Pattern, Track, encode, parse_step_grid};
use tempfile::tempdir;

fn six_track_pattern() -> Pattern {
    let grids = [
        (0, "kick", "x---|x---|x---|x---"),
        (1, "snare", "----|x---|----|x---"),
        (2, "clap", "----|x-x-|----|----"),
        (3, "hh-open", "--x-|--x-|x-x-|--x-"),
        (4, "hh-close", "x---|x---|----|x--x"),
        (5, "cowbell", "----|----|--x-|----"),
    ];
    Pattern::new("0.808-alpha", 120.0).with_tracks(
        grids
            .iter()
            .map(|&(id, name, grid)| Track::new(id, name, parse_step_grid(grid).unwrap())),
    )
}

fn run_splice(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_splice"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to run splice")
}

#[test]
fn test_print() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join("p.splice"),
        encode(&six_track_pattern()).unwrap(),
    )
    .unwrap();

    let output = run_splice(dir.path(), &["print", "p.splice"]);
    assert!(output.status.success(), "splice print failed");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Saved with HW Version: 0.808-alpha\nTempo: 120\n"));
    assert!(stdout.contains("(5) cowbell\t|----|----|--x-|----|\n"));
}

#[test]
fn test_check_reports_failures() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut data = encode(&six_track_pattern()).unwrap();
    data.extend_from_slice(b"trailing junk");
    std::fs::write(dir.path().join("good.splice"), &data).unwrap();
    std::fs::write(dir.path().join("bad.splice"), b"SPLICE").unwrap();

    let output = run_splice(dir.path(), &["check", "good.splice"]);
    assert!(output.status.success(), "check of a valid file failed");

    let output = run_splice(dir.path(), &["check", "good.splice", "bad.splice"]);
    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("ok       good.splice"));
    assert!(stdout.contains("FAILED   bad.splice"));
}

#[test]
fn test_cowbell() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join("in.splice"),
        encode(&six_track_pattern()).unwrap(),
    )
    .unwrap();

    let output = run_splice(dir.path(), &["cowbell", "in.splice", "-o", "out.splice"]);
    assert!(output.status.success(), "splice cowbell failed");

    let data = std::fs::read(dir.path().join("out.splice")).unwrap();
    let pattern = splice_drum::decode(&data).unwrap();
    assert_eq!(pattern.track("cowbell").unwrap().active_steps(), 16);
    assert_eq!(pattern.track("kick").unwrap().active_steps(), 4);

    let output = run_splice(
        dir.path(),
        &["cowbell", "in.splice", "-o", "x.splice", "--track", "tambourine"],
    );
    assert!(!output.status.success());
    assert!(!dir.path().join("x.splice").exists());
}

#[test]
fn test_config_selects_legacy_layout() {
    let dir = tempdir().expect("Failed to create temp dir");
    let legacy = splice_drum::Codec::new(CodecOptions::legacy());
    std::fs::write(
        dir.path().join("legacy.splice"),
        legacy.encode(&six_track_pattern()).unwrap(),
    )
    .unwrap();

    // reference layout misreads the one-byte length
    let output = run_splice(dir.path(), &["check", "legacy.splice"]);
    assert!(!output.status.success());

    let output = run_splice(dir.path(), &["--u8-length", "check", "legacy.splice"]);
    assert!(output.status.success());

    std::fs::write(dir.path().join("splice.toml"), "[codec]\nbody_length = \"u8\"\n").unwrap();
    let output = run_splice(dir.path(), &["json", "legacy.splice"]);
    assert!(output.status.success());
    let dumped: Pattern = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(dumped, six_track_pattern());
}
