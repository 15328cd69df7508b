// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Runs the `ansi_style` binary in a child process, since there is no other way to see
//! exactly what lands on its stdout and stderr.
//!
//! More info: <https://docs.rs/assert_cmd/latest/assert_cmd/index.html>

use assert_cmd::Command;
use pretty_assertions::assert_eq;

fn ansi_style() -> Command { Command::cargo_bin("ansi_style").unwrap() }

#[test]
fn print_bold_underline_blink_white_on_green() {
    let output = ansi_style()
        .args([
            "print", "--fg", "white", "--bg", "green", "-a", "bold", "-a", "underline",
            "-a", "blink", "test",
        ])
        .ok()
        .unwrap();
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "\x1b[1;4;5;37m\x1b[42mtest\x1b[0m\n"
    );
}

#[test]
fn print_without_reset_then_reset() {
    let styled = ansi_style()
        .args(["print", "--fg", "cyan", "--no-reset", "--no-newline", "x"])
        .ok()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&styled.stdout), "\x1b[36mx");

    let reset = ansi_style().arg("reset").ok().unwrap();
    assert_eq!(String::from_utf8_lossy(&reset.stdout), "\x1b[0m");
}

#[test]
fn unknown_color_fails_with_diagnostic() {
    let assert = ansi_style()
        .args(["print", "--fg", "magenta", "x"])
        .assert()
        .failure();
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown color name"));
}

#[test]
fn describe_extended_background() {
    let output = ansi_style()
        .args(["describe", "--fg", "red", "--bg", "123"])
        .ok()
        .unwrap();
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "foreground: Red\nbackground: 123\nattributes: []\n"
    );
}

#[test]
fn palette_has_every_extended_swatch() {
    let output = ansi_style().args(["palette", "fg"]).ok().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    for index in 16..=255 {
        assert!(stdout.contains(&format!("\x1b[38;5;{index}mSample ")));
    }
}

#[test]
fn logging_does_not_change_stdout() {
    let output = ansi_style()
        .current_dir(std::env::temp_dir())
        .args(["-l", "rgb", "128", "128", "128"])
        .ok()
        .unwrap();
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "244 \x1b[38;5;244mSample Text\x1b[0m\n"
    );
}

#[test]
fn no_args_prints_help() {
    let assert = ansi_style().assert().failure();
    assert!(String::from_utf8_lossy(&assert.get_output().stderr).contains("USAGE"));
}
