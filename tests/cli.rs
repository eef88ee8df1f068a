//! Failure-path tests for the binary: every run here must abort before or
//! while writing sprites, with a diagnostic on stderr and exit code 1.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("spritegen")
}

/// Run the binary in a fresh directory against the given config file contents.
fn run_with_config(contents: &str) -> (TempDir, assert_cmd::assert::Assert) {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, contents).unwrap();
    let assert = cmd().env("SPRITEGEN_CONFIG", &config).current_dir(dir.path()).assert();
    (dir, assert)
}

#[test]
fn malformed_color_exits_with_error() {
    let (_dir, assert) = run_with_config(
        "[label]\nenabled = false\n\n[[monsters]]\nidentifier = \"kaputt\"\ncolor = \"#12345\"\nrarity = \"rare\"\n",
    );
    assert.failure().code(1).stderr(predicate::str::contains("Invalid color '#12345'"));
}

#[test]
fn duplicate_identifier_exits_with_error() {
    let (dir, assert) = run_with_config(
        r##"
[label]
enabled = false

[[monsters]]
identifier = "blitzwolf"
color = "#ffff44"
rarity = "common"

[[monsters]]
identifier = "blitzwolf"
color = "#ffff45"
rarity = "rare"
"##,
    );
    assert.failure().stderr(predicate::str::contains("duplicate identifier 'blitzwolf'"));
    assert!(!dir.path().join("blitzwolf.png").exists());
}

#[test]
fn unparsable_config_exits_with_error() {
    let (_dir, assert) = run_with_config("this is not valid toml {{{");
    assert.failure().stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn zero_size_exits_with_error() {
    let (dir, assert) = run_with_config("[render]\nsize = 0\n\n[label]\nenabled = false\n");
    assert
        .failure()
        .stderr(predicate::str::contains("Sprite 'feuerdrache' failed at stage pending"))
        .stderr(predicate::str::contains("sprite size must be positive"));
    assert!(!dir.path().join("feuerdrache.png").exists());
}

#[test]
fn huge_size_exits_with_error() {
    let (dir, assert) =
        run_with_config("[render]\nsize = 4294967295\n\n[label]\nenabled = false\n");
    assert
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Sprite 'feuerdrache' failed at stage pending"))
        .stderr(predicate::str::contains("sprite size must be at most 8192"));
    assert!(!dir.path().join("feuerdrache.png").exists());
}

#[test]
fn output_dir_that_is_a_file_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("blocked"), b"").unwrap();
    let config = dir.path().join("spritegen.toml");
    std::fs::write(&config, "output_dir = \"blocked\"\n[label]\nenabled = false\n").unwrap();

    cmd()
        .env_remove("SPRITEGEN_CONFIG")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}
