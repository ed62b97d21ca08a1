use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchparty_cmd() -> Command {
    Command::cargo_bin("sketchparty").expect("binary exists")
}

#[test]
fn help_prints_about_text() {
    sketchparty_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Drawing-and-guessing party game core",
        ));
}

#[test]
fn no_flags_prints_usage() {
    sketchparty_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn demo_exports_a_png_snapshot() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("snapshot.png");

    sketchparty_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .current_dir(temp.path())
        .args(["--demo", "--seed", "7", "--width", "64", "--height", "48"])
        .arg("--export")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved snapshot to"));

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn demo_reads_vocabulary_from_config() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("sketchparty");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[vocabulary]\nwords = [\"Boat\"]\n",
    )
    .unwrap();

    sketchparty_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .current_dir(temp.path())
        .args(["--demo", "--seed", "1"])
        .arg("--export")
        .arg(temp.path().join("out.png"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Boat"));
}

#[test]
fn init_config_writes_once() {
    let temp = TempDir::new().unwrap();

    sketchparty_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default config"));

    assert!(temp.path().join("sketchparty/config.toml").exists());

    // A second run refuses to overwrite.
    sketchparty_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
