#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn bandz_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("bandz"));
    cmd.env("BANDZ_CONFIG_DIR", temp.path().join("config"))
        .env_remove("BANDZ_LOG")
        .current_dir(temp.path());
    cmd
}

fn band_lines(name: &str, participants: i64, established: &str) -> String {
    format!("{name}\n10\n2.5\n{participants}\n{established}\n{name} LP\n9\nsoul\n")
}

#[test]
fn test_requires_a_file_argument() {
    let temp = TempDir::new().unwrap();
    bandz_cmd(&temp).assert().failure().code(2);
    bandz_cmd(&temp)
        .args(["a.json", "b.json"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_missing_file_is_created() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bands.json");

    bandz_cmd(&temp)
        .arg(&file)
        .write_stdin("info\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Size:        0"));

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("init_date"));
}

#[test]
fn test_corrupt_file_fails_startup() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bands.json");
    fs::write(&file, "{ this is not json").unwrap();

    bandz_cmd(&temp)
        .arg(&file)
        .write_stdin("show\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File is corrupt"));
}

#[test]
fn test_saved_bands_survive_restart() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bands.json");

    let session = format!(
        "add\n{}add_if_max\n{}save\n",
        band_lines("Alpha", 5, "2000-01-01"),
        band_lines("Beta", 3, "2000-01-01"),
    );
    bandz_cmd(&temp)
        .arg(&file)
        .write_stdin(session)
        .assert()
        .success()
        .stdout(predicate::str::contains("Collection saved"));

    bandz_cmd(&temp)
        .arg(&file)
        .write_stdin("show\nsum_of_number_of_participants\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("Beta"))
        .stdout(predicate::str::contains("Sum: 8"));
}

#[test]
fn test_exit_discards_unsaved_changes() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bands.json");

    let session = format!("add\n{}exit\nsave\n", band_lines("Gone", 2, "1990-05-05"));
    bandz_cmd(&temp)
        .arg(&file)
        .write_stdin(session)
        .assert()
        .success();

    let content = fs::read_to_string(&file).unwrap();
    assert!(!content.contains("Gone"));
}

#[test]
fn test_unknown_commands_do_not_stop_the_shell() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bands.json");

    bandz_cmd(&temp)
        .arg(&file)
        .write_stdin("dance\nremove_by_id x\nhelp\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: dance"))
        .stdout(predicate::str::contains("Invalid id: x"))
        .stdout(predicate::str::contains("execute_script file_name"));
}

#[test]
fn test_recursive_script_is_refused() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bands.json");
    let script = temp.path().join("loop.txt");
    fs::write(
        &script,
        format!(
            "add\n{}execute_script loop.txt\nsave\n",
            band_lines("Looped", 1, "2001-01-01")
        ),
    )
    .unwrap();

    bandz_cmd(&temp)
        .arg(&file)
        .write_stdin("execute_script loop.txt\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "recursive script execution is not supported",
        ));

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("Looped"));
}

#[test]
fn test_truncated_record_on_stdin_ends_cleanly() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("bands.json");

    bandz_cmd(&temp)
        .arg(&file)
        .write_stdin("add\nHalf a band\n")
        .assert()
        .success();
}

#[test]
fn test_config_prompt_is_used() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.json"), r#"{ "prompt": "bandz$ " }"#).unwrap();

    bandz_cmd(&temp)
        .arg(temp.path().join("bands.json"))
        .write_stdin("info\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("bandz$ "));
}
