use assert_cmd::Command;
use predicates::prelude::*;

const GROUPS: &str = r#"[
    {"5850": 1, "9003": "G1", "5851": 255, "9001": "Living Room"},
    {"5850": 0, "9003": "G2", "5851": 127, "9001": "Bedroom"},
    {"5850": 1, "9003": "G3", "5851": 10}
]"#;

const BULBS: &str = r#"[
    {"9003": "B1", "9001": "Lamp", "3311": [{"5850": 1, "5851": 191, "5706": "ffae42"}]},
    {"9003": "B2", "9001": "Lamp2", "3311": [{"5850": 0, "5851": 0}]}
]"#;

fn tradfri() -> Command {
    let mut cmd = Command::cargo_bin("tradfri-status").unwrap();
    cmd.env_remove("CLICOLOR_FORCE")
        .env_remove("NO_COLOR")
        .env_remove("TRADFRI_STATUS_LOG")
        .env("COLORTERM", "truecolor");
    cmd
}

#[test]
fn group_lines_from_stdin() {
    tradfri()
        .args(["--color", "never", "group"])
        .write_stdin(GROUPS)
        .assert()
        .success()
        .stdout("G1 Living Room - on, 100.0%\nG2 Bedroom - off, 49.8%\n");
}

#[test]
fn bulb_lines_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bulbs.json");
    std::fs::write(&path, BULBS).unwrap();

    tradfri()
        .args(["--color", "never", "bulb"])
        .arg(&path)
        .assert()
        .success()
        .stdout(" B1 Lamp - on, 74.9%, #ffae42\n B2 Lamp2 - off, 0.0%, ffffff\n");
}

#[test]
fn forced_color_decorates_state_and_name() {
    tradfri()
        .args(["--color", "always", "group", "-"])
        .write_stdin(GROUPS)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[1mLiving Room\x1b[0m"))
        .stdout(predicate::str::contains("\x1b[32mon\x1b[0m"))
        .stdout(predicate::str::contains("\x1b[31moff\x1b[0m"));
}

#[test]
fn forced_color_leaves_fallback_suffix_plain() {
    tradfri()
        .args(["--color", "always", "bulb"])
        .write_stdin(BULBS)
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0%, ffffff\n"))
        .stdout(predicate::str::contains("38;2;255;174;66"));
}

#[test]
fn auto_color_follows_environment() {
    tradfri()
        .arg("group")
        .write_stdin(GROUPS)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());

    tradfri()
        .env("CLICOLOR_FORCE", "1")
        .arg("group")
        .write_stdin(GROUPS)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[32mon\x1b[0m"));
}

#[test]
fn never_color_ignores_forced_environment() {
    tradfri()
        .env("CLICOLOR_FORCE", "1")
        .args(["--color", "never", "group"])
        .write_stdin(GROUPS)
        .assert()
        .success()
        .stdout("G1 Living Room - on, 100.0%\nG2 Bedroom - off, 49.8%\n");
}

#[test]
fn shorthand_and_numeric_colors_are_shown() {
    let bulbs = r#"[
        {"9003": "B1", "9001": "Lamp", "3311": [{"5850": 1, "5851": 0, "5706": "fff"}]},
        {"9003": "B2", "9001": "Lamp2", "3311": [{"5850": 1, "5851": 0, "5706": 123456}]}
    ]"#;
    tradfri()
        .args(["--color", "never", "bulb"])
        .write_stdin(bulbs)
        .assert()
        .success()
        .stdout(" B1 Lamp - on, 0.0%, #fff\n B2 Lamp2 - on, 0.0%, #123456\n");
}

#[test]
fn show_classifies_records() {
    let mixed = r#"[
        {"5850": 1, "9003": "G1", "5851": 255, "9001": "Living Room"},
        {"9003": "B2", "9001": "Lamp2", "3311": [{"5850": 0, "5851": 0}]}
    ]"#;
    tradfri()
        .args(["--color", "never", "show"])
        .write_stdin(mixed)
        .assert()
        .success()
        .stdout("G1 Living Room - on, 100.0%\n B2 Lamp2 - off, 0.0%, ffffff\n");
}

#[test]
fn tree_prints_bulbs_under_groups() {
    let tree = r#"{
        "group": {"5850": 1, "9003": 131073, "5851": 255, "9001": "Kitchen"},
        "bulbs": [{"9003": 65537, "9001": "Spot", "3311": [{"5850": 1, "5851": 255, "5706": "f1e0b5"}]}]
    }"#;
    tradfri()
        .args(["--color", "never", "tree"])
        .write_stdin(tree)
        .assert()
        .success()
        .stdout("131073 Kitchen - on, 100.0%\n 65537 Spot - on, 100.0%, #f1e0b5\n");
}

#[test]
fn missing_name_produces_no_output() {
    tradfri()
        .args(["--color", "never", "bulb"])
        .write_stdin(r#"{"9003": "B1", "3311": [{"5850": 1, "5851": 191}]}"#)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn verbose_logs_skipped_records() {
    tradfri()
        .args(["--verbose", "--color", "never", "group"])
        .write_stdin(GROUPS)
        .assert()
        .success()
        .stderr(predicate::str::contains("missing field 9001"));
}

#[test]
fn json_output() {
    tradfri()
        .args(["--json", "bulb"])
        .write_stdin(BULBS)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"color\": \"ffae42\""))
        .stdout(predicate::str::contains("\"color\": \"ffffff\""));
}

#[test]
fn table_output() {
    tradfri()
        .args(["--table", "group"])
        .write_stdin(GROUPS)
        .assert()
        .success()
        .stdout(predicate::str::contains("BRIGHTNESS"))
        .stdout(predicate::str::contains("Bedroom"))
        .stdout(predicate::str::contains("G3").not());
}

#[test]
fn json_and_table_conflict() {
    tradfri()
        .args(["--json", "--table", "group"])
        .write_stdin(GROUPS)
        .assert()
        .failure();
}

#[test]
fn malformed_json_is_an_error() {
    tradfri()
        .arg("group")
        .write_stdin("{not json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"error\": \"json\""));
}

#[test]
fn scalar_document_is_invalid_input() {
    tradfri()
        .arg("group")
        .write_stdin("42")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid_input"));
}

#[test]
fn missing_file_is_an_io_error() {
    tradfri()
        .args(["group", "/nonexistent/groups.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"error\": \"io\""));
}
