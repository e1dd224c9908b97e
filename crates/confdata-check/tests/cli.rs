use std::{fs, path::Path, process::Command};

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_confdata-check"));
    cmd.env_remove("CONFDATA_LOG").env_remove("CONFDATA_LOG_FORMAT");
    cmd
}

#[test]
fn all_valid_entries_exit_zero() {
    let dir = tempfile::tempdir().unwrap();
    let folder = format!("RUNPATH:FOLDER={}", dir.path().display());

    let out = bin()
        .args(["NUM_REALIZATIONS:POSINT=10", "START:DATE=2024-02-29", &folder])
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.lines().all(|l| l.contains("valid")));
}

#[test]
fn invalid_entry_exits_one() {
    let out = bin().args(["N:POSINT=-7", "S:STR=ok"]).output().unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("invalid"));
    assert!(stdout.contains("value must not be negative"));
}

#[test]
fn unknown_type_exits_one() {
    let out = bin().args(["--format", "json", "K:integer=1"]).output().unwrap();

    assert_eq!(out.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report[0]["status"], "unknownType");
}

#[test]
fn json_input_with_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("entries.json");
    fs::write(
        &input,
        r#"[{"key": "N", "type": "INT", "value": "42"},
           {"key": "D", "type": "DATE", "value": "01/03/2021"}]"#,
    )
    .unwrap();

    let out = bin()
        .args(["--format", "json", "--convert", "--anchor", "utc", "--input"])
        .arg(&input)
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report[0]["native"]["value"], 42);
    assert_eq!(report[1]["native"]["value"], "2021-03-01T00:00:00Z");
}

fn local_dates_under(zone: &str, dates: &[&str]) -> Option<Vec<String>> {
    if !Path::new("/usr/share/zoneinfo").join(zone).exists() {
        return None;
    }
    let entries = dates.iter().enumerate().map(|(i, d)| format!("D{i}:DATE={d}"));
    let out = bin()
        .env("TZ", zone)
        .args(["--format", "json", "--convert"])
        .args(entries)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let rows = report.as_array().unwrap();
    Some(
        rows.iter()
            .map(|row| row["native"]["value"].as_str().unwrap().to_string())
            .collect(),
    )
}

#[test]
fn local_dates_follow_daylight_saving() {
    let Some(oslo) = local_dates_under("Europe/Oslo", &["2024-01-15", "15/07/2024"]) else {
        return;
    };
    assert_eq!(oslo, ["2024-01-15T00:00:00+01:00", "2024-07-15T00:00:00+02:00"]);

    let Some(new_york) = local_dates_under("America/New_York", &["2024-01-15", "2024-07-15"]) else {
        return;
    };
    assert_eq!(new_york, ["2024-01-15T00:00:00-05:00", "2024-07-15T00:00:00-04:00"]);
}

#[test]
fn malformed_entry_exits_two() {
    let out = bin().arg("MISSING_SEPARATORS").output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8(out.stderr).unwrap().contains("KEY:TYPE=VALUE"));
}

#[test]
fn no_entries_exits_two() {
    let out = bin().output().unwrap();
    assert_eq!(out.status.code(), Some(2));
}
