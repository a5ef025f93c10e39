use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn wellpath() -> Command {
    Command::cargo_bin("wellpath").expect("wellpath bin")
}

fn repo_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(relative)
}

#[test]
fn j_defaults_print_rounded_geometry() {
    wellpath()
        .arg("j")
        .assert()
        .success()
        .stdout(predicate::str::contains("Radius of curvature"))
        .stdout(predicate::str::contains("3819.72 ft"))
        .stdout(predicate::str::contains("9665.57 ft"));
}

#[test]
fn j_deep_kop_reports_max_kop_warning() {
    wellpath()
        .args(["j", "--bur", "2", "--tvd", "10000", "--kop", "8000", "--displacement", "6000"])
        .assert()
        .success()
        .stderr(predicate::str::contains("suggested maximum"));
}

#[test]
fn j_kop_below_tvd_fails_with_guidance() {
    wellpath()
        .args(["j", "--kop", "9500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("lower the KOP"));
}

#[test]
fn s_checkpoint_ordering_fails() {
    wellpath()
        .args(["s", "--d3", "8500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("D3 < D4 < TVD"));
}

#[test]
fn vertical_writes_survey_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("out/vertical.csv");

    wellpath()
        .args([
            "vertical",
            "--section",
            "Superficial=300",
            "--section",
            "200",
            "--interval",
            "100",
            "--survey-out",
            csv_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sección 2"));

    let text = fs::read_to_string(&csv_path).expect("csv");
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "index,x_ft,y_ft,z_ft,section");
    assert_eq!(lines.len(), 6, "{text}");
    assert!(lines[1].ends_with("Superficial"));
    assert!(lines[5].ends_with("Sección 2"));
}

#[test]
fn vertical_rejects_geometry_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    wellpath()
        .args([
            "vertical",
            "--section",
            "500",
            "--geometry-out",
            dir.path().join("g.json").to_str().unwrap(),
        ])
        .assert()
        .failure();
}

#[test]
fn scenario_writes_geometry_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let json_path = dir.path().join("s.json");
    let scenario = repo_path("configs/scenarios/s_reference.toml");

    wellpath()
        .args([
            "scenario",
            "--file",
            scenario.to_str().unwrap(),
            "--geometry-out",
            json_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("S-profile geometry (S reference)"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("json")).expect("parse");
    assert_eq!(report["profile"], "S");
    assert_eq!(report["scenario"], "S reference");
    let theta = report["quantities"]
        .as_array()
        .expect("quantities")
        .iter()
        .find(|q| q["key"] == "theta")
        .expect("theta");
    assert_eq!(theta["display"], 28.23);
    assert_eq!(theta["unit"], "degrees");
    assert!(report["station_count"].as_u64().unwrap() > 300);
}

#[test]
fn scenario_selects_by_name_from_yaml() {
    let scenarios = repo_path("data/scenarios/wells.yaml");
    wellpath()
        .args(["scenario", "--file", scenarios.to_str().unwrap(), "--name", "j long reach"])
        .assert()
        .success()
        .stdout(predicate::str::contains("J-profile geometry (J long reach)"))
        .stdout(predicate::str::contains("12028.93 ft"));
}

#[test]
fn scenario_unknown_name_fails() {
    let scenarios = repo_path("data/scenarios/wells.yaml");
    wellpath()
        .args(["scenario", "--file", scenarios.to_str().unwrap(), "--name", "horizontal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn final_vertical_samples_flag_overrides_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("s.csv");

    wellpath()
        .args([
            "s",
            "--final-vertical-samples",
            "7",
            "--survey-out",
            csv_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let text = fs::read_to_string(&csv_path).expect("csv");
    let final_rows = text.lines().filter(|l| l.ends_with(",Vertical Final")).count();
    assert_eq!(final_rows, 7);
}

#[test]
fn oversized_sampling_fails_cleanly() {
    wellpath()
        .args(["s", "--tangent-samples", "1000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("100000"));
}

#[test]
fn scenario_description_is_printed() {
    let scenarios = repo_path("data/scenarios/wells.yaml");
    wellpath()
        .args(["scenario", "--file", scenarios.to_str().unwrap(), "--name", "S wide offset"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "S wide offset: Offset wider than the combined arc reach",
        ));
}
