//! End-to-end checks of the tcomap binary.

use assert_cmd::Command;
use tempfile::TempDir;

fn tcomap() -> Command {
    Command::cargo_bin("tcomap").expect("binary builds")
}

#[test]
fn compare_json_output_is_well_formed() {
    let temp = TempDir::new().unwrap();
    let output = tcomap()
        .current_dir(temp.path())
        .args(["compare", "--format", "json", "--devices", "2500", "--years", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let results = value["results"].as_array().unwrap();
    assert!(results.len() >= 5);

    for result in results {
        let f = &result["financialSummary"];
        let total = f["total_tco"].as_f64().unwrap();
        let sum = f["total_capex"].as_f64().unwrap()
            + f["total_opex"].as_f64().unwrap()
            + f["total_hidden_costs"].as_f64().unwrap();
        assert_eq!(total, sum);
    }

    // Ascending TCO order
    let totals: Vec<f64> = results
        .iter()
        .map(|r| r["financialSummary"]["total_tco"].as_f64().unwrap())
        .collect();
    for pair in totals.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn compare_rejects_zero_years() {
    let temp = TempDir::new().unwrap();
    let output = tcomap()
        .current_dir(temp.path())
        .args(["compare", "--years", "0"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("years"), "stderr was: {}", stderr);
}

#[test]
fn compare_rejects_invalid_config_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".tcomap.toml"), "devices = 0\n").unwrap();

    let output = tcomap()
        .current_dir(temp.path())
        .args(["compare", "--format", "json"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("devices"), "stderr was: {}", stderr);
}

#[test]
fn compare_rejects_unparseable_config_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".tcomap.toml"), "devices = \"lots\"\n").unwrap();

    tcomap()
        .current_dir(temp.path())
        .args(["compare", "--format", "json"])
        .assert()
        .failure();
}

#[test]
fn compare_rejects_unknown_color_mode() {
    let temp = TempDir::new().unwrap();
    tcomap()
        .current_dir(temp.path())
        .args(["compare", "--color", "bogus"])
        .assert()
        .failure();
}

#[test]
fn terminal_report_written_to_a_file_is_plain_text() {
    let temp = TempDir::new().unwrap();
    let report = temp.path().join("report.txt");
    tcomap()
        .current_dir(temp.path())
        .args(["compare", "--output"])
        .arg(&report)
        .assert()
        .success();

    let contents = std::fs::read(&report).unwrap();
    assert!(!contents.contains(&0x1b), "file contains ANSI escapes");
}

#[test]
fn compare_honors_top_limit() {
    let temp = TempDir::new().unwrap();
    let output = tcomap()
        .current_dir(temp.path())
        .args(["compare", "--format", "json", "--top", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["results"].as_array().unwrap().len(), 2);
}

#[test]
fn vendors_lists_the_builtin_catalog() {
    let temp = TempDir::new().unwrap();
    let output = tcomap()
        .current_dir(temp.path())
        .arg("vendors")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8_lossy(&output);
    assert!(stdout.contains("portnox"));
    assert!(stdout.contains("cisco_ise"));
}

#[test]
fn compare_fails_loudly_on_missing_catalog() {
    let temp = TempDir::new().unwrap();
    tcomap()
        .current_dir(temp.path())
        .args(["compare", "--catalog", "no-such-catalog.toml"])
        .assert()
        .failure();
}

#[test]
fn init_writes_a_loadable_config() {
    let temp = TempDir::new().unwrap();
    tcomap()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success();
    assert!(temp.path().join(".tcomap.toml").exists());

    // A second init without --force refuses to clobber.
    tcomap().current_dir(temp.path()).arg("init").assert().failure();
    tcomap()
        .current_dir(temp.path())
        .args(["init", "--force"])
        .assert()
        .success();

    // The generated file round-trips through the compare command.
    tcomap()
        .current_dir(temp.path())
        .args(["compare", "--format", "json"])
        .assert()
        .success();
}
