#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pay() -> Command {
    cargo_bin_cmd!("paysched")
}

/// Create a unique test data-file path inside the system temp dir and remove
/// any existing file
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_paysched.json", name));
    let data_path = path.to_string_lossy().to_string();
    fs::remove_file(&data_path).ok();
    data_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write an empty schedule (no entries, zero balances) so tests start from a
/// predictable dataset instead of the bundled seed data.
pub fn write_blank_data(data_path: &str) {
    fs::write(
        data_path,
        r#"{
  "version": 1,
  "unpresented": [],
  "approval": [],
  "weeklyRequisition": [],
  "balances": { "equity": 0, "till": 0, "pesapal": 0 },
  "scheduleDate": "2025-11-15"
}"#,
    )
    .expect("write blank data file");
}

/// Run `add` and return the short id printed in the success message
/// (`... [id 1a2b3c4d]`).
pub fn add_entry(data_path: &str, collection: &str, name: &str, amount: &str, date: &str) -> String {
    let output = pay()
        .args([
            "--data", data_path, "add", collection, name, "--amount", amount, "--date", date,
        ])
        .output()
        .expect("run add");
    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let start = stdout.find("[id ").expect("id marker in add output") + 4;
    stdout[start..start + 8].to_string()
}
