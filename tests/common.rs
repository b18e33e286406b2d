#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rider() -> Command {
    cargo_bin_cmd!("profitrider")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_profitrider.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, empty directory under the system temp dir (used as HOME or cwd)
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_profitrider_dir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Create the schema in a fresh DB without touching the user config
pub fn init_db(db_path: &str) {
    rider()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_platform(db_path: &str, name: &str) {
    rider()
        .args(["--db", db_path, "platform", "--add", name])
        .assert()
        .success();
}

/// Log one 18:00-22:00 session: 50 gross + 10 tips, 5 fuel, 20 km, 5 orders.
pub fn add_session(db_path: &str, date: &str, platform: &str) {
    rider()
        .args([
            "--db", db_path, "add", "--date", date, "--start", "6:00 PM", "--end", "22:00",
            "--platform", platform, "--orders", "5", "--km", "20", "--gross", "50", "--tips",
            "10", "--fuel", "5",
        ])
        .assert()
        .success();
}

/// Initialize DB, one platform and two sessions in September 2025
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_platform(db_path, "Uber Eats");
    add_session(db_path, "2025-09-01", "Uber Eats");
    add_session(db_path, "2025-09-03", "1");
}
