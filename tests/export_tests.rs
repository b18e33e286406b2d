mod common;
use common::{init_db, init_db_with_data, rider, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_sessions_csv_all() {
    let db_path = setup_test_db("export_sessions_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_sessions_csv_all", "csv");

    rider()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("2 session(s)"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("2025-09-03"));
    assert!(content.contains("Uber Eats"));
}

#[test]
fn test_export_sessions_json_range() {
    let db_path = setup_test_db("export_sessions_json_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_sessions_json_range", "json");

    rider()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--range",
            "2025-09-03",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["date"], "2025-09-03");
    assert_eq!(rows[0]["start_time"], "18:00");
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_no_overwrite");
    init_db_with_data(&db_path);

    let out = temp_out("export_no_overwrite", "csv");
    fs::write(&out, "keep me").expect("seed file");

    rider()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    rider()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").contains("2025-09-01"));
}

#[test]
fn test_export_empty_db_writes_nothing() {
    let db_path = setup_test_db("export_empty_db");
    init_db(&db_path);

    let out = temp_out("export_empty_db", "json");

    rider()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No sessions found"));

    assert!(!std::path::Path::new(&out).exists());
}
