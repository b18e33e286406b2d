use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{
    add_platform, add_session, init_db, init_db_with_data, rider, setup_test_db, temp_dir,
};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_creates_schema");

    rider()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    rider()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"));
}

#[test]
fn test_platform_add_list_remove() {
    let db_path = setup_test_db("platform_add_list_remove");
    init_db(&db_path);

    rider()
        .args(["--db", &db_path, "platform", "--add", "Deliveroo"])
        .assert()
        .success()
        .stdout(contains("Platform 'Deliveroo' added"));

    rider()
        .args(["--db", &db_path, "platform", "--add", "deliveroo"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rider()
        .args(["--db", &db_path, "platform"])
        .assert()
        .success()
        .stdout(contains("Deliveroo"));

    rider()
        .args(["--db", &db_path, "platform", "--remove", "Deliveroo"])
        .assert()
        .success()
        .stdout(contains("removed"));

    rider()
        .args(["--db", &db_path, "platform", "--list"])
        .assert()
        .success()
        .stdout(contains("No platforms"));
}

#[test]
fn test_platform_in_use_cannot_be_removed() {
    let db_path = setup_test_db("platform_in_use");
    init_db_with_data(&db_path);

    rider()
        .args(["--db", &db_path, "platform", "--remove", "Uber Eats"])
        .assert()
        .failure()
        .stderr(contains("cannot be removed"));
}

#[test]
fn test_add_saves_session_and_lists_it() {
    let db_path = setup_test_db("add_saves_session");
    init_db(&db_path);
    add_platform(&db_path, "Glovo");

    rider()
        .args([
            "--db", &db_path, "add", "--date", "2025-09-10", "--start", "6:00 pm", "--end",
            "10:00 PM", "--platform", "Glovo", "--gross", "50", "--tips", "10", "--fuel", "5",
            "--km", "20", "--orders", "5",
        ])
        .assert()
        .success()
        .stdout(contains("Duration       : 4.0 hrs"))
        .stdout(contains("$55.00"))
        .stdout(contains("Excludes rent, fees, taxes"))
        .stdout(contains("Session #1 saved for 2025-09-10 (18:00 → 22:00)"));

    rider()
        .args(["--db", &db_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-10"))
        .stdout(contains("Glovo"))
        .stdout(contains("1 session"));
}

#[test]
fn test_add_overnight_session() {
    let db_path = setup_test_db("add_overnight");
    init_db(&db_path);
    add_platform(&db_path, "Glovo");

    rider()
        .args([
            "--db", &db_path, "add", "--date", "2025-09-10", "--start", "22:00", "--end",
            "02:30", "--platform", "Glovo", "--gross", "45",
        ])
        .assert()
        .success()
        .stdout(contains("Duration       : 4.5 hrs"))
        .stdout(contains("$10.00"));
}

#[test]
fn test_add_preview_does_not_save() {
    let db_path = setup_test_db("add_preview");
    init_db(&db_path);

    // no platform needed for a preview
    rider()
        .args([
            "--db", &db_path, "add", "--date", "2025-09-10", "--start", "18:00", "--end",
            "20:00", "--gross", "30", "--preview",
        ])
        .assert()
        .success()
        .stdout(contains("Preview only"))
        .stdout(contains("$15.00"));

    rider()
        .args(["--db", &db_path, "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("2025-09-10").not());
}

#[test]
fn test_add_without_platform_fails() {
    let db_path = setup_test_db("add_without_platform");
    init_db(&db_path);

    rider()
        .args(["--db", &db_path, "add", "--start", "18:00", "--end", "20:00"])
        .assert()
        .failure()
        .stderr(contains("select a platform"));
}

#[test]
fn test_add_rejects_bad_time_and_number() {
    let db_path = setup_test_db("add_bad_input");
    init_db(&db_path);
    add_platform(&db_path, "Glovo");

    rider()
        .args(["--db", &db_path, "add", "--start", "25:00", "--platform", "Glovo"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format '25:00'"));

    rider()
        .args(["--db", &db_path, "add", "--gross", "ten", "--platform", "Glovo"])
        .assert()
        .failure()
        .stderr(contains("Invalid number for gross"));
}

#[test]
fn test_bicycle_profile_discards_fuel() {
    let db_path = setup_test_db("bicycle_discards_fuel");
    init_db(&db_path);
    add_platform(&db_path, "Glovo");

    rider()
        .args(["--db", &db_path, "profile", "--transport", "bicycle"])
        .assert()
        .success()
        .stdout(contains("bicycle"));

    rider()
        .args([
            "--db", &db_path, "add", "--date", "2025-09-10", "--start", "18:00", "--end",
            "20:00", "--platform", "Glovo", "--gross", "30", "--fuel", "7",
        ])
        .assert()
        .success()
        .stdout(contains("Fuel cost ignored"))
        .stdout(contains("$30.00"));
}

#[test]
fn test_profile_fee_rules() {
    let db_path = setup_test_db("profile_fee_rules");
    init_db(&db_path);

    rider()
        .args(["--db", &db_path, "profile", "--courier-type", "fleet", "--fee", "15"])
        .assert()
        .success()
        .stdout(contains("Fleet fee set to 15%"));

    rider()
        .args(["--db", &db_path, "profile", "--fee", "120"])
        .assert()
        .failure()
        .stderr(contains("between 0 and 100"));

    rider()
        .args(["--db", &db_path, "profile", "--courier-type", "solopreneur"])
        .assert()
        .success()
        .stdout(contains("Fleet fees disabled"));

    rider()
        .args(["--db", &db_path, "profile", "--transport", "rocket"])
        .assert()
        .failure()
        .stderr(contains("Invalid transport type"));
}

#[test]
fn test_summary_week_with_fleet_fee() {
    let db_path = setup_test_db("summary_week_fleet_fee");
    init_db(&db_path);
    add_platform(&db_path, "Uber Eats");

    rider()
        .args(["--db", &db_path, "profile", "--courier-type", "fleet", "--fee", "10"])
        .assert()
        .success();

    add_session(&db_path, "2025-09-01", "Uber Eats");
    add_session(&db_path, "2025-09-03", "Uber Eats");
    // previous week, excluded
    add_session(&db_path, "2025-08-31", "Uber Eats");

    // 2 x (60 earned - 5 fuel - 5 fee)
    rider()
        .args([
            "--db", &db_path, "summary", "--period", "week", "--date", "2025-09-03",
        ])
        .assert()
        .success()
        .stdout(contains("2025-09-01 → 2025-09-03"))
        .stdout(contains("$100.00"))
        .stdout(contains("Sessions: 2"))
        .stdout(contains("Orders: 10"));
}

#[test]
fn test_summary_empty_period() {
    let db_path = setup_test_db("summary_empty");
    init_db_with_data(&db_path);

    rider()
        .args(["--db", &db_path, "summary", "--period", "today", "--date", "2030-01-01"])
        .assert()
        .success()
        .stdout(contains("No sessions in this period"));

    rider()
        .args(["--db", &db_path, "summary", "--period", "decade"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_del_session() {
    let db_path = setup_test_db("del_session");
    init_db_with_data(&db_path);

    rider()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Session #1 has been deleted"));

    rider()
        .args(["--db", &db_path, "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-03"))
        .stdout(contains("2025-09-01").not());

    rider()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Session not found: 1"));
}

#[test]
fn test_list_range() {
    let db_path = setup_test_db("list_range");
    init_db_with_data(&db_path);
    add_session(&db_path, "2024-12-31", "Uber Eats");

    rider()
        .args(["--db", &db_path, "list", "--period", "2024-12:2025-09"])
        .assert()
        .success()
        .stdout(contains("2024-12-31"))
        .stdout(contains("2025-09-01"))
        .stdout(contains("3 sessions"));

    rider()
        .args(["--db", &db_path, "list", "--period", "2025"])
        .assert()
        .success()
        .stdout(contains("2024-12-31").not());
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info_check");
    init_db_with_data(&db_path);

    rider()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    rider()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("0 applied"));
}

#[test]
fn test_add_rejects_oversized_amounts() {
    let db_path = setup_test_db("add_oversized_amounts");
    init_db(&db_path);
    add_platform(&db_path, "Glovo");

    rider()
        .args(["--db", &db_path, "profile", "--depreciation-rate", "1e10"])
        .assert()
        .failure()
        .stderr(contains("Invalid number for depreciation-rate"));

    rider()
        .args(["--db", &db_path, "add", "--km", "1e300", "--platform", "Glovo"])
        .assert()
        .failure()
        .stderr(contains("Invalid number for km"));

    rider()
        .args(["--db", &db_path, "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("No sessions logged yet"));
}

#[test]
fn test_relative_db_path_resolves_to_config_dir() {
    let home = temp_dir("relative_db_home");
    let cwd = temp_dir("relative_db_cwd");

    rider()
        .env("HOME", &home)
        .current_dir(&cwd)
        .args(["--db", "rides.sqlite", "--test", "init"])
        .assert()
        .success();

    rider()
        .env("HOME", &home)
        .current_dir(&cwd)
        .args(["--db", "rides.sqlite", "platform", "--add", "Glovo"])
        .assert()
        .success()
        .stdout(contains("Platform 'Glovo' added"));

    assert!(home.join(".profitrider").join("rides.sqlite").exists());
    assert!(!cwd.join("rides.sqlite").exists());
}

#[test]
fn test_missing_db_asks_for_init() {
    let home = temp_dir("missing_db_home");
    let cwd = temp_dir("missing_db_cwd");

    rider()
        .env("HOME", &home)
        .current_dir(&cwd)
        .args(["--db", "nowhere.sqlite", "platform", "--add", "Glovo"])
        .assert()
        .failure()
        .stderr(contains("run `init` first"));

    assert!(!home.join(".profitrider").join("nowhere.sqlite").exists());
    assert!(!cwd.join("nowhere.sqlite").exists());
}

#[test]
fn test_log_print_lists_operations() {
    let db_path = setup_test_db("log_print_operations");
    init_db_with_data(&db_path);

    rider()
        .args(["--db", &db_path, "del", "2", "--yes"])
        .assert()
        .success();

    rider()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("platform_add"))
        .stdout(contains("session 1"))
        .stdout(contains("del"))
        .stdout(contains("session 2"));
}

#[test]
fn test_config_check() {
    let home = temp_dir("config_check_home");

    rider()
        .env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("No configuration file found"));

    let dir = home.join(".profitrider");
    std::fs::create_dir_all(&dir).expect("config dir");
    std::fs::write(
        dir.join("profitrider.conf"),
        "database: ~/.profitrider/profitrider.sqlite\ndefault_period: month\n",
    )
    .expect("write config");

    rider()
        .env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing keys"))
        .stdout(contains("default_start_time"))
        .stdout(contains("recent_sessions"))
        .stdout(contains("default_period").not());

    rider()
        .env("HOME", &home)
        .args(["init"])
        .assert()
        .success();

    rider()
        .env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete"));
}
