mod common;
use common::{alog, register_regular, setup_data_dir};
use predicates::str::contains;

use attendlog::models::{AttendanceRecord, Session};
use attendlog::store::{Store, collections};
use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid datetime")
}

#[test]
fn save_then_load_round_trips() {
    let dir = setup_data_dir("store_round_trip");
    let store = Store::open(Path::new(&dir)).expect("open store");

    let session = Session::open("u1", "Alice", dt("2025-03-10 09:00:00"));
    let records = vec![
        AttendanceRecord::close(&session, dt("2025-03-10 17:30:00")),
        AttendanceRecord::close(&session, dt("2025-03-10 18:00:00")),
    ];

    store.save(collections::RECORDS, &records).expect("save");
    let loaded: Vec<AttendanceRecord> = store.load(collections::RECORDS);

    assert_eq!(loaded, records);

    // saving again changes nothing
    store.save(collections::RECORDS, &loaded).expect("save again");
    let reloaded: Vec<AttendanceRecord> = store.load(collections::RECORDS);
    assert_eq!(reloaded, records);
}

#[test]
fn missing_collection_loads_empty() {
    let dir = setup_data_dir("store_missing");
    let store = Store::open(Path::new(&dir)).expect("open store");

    let loaded: Vec<AttendanceRecord> = store.load(collections::RECORDS);
    assert!(loaded.is_empty());
}

#[test]
fn atomic_save_leaves_no_temp_file() {
    let dir = setup_data_dir("store_atomic");
    let store = Store::open(Path::new(&dir)).expect("open store");

    let session = Session::open("u1", "Alice", dt("2025-03-10 09:00:00"));
    store
        .save(collections::SESSIONS, &[session])
        .expect("save");

    assert!(Path::new(&dir).join("active_sessions.json").exists());
    assert!(!Path::new(&dir).join("active_sessions.json.tmp").exists());
}

#[test]
fn corrupt_collection_degrades_to_empty() {
    let dir = setup_data_dir("store_corrupt");
    register_regular(&dir, "u1", "Alice");

    // clobber the sessions file; the ledger must still come up
    fs::write(format!("{dir}/active_sessions.json"), "not json at all").expect("write garbage");

    alog()
        .args(["--data-dir", &dir, "sessions"])
        .assert()
        .success()
        .stdout(contains("No open sessions"));
}

#[test]
fn init_seeds_the_reserved_admin() {
    let dir = setup_data_dir("store_init");

    alog()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Attendance store initialized"));

    alog()
        .args(["--data-dir", &dir, "users"])
        .assert()
        .success()
        .stdout(contains("admin"));
}

#[test]
fn reserved_admin_survives_a_fresh_store() {
    let dir = setup_data_dir("store_seed_admin");

    alog()
        .args(["--data-dir", &dir, "users"])
        .assert()
        .success()
        .stdout(contains("admin"));

    alog()
        .args(["--data-dir", &dir, "--user", "admin", "--name", "admin", "login"])
        .assert()
        .success()
        .stdout(contains("Admin"));
}

#[test]
fn state_survives_separate_invocations() {
    let dir = setup_data_dir("store_across_runs");
    register_regular(&dir, "u1", "Alice");

    alog()
        .args(["--data-dir", &dir, "--user", "u1", "--name", "Alice", "in"])
        .assert()
        .success();

    // a later run sees the open session left by the earlier one
    alog()
        .args(["--data-dir", &dir, "--user", "u1", "--name", "Alice", "login"])
        .assert()
        .success()
        .stdout(contains("Active session"));
}
