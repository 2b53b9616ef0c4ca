mod common;
use common::{alog, register_elevated, register_regular, setup_data_dir};
use predicates::str::contains;

#[test]
fn test_clock_in_then_out_produces_a_record() {
    let dir = setup_data_dir("clock_in_out");
    register_regular(&dir, "u1", "Alice");

    alog()
        .args(["--data-dir", &dir, "--user", "u1", "--name", "Alice", "in"])
        .assert()
        .success()
        .stdout(contains("Time In recorded"));

    alog()
        .args(["--data-dir", &dir, "sessions"])
        .assert()
        .success()
        .stdout(contains("u1"));

    alog()
        .args(["--data-dir", &dir, "--user", "u1", "--name", "Alice", "out"])
        .assert()
        .success()
        .stdout(contains("Time Out recorded"));

    alog()
        .args(["--data-dir", &dir, "sessions"])
        .assert()
        .success()
        .stdout(contains("No open sessions"));

    alog()
        .args(["--data-dir", &dir, "--user", "u1", "--name", "Alice", "records"])
        .assert()
        .success()
        .stdout(contains("u1"));
}

#[test]
fn test_second_clock_in_is_rejected() {
    let dir = setup_data_dir("double_clock_in");
    register_regular(&dir, "u1", "Alice");

    alog()
        .args(["--data-dir", &dir, "--user", "u1", "--name", "Alice", "in"])
        .assert()
        .success();

    alog()
        .args(["--data-dir", &dir, "--user", "u1", "--name", "Alice", "in"])
        .assert()
        .failure()
        .stderr(contains("open session already exists"));

    // even when the id is typed with different casing
    alog()
        .args(["--data-dir", &dir, "--user", "U1", "--name", "ALICE", "in"])
        .assert()
        .failure()
        .stderr(contains("open session already exists"));
}

#[test]
fn test_clock_out_identity_is_exact_match() {
    let dir = setup_data_dir("clock_out_exact");
    register_regular(&dir, "u1", "Alice");

    alog()
        .args(["--data-dir", &dir, "--user", "u1", "--name", "Alice", "in"])
        .assert()
        .success();

    // login tolerates case differences, clock-out does not
    alog()
        .args(["--data-dir", &dir, "--user", "u1", "--name", "alice", "out"])
        .assert()
        .failure()
        .stderr(contains("Credentials do not match"));

    alog()
        .args(["--data-dir", &dir, "--user", "u1", "--name", "Alice", "out"])
        .assert()
        .success();
}

#[test]
fn test_clock_out_without_open_session() {
    let dir = setup_data_dir("clock_out_none");
    register_regular(&dir, "u1", "Alice");

    alog()
        .args(["--data-dir", &dir, "--user", "u1", "--name", "Alice", "out"])
        .assert()
        .failure()
        .stderr(contains("no open session"));
}

#[test]
fn test_clock_out_unknown_session_id() {
    let dir = setup_data_dir("clock_out_unknown_id");
    register_regular(&dir, "u1", "Alice");

    alog()
        .args([
            "--data-dir", &dir, "--user", "u1", "--name", "Alice", "out", "--session",
            "u9_20250101000000",
        ])
        .assert()
        .failure()
        .stderr(contains("Session not found"));
}

#[test]
fn test_auto_session_is_gated_to_elevated() {
    let dir = setup_data_dir("auto_gated");
    register_regular(&dir, "u1", "Alice");
    register_elevated(&dir, "e1", "Eve");

    alog()
        .args(["--data-dir", &dir, "--user", "u1", "--name", "Alice", "auto"])
        .assert()
        .failure()
        .stderr(contains("Forbidden"));

    alog()
        .args(["--data-dir", &dir, "--user", "e1", "--name", "Eve", "auto"])
        .assert()
        .success()
        .stdout(contains("Auto session opened"));
}

#[test]
fn test_force_out_requires_admin() {
    let dir = setup_data_dir("force_out_gated");
    register_regular(&dir, "u1", "Alice");
    register_regular(&dir, "u2", "Bob");

    alog()
        .args(["--data-dir", &dir, "--user", "u2", "--name", "Bob", "in"])
        .assert()
        .success();

    alog()
        .args([
            "--data-dir", &dir, "--user", "u1", "--name", "Alice", "force-out",
            "u2_20250101000000",
        ])
        .assert()
        .failure()
        .stderr(contains("Forbidden"));
}

#[test]
fn test_admin_force_out_closes_the_session() {
    let dir = setup_data_dir("force_out_admin");
    register_regular(&dir, "u1", "Alice");

    alog()
        .args(["--data-dir", &dir, "--user", "u1", "--name", "Alice", "in"])
        .assert()
        .success();

    // read the session id back through the library
    let store = attendlog::store::Store::open(std::path::Path::new(&dir)).expect("open store");
    let ledger =
        attendlog::core::Ledger::open(store, attendlog::config::RetentionPolicy::ClearAll)
            .expect("open ledger");
    let session_id = ledger
        .open_session_for("u1")
        .expect("open session")
        .session_id
        .clone();
    drop(ledger);

    alog()
        .args([
            "--data-dir", &dir, "--user", "admin", "--name", "admin", "force-out", &session_id,
        ])
        .assert()
        .success()
        .stdout(contains("terminated"));

    alog()
        .args(["--data-dir", &dir, "sessions"])
        .assert()
        .success()
        .stdout(contains("No open sessions"));
}
