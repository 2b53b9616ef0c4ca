mod common;
use common::{alog, punch_in_out, register_elevated, register_regular, setup_data_dir, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_forbidden_for_regular_users() {
    let dir = setup_data_dir("export_regular_forbidden");
    register_regular(&dir, "u1", "Alice");
    punch_in_out(&dir, "u1", "Alice");

    let out = temp_out("export_regular_forbidden", "csv");
    alog()
        .args([
            "--data-dir", &dir, "--user", "u1", "--name", "Alice", "export", "--format", "csv",
            "--file", &out, "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("Forbidden"));
}

#[test]
fn test_export_forbidden_for_admin() {
    let dir = setup_data_dir("export_admin_forbidden");
    register_regular(&dir, "u1", "Alice");
    punch_in_out(&dir, "u1", "Alice");

    let out = temp_out("export_admin_forbidden", "csv");
    alog()
        .args([
            "--data-dir", &dir, "--user", "admin", "--name", "admin", "export", "--format",
            "csv", "--file", &out, "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("Forbidden"));
}

#[test]
fn test_export_with_no_records() {
    let dir = setup_data_dir("export_empty");
    register_elevated(&dir, "e1", "Eve");

    let out = temp_out("export_empty", "csv");
    alog()
        .args([
            "--data-dir", &dir, "--user", "e1", "--name", "Eve", "export", "--format", "csv",
            "--file", &out, "--force",
        ])
        .assert()
        .failure()
        .stderr(contains("No attendance records to export"));

    // nothing may be written before the check
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_elevated_export_writes_clears_and_reopens() {
    let dir = setup_data_dir("export_elevated_csv");
    register_regular(&dir, "u1", "Alice");
    register_regular(&dir, "u2", "Bob");
    register_elevated(&dir, "e1", "Eve");

    punch_in_out(&dir, "u1", "Alice");
    punch_in_out(&dir, "u2", "Bob");
    punch_in_out(&dir, "e1", "Eve");

    let out = temp_out("export_elevated_csv", "csv");
    alog()
        .args([
            "--data-dir", &dir, "--user", "e1", "--name", "Eve", "export", "--format", "csv",
            "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("Exported 3 records"))
        .stdout(contains("New session opened"));

    // sink received exactly 3 rows (plus the header line)
    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content.lines().count(), 4);
    assert!(content.contains("Alice"));
    assert!(content.contains("Bob"));
    assert!(content.contains("Eve"));

    // default retention clears everything
    alog()
        .args(["--data-dir", &dir, "--user", "admin", "--name", "admin", "records"])
        .assert()
        .success()
        .stdout(contains("No attendance records"));

    // and the exporter is punched back in
    alog()
        .args(["--data-dir", &dir, "sessions"])
        .assert()
        .success()
        .stdout(contains("e1"));
}

#[test]
fn test_export_json_format() {
    let dir = setup_data_dir("export_json");
    register_elevated(&dir, "e1", "Eve");
    punch_in_out(&dir, "e1", "Eve");

    let out = temp_out("export_json", "json");
    alog()
        .args([
            "--data-dir", &dir, "--user", "e1", "--name", "Eve", "export", "--format", "json",
            "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"user_id\": \"e1\""));
    assert!(content.contains("\"duration\""));
}

#[test]
fn test_export_history_and_admin_copy() {
    let dir = setup_data_dir("export_history_copy");
    register_elevated(&dir, "e1", "Eve");
    punch_in_out(&dir, "e1", "Eve");

    let out = temp_out("export_history_copy", "csv");
    alog()
        .args([
            "--data-dir", &dir, "--user", "e1", "--name", "Eve", "export", "--format", "csv",
            "--file", &out, "--force",
        ])
        .assert()
        .success();

    // the audit log has the event
    alog()
        .args(["--data-dir", &dir, "exports"])
        .assert()
        .success()
        .stdout(contains("e1"))
        .stdout(contains(out.as_str()));

    // admins redistribute the artifact
    let copy = temp_out("export_history_copy_dest", "csv");
    alog()
        .args([
            "--data-dir", &dir, "--user", "admin", "--name", "admin", "exports", "--copy", "1",
            "--file", &copy,
        ])
        .assert()
        .success();
    assert!(std::path::Path::new(&copy).exists());

    // elevated users do not
    let copy2 = temp_out("export_history_copy_dest2", "csv");
    alog()
        .args([
            "--data-dir", &dir, "--user", "e1", "--name", "Eve", "exports", "--copy", "1",
            "--file", &copy2,
        ])
        .assert()
        .failure()
        .stderr(contains("Forbidden"));
}
