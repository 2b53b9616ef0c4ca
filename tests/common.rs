#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn alog() -> Command {
    cargo_bin_cmd!("attendlog")
}

/// Create a unique test data dir inside the system temp dir and remove any
/// leftover state from previous runs
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attendlog", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Register a regular account (self-service, no credentials needed)
pub fn register_regular(dir: &str, user_id: &str, display_name: &str) {
    alog()
        .args(["--data-dir", dir, "register", user_id, display_name])
        .assert()
        .success();
}

/// Register an elevated account using the seeded admin credentials
pub fn register_elevated(dir: &str, user_id: &str, display_name: &str) {
    alog()
        .args([
            "--data-dir",
            dir,
            "--user",
            "admin",
            "--name",
            "admin",
            "register",
            user_id,
            display_name,
            "--role",
            "elevated",
        ])
        .assert()
        .success();
}

/// Punch in and straight back out, producing one attendance record
pub fn punch_in_out(dir: &str, user_id: &str, display_name: &str) {
    alog()
        .args(["--data-dir", dir, "--user", user_id, "--name", display_name, "in"])
        .assert()
        .success();
    alog()
        .args(["--data-dir", dir, "--user", user_id, "--name", display_name, "out"])
        .assert()
        .success();
}
