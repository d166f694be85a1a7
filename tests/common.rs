#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hud() -> Command {
    cargo_bin_cmd!("hudoor")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hudoor.sqlite", name));
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

/// Write a temp CSV fixture and return its path
pub fn write_fixture(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fixture.csv", name));
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Initialize a DB and check in a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    hud()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    hud()
        .args([
            "--db", db_path, "checkin", "سارة", "0512345678", "--type", "متدرب", "--city",
            "الرياض",
        ])
        .assert()
        .success();

    hud()
        .args([
            "--db",
            db_path,
            "checkin",
            "خالد",
            "0598765432",
            "--type",
            "متطوع",
            "--city",
            "جيزان",
            "--opportunity",
            "دعم تقني",
            "--national-id",
            "1234567890",
        ])
        .assert()
        .success();
}
