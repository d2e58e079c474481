#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;
use rusqlite::Connection;
use work::{Shift, Task, TaskClassification, WorkDal};

/// A scratch directory under the system temp dir, emptied on creation.
pub fn scratch_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("work_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create scratch dir");
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    scratch_dir(name)
        .join("database.db")
        .to_string_lossy()
        .to_string()
}

/// The `work` binary with config and data homes pointed at `home`,
/// so the user's real config file is never read or written.
pub fn work_in(home: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("work");
    cmd.env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"));
    cmd
}

pub fn open_test_dal(name: &str) -> WorkDal {
    WorkDal::new(&setup_test_db(name)).expect("open dal")
}

/// Fixed reference instant used by tests that do not depend on "now".
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 20, 8, 0, 0).unwrap()
}

pub fn task(id: i64, description: &str, start: DateTime<Utc>) -> Task {
    Task {
        id,
        description: description.to_string(),
        classification: TaskClassification::Feature,
        start,
        end: start + chrono::Duration::minutes(30),
    }
}

pub fn shift(id: i64, start: DateTime<Utc>) -> Shift {
    Shift {
        id,
        start,
        end: start + chrono::Duration::hours(8),
    }
}

/// Check if a table exists in the schema.
pub fn table_exists(conn: &Connection, name: &str) -> bool {
    let mut stmt = conn
        .prepare("SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1")
        .expect("prepare");
    stmt.exists([name]).expect("query sqlite_master")
}
