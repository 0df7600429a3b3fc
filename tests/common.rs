#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;

use chemlog::errors::{AppError, AppResult};
use chemlog::sink::{RowSink, SheetRow};

pub fn chl() -> Command {
    cargo_bin_cmd!("chemlog")
}

/// Create a unique workbook directory inside the system temp dir and
/// remove any leftovers from a previous run
pub fn setup_test_workbook(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_chemlog_workbook", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// A Saturday, 18:05 UTC = 13:05 in New York (EST)
pub fn saturday_afternoon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 20, 18, 5, 0).unwrap()
}

/// Same Saturday, 14:00 UTC = 09:00 in New York (EST)
pub fn saturday_morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 20, 14, 0, 0).unwrap()
}

/// A Tuesday in July, 15:00 UTC = 11:00 in New York (EDT)
pub fn summer_tuesday_morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 1, 15, 0, 0).unwrap()
}

/// In-memory sink that fails its first `fail_first` calls and records
/// every row that gets through. `fail_first = 0` never fails,
/// `fail_first = u32::MAX` always fails.
pub struct FlakySink {
    pub fail_first: u32,
    pub calls: u32,
    pub rows: Vec<(String, SheetRow)>,
}

impl FlakySink {
    pub fn reliable() -> Self {
        Self::failing_first(0)
    }

    pub fn always_failing() -> Self {
        Self::failing_first(u32::MAX)
    }

    pub fn failing_first(fail_first: u32) -> Self {
        Self {
            fail_first,
            calls: 0,
            rows: Vec::new(),
        }
    }
}

impl RowSink for FlakySink {
    fn append_row(&mut self, sheet_name: &str, row: &SheetRow) -> AppResult<()> {
        self.calls += 1;
        if self.calls <= self.fail_first {
            return Err(AppError::Other("simulated connectivity failure".into()));
        }
        self.rows.push((sheet_name.to_string(), row.clone()));
        Ok(())
    }
}
