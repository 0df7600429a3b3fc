//! CSV-backed workbook: a directory with one `<sheet>.csv` per course.

use csv::WriterBuilder;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::errors::AppResult;

use super::{RowSink, SheetRow};

const HEADER: [&str; 5] = ["Course", "TA", "Section", "ID", "Time"];

pub struct CsvWorkbook {
    dir: PathBuf,
}

impl CsvWorkbook {
    /// Open (creating if needed) a workbook directory.
    pub fn open(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn sheet_path(&self, sheet_name: &str) -> PathBuf {
        self.dir.join(format!("{sheet_name}.csv"))
    }
}

impl RowSink for CsvWorkbook {
    fn append_row(&mut self, sheet_name: &str, row: &SheetRow) -> AppResult<()> {
        let path = self.sheet_path(sheet_name);
        let is_new = !path.exists();

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

        if is_new {
            wtr.write_record(HEADER)?;
        }
        wtr.write_record(row)?;
        wtr.flush()?;

        Ok(())
    }
}
