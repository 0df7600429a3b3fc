//! Append-only workbook sink.
//!
//! The workbook is the system of record: one sheet per allowed course,
//! each confirmed swipe one appended row. The trait is the seam where
//! an already-authorized remote client (e.g. a hosted spreadsheet API)
//! would plug in; `CsvWorkbook` is the bundled implementation.

pub mod csv;

use crate::errors::AppResult;

pub use self::csv::CsvWorkbook;

/// A swipe row as it lands in a sheet:
/// [course, TA, section, identifier, timestamp].
pub type SheetRow = [String; 5];

pub trait RowSink {
    /// Append one row to the named sheet. Any connectivity, auth or
    /// quota problem surfaces as an error; there is no partial success.
    fn append_row(&mut self, sheet_name: &str, row: &SheetRow) -> AppResult<()>;
}
