//! Table rendering for the local display list.
//!
//! The table serves no purpose other than visual confirmation that
//! swiping is working; the workbook holds the authoritative rows.

use crate::models::record::SwipeRecord;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Two-column ID/Time table over the display list, sized to fit the
    /// widest cell. Entries are rendered in the order given
    /// (most-recent-first for a station's list).
    pub fn from_entries(entries: &[SwipeRecord]) -> Self {
        let id_w = entries
            .iter()
            .map(|e| e.identifier.len())
            .chain(std::iter::once("ID".len()))
            .max()
            .unwrap_or(2);
        let time_w = entries
            .iter()
            .map(|e| e.timestamp.len())
            .chain(std::iter::once("Time".len()))
            .max()
            .unwrap_or(4);

        let mut table = Self::new(vec![
            Column {
                header: "ID".to_string(),
                width: id_w,
            },
            Column {
                header: "Time".to_string(),
                width: time_w,
            },
        ]);

        for e in entries {
            table.add_row(vec![e.identifier.clone(), e.timestamp.clone()]);
        }

        table
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&format!("{:<width$} ", row[i], width = col.width));
            }
            out.push('\n');
        }

        out
    }
}
