use serde::Serialize;

use super::session::Session;

/// One confirmed swipe, immutable once created. Kept in the station's
/// display list for visual confirmation only; the workbook row is the
/// authoritative copy.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SwipeRecord {
    pub identifier: String,
    /// Already formatted in the reference zone ("%a, %d %b %y, %I:%M %p").
    pub timestamp: String,
}

impl SwipeRecord {
    pub fn new(identifier: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Full workbook row: [course, TA, section, identifier, timestamp].
    pub fn sheet_row(&self, session: &Session) -> [String; 5] {
        [
            session.course_number.clone(),
            session.ta_name.clone(),
            session.section_label.clone(),
            self.identifier.clone(),
            self.timestamp.clone(),
        ]
    }
}
