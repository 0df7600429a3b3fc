use super::{record::SwipeRecord, session::Session};

/// Per-terminal state: the current sign-in (if any) plus the local
/// display list, most recent swipe first. The list is a visual
/// confirmation aid, never the system of record.
#[derive(Debug, Default, Clone)]
pub struct Station {
    pub session: Option<Session>,
    pub entries: Vec<SwipeRecord>,
}

impl Station {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.active)
    }

    /// Prepend a confirmed swipe (most-recent-first ordering).
    pub fn push_entry(&mut self, record: SwipeRecord) {
        self.entries.insert(0, record);
    }
}
