use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Allow-list mapping a TA-entered course code to the sheet name that
/// receives its swipes. Every course code accepted at sign-in must be a
/// key of this map; unrecognized codes are a sign-in error, never a
/// swipe-time error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseMap(BTreeMap<String, String>);

impl Default for CourseMap {
    fn default() -> Self {
        let mut m = BTreeMap::new();
        m.insert("2070".to_string(), "Chem_2070".to_string());
        m.insert("2080".to_string(), "Chem_2080".to_string());
        m.insert("2510".to_string(), "Chem_2510".to_string());
        Self(m)
    }
}

impl CourseMap {
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    /// Sheet name for a course code, if allowed.
    pub fn sheet_name(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    /// (code, sheet name) pairs in code order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(c, s)| (c.as_str(), s.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
