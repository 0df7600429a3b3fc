use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Hours a session may stay open before any further swipe forces a
/// sign-out.
pub const DEFAULT_TIMEOUT_HOURS: i64 = 4;

/// An active TA sign-in. Created by `SessionLogic::sign_in`, destroyed
/// by explicit sign-out or by the staleness check during submission.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Session {
    /// One of the allow-list course codes, e.g. "2070".
    pub course_number: String,
    /// Single word, no internal whitespace.
    pub ta_name: String,
    /// Weekday abbreviation + AM/PM in the reference zone, e.g. "Mon PM".
    pub section_label: String,
    /// Raw capture moment of the sign-in, UTC.
    pub login_at: DateTime<Utc>,
    pub active: bool,
}

impl Session {
    pub fn new(
        course_number: impl Into<String>,
        ta_name: impl Into<String>,
        section_label: impl Into<String>,
        login_at: DateTime<Utc>,
    ) -> Self {
        Self {
            course_number: course_number.into(),
            ta_name: ta_name.into(),
            section_label: section_label.into(),
            login_at,
            active: true,
        }
    }

    /// True when more than `timeout_hours` have elapsed since login.
    /// The comparison is strict: a swipe at exactly the threshold is
    /// still accepted.
    pub fn is_stale(&self, now: DateTime<Utc>, timeout_hours: i64) -> bool {
        now - self.login_at > Duration::hours(timeout_hours)
    }
}
