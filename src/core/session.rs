//! Sign-in, sign-out and staleness handling.

use chrono::{DateTime, Utc};

use crate::errors::{AppError, AppResult};
use crate::models::course::CourseMap;
use crate::models::session::Session;
use crate::models::station::Station;
use crate::utils::time::section_label;

pub struct SessionLogic;

impl SessionLogic {
    /// Validate TA name and course code and activate a session on the
    /// station at instant `now`.
    ///
    /// The display list is initialized only when no session existed
    /// before; a re-sign-in (the "update class info" path) keeps the
    /// swipes already confirmed under the previous sign-in.
    pub fn sign_in(
        station: &mut Station,
        ta_name: &str,
        course_number: &str,
        courses: &CourseMap,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        if !courses.contains(course_number) {
            return Err(AppError::InvalidCourse(course_number.to_string()));
        }

        let name = ta_name.trim();
        if name.is_empty() {
            return Err(AppError::MissingTaName);
        }
        if name.split_whitespace().count() > 1 {
            return Err(AppError::MultiWordTaName(name.to_string()));
        }

        let was_signed_in = station.session.is_some();
        station.session = Some(Session::new(
            course_number,
            name,
            section_label(now),
            now,
        ));

        if !was_signed_in {
            station.entries = Vec::new();
        }

        Ok(())
    }

    /// Deactivate the session and clear the display list
    /// unconditionally.
    pub fn sign_out(station: &mut Station) {
        if let Some(session) = station.session.as_mut() {
            session.active = false;
        }
        station.session = None;
        station.entries.clear();
    }
}
