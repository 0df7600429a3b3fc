//! Swipe submission: the state machine at the heart of the tool.
//!
//! Idle -> Validating -> Persisting -> {Success, Failed}. Each raw
//! input is processed fully before the next one is accepted; the only
//! blocking section is the retry loop around the sink append.

use chrono::{DateTime, Utc};

use crate::errors::{AppError, AppResult};
use crate::models::course::CourseMap;
use crate::models::record::SwipeRecord;
use crate::models::station::Station;
use crate::utils::time::format_swipe_timestamp;

use super::parse::parse_identifier;
use super::retry::RetryPolicy;
use super::session::SessionLogic;
use crate::sink::RowSink;

/// Terminal result of one submission. Every variant is terminal for
/// the triggering input only; none of them ends the session except
/// `SessionExpired`, which is a forced sign-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The session outlived its timeout; the station was signed out and
    /// the swipe dropped.
    SessionExpired,
    /// The input could not be read as an ID or netID; nothing was
    /// persisted and the display list is untouched.
    Rejected(String),
    /// The row was confirmed appended and the record joined the display
    /// list.
    Logged(SwipeRecord),
    /// Retries exhausted; the display list is unchanged and the TA must
    /// re-swipe manually.
    WriteFailed(String),
}

enum State {
    Validating,
    Persisting(SwipeRecord),
}

pub struct SubmitLogic;

impl SubmitLogic {
    /// Process one raw swipe captured at instant `now`.
    pub fn submit(
        station: &mut Station,
        raw: &str,
        courses: &CourseMap,
        sink: &mut dyn RowSink,
        retry: &RetryPolicy,
        timeout_hours: i64,
        now: DateTime<Utc>,
    ) -> AppResult<SubmitOutcome> {
        let session = station.session.clone().ok_or(AppError::NotSignedIn)?;

        if session.is_stale(now, timeout_hours) {
            SessionLogic::sign_out(station);
            return Ok(SubmitOutcome::SessionExpired);
        }

        let sheet_name = courses
            .sheet_name(&session.course_number)
            .ok_or_else(|| AppError::InvalidCourse(session.course_number.clone()))?
            .to_string();

        let mut state = State::Validating;
        loop {
            state = match state {
                State::Validating => match parse_identifier(raw) {
                    Ok(identifier) => State::Persisting(SwipeRecord::new(
                        identifier,
                        format_swipe_timestamp(now),
                    )),
                    Err(e) => return Ok(SubmitOutcome::Rejected(e.to_string())),
                },
                State::Persisting(record) => {
                    let row = record.sheet_row(&session);
                    let attempted =
                        retry.run(|| sink.append_row(&sheet_name, &row));
                    match attempted {
                        Ok(()) => {
                            station.push_entry(record.clone());
                            return Ok(SubmitOutcome::Logged(record));
                        }
                        Err(_) => {
                            let failure = AppError::SheetExhausted(retry.max_attempts);
                            return Ok(SubmitOutcome::WriteFailed(failure.to_string()));
                        }
                    }
                }
            };
        }
    }
}
