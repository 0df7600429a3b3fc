//! Swipe-input disambiguation.
//!
//! The same input field receives raw magnetic-stripe track data (long,
//! fixed layout) and manually typed short network IDs. Two length
//! thresholds and one anchored pattern are the entire rule.

use regex::Regex;
use std::sync::OnceLock;

use crate::errors::{AppError, AppResult};

/// Offsets of the ID field inside a card-track payload.
const CARD_ID_START: usize = 8;
const CARD_ID_END: usize = 15;

/// Inputs shorter than this are candidate netIDs.
const NETID_MAX_LEN: usize = 8;
/// Inputs longer than this are card-track payloads.
const CARD_MIN_LEN: usize = 16;

/// 2 or 3 letters followed by digits, anchored at the start.
fn netid_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z]{2,3}[0-9]+").unwrap())
}

/// Extract the student identifier from a raw swipe or typed input.
///
/// - trimmed input shorter than 8 chars matching the netID pattern:
///   the whole trimmed string is the identifier;
/// - raw input longer than 16 chars: the identifier is the fixed-width
///   field at offsets [8, 15) and the rest of the payload is discarded;
/// - anything else (including mid-length input) is unreadable.
///
/// Pure function: no side effects, same input always yields the same
/// result.
pub fn parse_identifier(raw: &str) -> AppResult<String> {
    let trimmed = raw.trim();

    if trimmed.chars().count() < NETID_MAX_LEN && netid_pattern().is_match(trimmed) {
        return Ok(trimmed.to_string());
    }

    if raw.chars().count() > CARD_MIN_LEN {
        let id: String = raw
            .chars()
            .skip(CARD_ID_START)
            .take(CARD_ID_END - CARD_ID_START)
            .collect();
        return Ok(id);
    }

    Err(AppError::UnreadableSwipe)
}
