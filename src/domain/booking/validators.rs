//! Per-slot validators for the booking sequence.
//!
//! Each validator is pure: it reads its input (plus, for age and pickup
//! date, the recognizer's candidate list) and produces either an accepted
//! typed value or the rejection message to re-ask with. Flow state and the
//! rider profile are mutated by the turn handler, never here.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

use super::recognition::{DateTimeCandidate, NumberCandidate, RecognitionError};

/// Youngest age a booking accepts, inclusive.
const MIN_AGE: i64 = 18;
/// Oldest age a booking accepts, inclusive.
const MAX_AGE: i64 = 120;

/// Display format for an accepted pickup date, day precision.
const SHORT_DATE_FORMAT: &str = "%-m/%-d/%Y";

pub const NAME_REQUIRED: &str = "Please enter a name that contains at least one character.";
pub const AGE_OUT_OF_RANGE: &str = "Please enter an age between 18 and 120.";
pub const AGE_NOT_UNDERSTOOD: &str =
    "I'm sorry, I could not interpret that as an age. Please enter an age between 18 and 120.";
pub const PICKUP_TOO_SOON: &str = "I'm sorry, please enter a date at least an hour out.";
pub const PICKUP_NOT_UNDERSTOOD: &str =
    "I'm sorry, I could not interpret that as an appropriate date. Please enter a date at least an hour out.";

/// Result of validating one slot answer.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome<T> {
    Accepted(T),
    Rejected(String),
}

impl<T> ValidationOutcome<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    fn rejected(message: &str) -> Self {
        Self::Rejected(message.to_string())
    }
}

/// Accepts any input with at least one non-whitespace character,
/// verbatim-trimmed.
pub fn validate_name(input: &str) -> ValidationOutcome<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        ValidationOutcome::rejected(NAME_REQUIRED)
    } else {
        ValidationOutcome::Accepted(trimmed.to_string())
    }
}

/// Accepts the first candidate, in recognizer order, that resolves to a
/// whole number between 18 and 120 inclusive.
///
/// A failed recognition call rejects with a message distinct from the
/// out-of-range one, so the two paths stay distinguishable.
pub fn validate_age(
    recognized: Result<Vec<NumberCandidate>, RecognitionError>,
) -> ValidationOutcome<u32> {
    let candidates = match recognized {
        Ok(candidates) => candidates,
        Err(_) => return ValidationOutcome::rejected(AGE_NOT_UNDERSTOOD),
    };

    for candidate in candidates {
        if candidate.value.fract() != 0.0 {
            continue;
        }
        let age = candidate.value as i64;
        if (MIN_AGE..=MAX_AGE).contains(&age) {
            return ValidationOutcome::Accepted(age as u32);
        }
    }

    ValidationOutcome::rejected(AGE_OUT_OF_RANGE)
}

/// Accepts the first candidate, in recognizer order, whose resolved
/// instant is strictly later than one hour from `now`, formatted as a
/// short date.
///
/// A range candidate stands for its start. Candidates whose encoding does
/// not parse are skipped without disturbing the order.
pub fn validate_pickup_date(
    recognized: Result<Vec<DateTimeCandidate>, RecognitionError>,
    now: NaiveDateTime,
) -> ValidationOutcome<String> {
    let candidates = match recognized {
        Ok(candidates) => candidates,
        Err(_) => return ValidationOutcome::rejected(PICKUP_NOT_UNDERSTOOD),
    };

    let earliest = now + Duration::hours(1);

    for candidate in candidates {
        let parsed = match parse_point(candidate.point_value()) {
            Some(parsed) => parsed,
            None => continue,
        };
        if parsed > earliest {
            let formatted = parsed.date().format(SHORT_DATE_FORMAT).to_string();
            return ValidationOutcome::Accepted(formatted);
        }
    }

    ValidationOutcome::rejected(PICKUP_TOO_SOON)
}

/// Parses a string-encoded instant. Date-only encodings resolve to
/// midnight.
fn parse_point(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
