//! Literal recognizers.
//!
//! Deterministic, dependency-free interpretations of English input:
//! digits, decimal strings, and common number words for numbers; absolute
//! date formats and a few relative phrases for date-times. They stand in
//! for a full natural-language recognition service while honoring the same
//! contracts.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::booking::{DateTimeCandidate, Locale, NumberCandidate, RecognitionError};
use crate::ports::{DateTimeRecognizer, NumberRecognizer};

static NUMBER_WORDS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("zero", 0.0),
        ("one", 1.0),
        ("two", 2.0),
        ("three", 3.0),
        ("four", 4.0),
        ("five", 5.0),
        ("six", 6.0),
        ("seven", 7.0),
        ("eight", 8.0),
        ("nine", 9.0),
        ("ten", 10.0),
        ("eleven", 11.0),
        ("twelve", 12.0),
        ("thirteen", 13.0),
        ("fourteen", 14.0),
        ("fifteen", 15.0),
        ("sixteen", 16.0),
        ("seventeen", 17.0),
        ("eighteen", 18.0),
        ("nineteen", 19.0),
        ("twenty", 20.0),
        ("thirty", 30.0),
        ("forty", 40.0),
        ("fifty", 50.0),
        ("sixty", 60.0),
        ("seventy", 70.0),
        ("eighty", 80.0),
        ("ninety", 90.0),
        ("hundred", 100.0),
        ("dozen", 12.0),
    ])
});

/// Recognizes numbers written as digits or common English words.
///
/// Handles "12", "12.5", "twelve", "a dozen", and hyphenated compounds
/// like "twenty-five". Candidates are returned in order of appearance.
#[derive(Debug, Clone, Default)]
pub struct LiteralNumberRecognizer;

impl LiteralNumberRecognizer {
    pub fn new() -> Self {
        Self
    }

    fn resolve_token(token: &str) -> Option<f64> {
        let cleaned = token.trim_matches(|c: char| ",.!?;:".contains(c));
        if cleaned.is_empty() {
            return None;
        }
        if let Ok(value) = cleaned.parse::<f64>() {
            return Some(value);
        }
        let lowered = cleaned.to_lowercase();
        if let Some(value) = NUMBER_WORDS.get(lowered.as_str()) {
            return Some(*value);
        }
        // Hyphenated compounds: tens word plus a units word.
        if let Some((tens, units)) = lowered.split_once('-') {
            let tens = NUMBER_WORDS.get(tens)?;
            let units = NUMBER_WORDS.get(units)?;
            if tens % 10.0 == 0.0 && *units < 10.0 {
                return Some(tens + units);
            }
        }
        None
    }
}

#[async_trait]
impl NumberRecognizer for LiteralNumberRecognizer {
    async fn recognize_number(
        &self,
        text: &str,
        locale: Locale,
    ) -> Result<Vec<NumberCandidate>, RecognitionError> {
        if locale != Locale::English {
            return Err(RecognitionError::UnsupportedLocale(locale));
        }

        let candidates = text
            .split_whitespace()
            .filter_map(|token| {
                Self::resolve_token(token).map(|value| NumberCandidate::new(token, value))
            })
            .collect();

        Ok(candidates)
    }
}

const ABSOLUTE_DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

const ABSOLUTE_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Recognizes absolute date-times and a few relative English phrases.
///
/// Absolute inputs such as "2026-12-24 18:15" resolve as written;
/// "today" and "tomorrow" resolve at day precision; "now" and
/// "in N hours/days" resolve relative to the wall clock.
#[derive(Debug, Clone, Default)]
pub struct LiteralDateTimeRecognizer;

impl LiteralDateTimeRecognizer {
    pub fn new() -> Self {
        Self
    }

    fn encode(dt: NaiveDateTime) -> String {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    fn encode_date(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    fn resolve(text: &str, now: NaiveDateTime) -> Option<DateTimeCandidate> {
        let trimmed = text.trim();
        let lowered = trimmed.to_lowercase();

        match lowered.as_str() {
            "now" => return Some(DateTimeCandidate::point(trimmed, Self::encode(now))),
            "today" => {
                return Some(DateTimeCandidate::point(trimmed, Self::encode_date(now.date())))
            }
            "tomorrow" => {
                let tomorrow = now.date() + Duration::days(1);
                return Some(DateTimeCandidate::point(trimmed, Self::encode_date(tomorrow)));
            }
            _ => {}
        }

        if let Some(relative) = Self::resolve_relative(&lowered, now) {
            return Some(DateTimeCandidate::point(trimmed, Self::encode(relative)));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(DateTimeCandidate::point(trimmed, Self::encode(dt.naive_local())));
        }
        for format in ABSOLUTE_DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Some(DateTimeCandidate::point(trimmed, Self::encode(dt)));
            }
        }
        for format in ABSOLUTE_DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Some(DateTimeCandidate::point(trimmed, Self::encode_date(date)));
            }
        }

        None
    }

    /// Parses "in N hours", "in an hour", "in N days".
    fn resolve_relative(lowered: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let rest = lowered.strip_prefix("in ")?;
        let (amount, unit) = match rest.split_once(' ') {
            Some(parts) => parts,
            None => return None,
        };
        let count: i64 = match amount {
            "a" | "an" => 1,
            other => other.parse().ok()?,
        };
        match unit.trim_end_matches('s') {
            "hour" => Some(now + Duration::hours(count)),
            "day" => Some(now + Duration::days(count)),
            "minute" => Some(now + Duration::minutes(count)),
            _ => None,
        }
    }
}

#[async_trait]
impl DateTimeRecognizer for LiteralDateTimeRecognizer {
    async fn recognize_datetime(
        &self,
        text: &str,
        locale: Locale,
    ) -> Result<Vec<DateTimeCandidate>, RecognitionError> {
        if locale != Locale::English {
            return Err(RecognitionError::UnsupportedLocale(locale));
        }

        let now = Local::now().naive_local();
        Ok(Self::resolve(text, now).into_iter().collect())
    }
}
