//! Recognition vocabulary - candidate interpretations of free text.
//!
//! Recognizers turn raw user input into zero or more candidates, ranked by
//! the recognizer itself. The validators interpret these candidates; they
//! never re-rank them.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Locale the recognizers interpret input under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Spanish,
    French,
}

impl Locale {
    /// Returns the IETF language tag for this locale.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::English => "en-us",
            Self::Spanish => "es-es",
            Self::French => "fr-fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Errors a recognition capability can raise for a single call.
///
/// Validators convert these into rejection messages; they never escalate.
#[derive(Debug, Clone, Error)]
pub enum RecognitionError {
    #[error("recognition service unavailable: {0}")]
    Unavailable(String),

    #[error("locale {0} is not supported by this recognizer")]
    UnsupportedLocale(Locale),
}

/// One numeric interpretation of free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberCandidate {
    /// The span of input the recognizer matched.
    pub text: String,
    /// The resolved numeric value.
    pub value: f64,
}

impl NumberCandidate {
    pub fn new(text: impl Into<String>, value: f64) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}

/// How a date/time candidate resolves: a single instant or a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateTimeResolution {
    Point(String),
    Range { start: String, end: String },
}

/// One date/time interpretation of free text, string-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeCandidate {
    /// The span of input the recognizer matched.
    pub text: String,
    pub resolution: DateTimeResolution,
}

impl DateTimeCandidate {
    /// Creates a candidate resolving to a single instant.
    pub fn point(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            resolution: DateTimeResolution::Point(value.into()),
        }
    }

    /// Creates a candidate resolving to a range.
    pub fn range(
        text: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            resolution: DateTimeResolution::Range {
                start: start.into(),
                end: end.into(),
            },
        }
    }

    /// The instant this candidate stands for: a point's value, or the
    /// start of a range.
    pub fn point_value(&self) -> &str {
        match &self.resolution {
            DateTimeResolution::Point(value) => value,
            DateTimeResolution::Range { start, .. } => start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_english() {
        assert_eq!(Locale::default(), Locale::English);
        assert_eq!(Locale::default().tag(), "en-us");
    }

    #[test]
    fn point_candidate_resolves_to_its_value() {
        let candidate = DateTimeCandidate::point("tomorrow", "2026-08-08 09:00:00");
        assert_eq!(candidate.point_value(), "2026-08-08 09:00:00");
    }

    #[test]
    fn range_candidate_resolves_to_its_start() {
        let candidate =
            DateTimeCandidate::range("next week", "2026-08-10", "2026-08-16");
        assert_eq!(candidate.point_value(), "2026-08-10");
    }

    #[test]
    fn recognition_errors_render_with_context() {
        let err = RecognitionError::Unavailable("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));

        let err = RecognitionError::UnsupportedLocale(Locale::French);
        assert!(err.to_string().contains("fr-fr"));
    }
}
