//! Recognizer Ports - Interfaces for number and date/time recognition.
//!
//! Recognizers interpret free text ("twelve", "tomorrow at 9") into zero or
//! more candidates, ordered by the recognizer's own ranking. A call may
//! fail as a whole; the validators turn that into a rejection message.

use async_trait::async_trait;

use crate::domain::booking::{DateTimeCandidate, Locale, NumberCandidate, RecognitionError};

/// Port for recognizing numbers in free text
#[async_trait]
pub trait NumberRecognizer: Send + Sync {
    /// Interpret `text` as zero or more numeric candidates, best-first.
    async fn recognize_number(
        &self,
        text: &str,
        locale: Locale,
    ) -> Result<Vec<NumberCandidate>, RecognitionError>;
}

/// Port for recognizing dates and times in free text
#[async_trait]
pub trait DateTimeRecognizer: Send + Sync {
    /// Interpret `text` as zero or more date/time candidates, best-first.
    /// Each candidate resolves to a single instant or a start/end range.
    async fn recognize_datetime(
        &self,
        text: &str,
        locale: Locale,
    ) -> Result<Vec<DateTimeCandidate>, RecognitionError>;
}
