//! Scripted recognizers for testing.
//!
//! Builder-configured doubles for the recognizer ports: queue candidate
//! lists or failures up front, then verify what was asked afterwards.
//! An exhausted queue yields an empty candidate list, the recognizer's
//! normal "nothing understood" outcome.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::booking::{DateTimeCandidate, Locale, NumberCandidate, RecognitionError};
use crate::ports::{DateTimeRecognizer, NumberRecognizer};

/// Scripted number recognizer.
#[derive(Debug, Clone, Default)]
pub struct ScriptedNumberRecognizer {
    results: Arc<Mutex<VecDeque<Result<Vec<NumberCandidate>, RecognitionError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedNumberRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful recognition returning `candidates`.
    pub fn with_candidates(self, candidates: Vec<NumberCandidate>) -> Self {
        self.results.lock().unwrap().push_back(Ok(candidates));
        self
    }

    /// Queues a recognition failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.results
            .lock()
            .unwrap()
            .push_back(Err(RecognitionError::Unavailable(message.into())));
        self
    }

    /// Inputs this recognizer was asked about, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NumberRecognizer for ScriptedNumberRecognizer {
    async fn recognize_number(
        &self,
        text: &str,
        _locale: Locale,
    ) -> Result<Vec<NumberCandidate>, RecognitionError> {
        self.calls.lock().unwrap().push(text.to_string());
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Scripted date/time recognizer.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDateTimeRecognizer {
    results: Arc<Mutex<VecDeque<Result<Vec<DateTimeCandidate>, RecognitionError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedDateTimeRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful recognition returning `candidates`.
    pub fn with_candidates(self, candidates: Vec<DateTimeCandidate>) -> Self {
        self.results.lock().unwrap().push_back(Ok(candidates));
        self
    }

    /// Queues a recognition failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.results
            .lock()
            .unwrap()
            .push_back(Err(RecognitionError::Unavailable(message.into())));
        self
    }

    /// Inputs this recognizer was asked about, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DateTimeRecognizer for ScriptedDateTimeRecognizer {
    async fn recognize_datetime(
        &self,
        text: &str,
        _locale: Locale,
    ) -> Result<Vec<DateTimeCandidate>, RecognitionError> {
        self.calls.lock().unwrap().push(text.to_string());
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
