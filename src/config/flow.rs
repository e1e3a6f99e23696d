//! Booking flow configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::booking::Locale;

/// Booking flow configuration
///
/// The age range and the one-hour pickup policy are business rules, not
/// configuration; only the knowledge-base trigger label and the recognizer
/// locale vary by deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct FlowConfig {
    /// Knowledge-base answer text that starts a booking sequence
    #[serde(default = "default_booking_trigger")]
    pub booking_trigger: String,

    /// Locale the recognizers interpret input under
    #[serde(default)]
    pub locale: Locale,
}

impl FlowConfig {
    /// Validate flow configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.booking_trigger.trim().is_empty() {
            return Err(ValidationError::EmptyBookingTrigger);
        }
        Ok(())
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            booking_trigger: default_booking_trigger(),
            locale: Locale::default(),
        }
    }
}

fn default_booking_trigger() -> String {
    "Booking".to_string()
}
