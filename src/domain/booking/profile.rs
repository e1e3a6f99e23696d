//! Rider profile collected by the booking sequence.

use serde::{Deserialize, Serialize};

/// The structured profile filled in one slot at a time.
///
/// Owned by the rider's session and mutated only by the turn handler after
/// a validator accepts a value. Reset to fresh once a booking completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiderProfile {
    pub name: Option<String>,
    pub age: Option<u32>,
    /// Accepted pickup date, display-formatted at day precision.
    pub pickup_date: Option<String>,
}

impl RiderProfile {
    /// Returns true once every slot has been filled.
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.age.is_some() && self.pickup_date.is_some()
    }

    /// Clears all collected values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
