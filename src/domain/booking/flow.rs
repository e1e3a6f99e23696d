//! Booking flow state machine.
//!
//! A conversation is either idle (knowledge-base lookup governs the turn)
//! or part-way through the booking question sequence. The state records
//! the last question asked and nothing else: it alone determines which
//! validator runs on the next turn.

use serde::{Deserialize, Serialize};

/// One field of the rider profile being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Name,
    Age,
    PickupDate,
}

impl Slot {
    /// Returns the question sent when this slot is asked.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Name => "Could you please tell me your name?",
            Self::Age => "What is your age?",
            Self::PickupDate => "When would you like to be picked up?",
        }
    }

    /// Returns the slot asked after this one, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Name => Some(Self::Age),
            Self::Age => Some(Self::PickupDate),
            Self::PickupDate => None,
        }
    }
}

/// Where the conversation stands in the booking sequence.
///
/// `Idle` is the resting state: no question is outstanding and the
/// knowledge base answers free-form input. `NotStarted` marks a sequence
/// that has begun but whose first question has not gone out yet; it lasts
/// at most one transition. `Asking` waits on the answer to a specific slot
/// question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    #[default]
    Idle,
    NotStarted,
    Asking(Slot),
}

impl FlowState {
    /// Returns the slot whose answer is outstanding, if any.
    pub fn pending_slot(&self) -> Option<Slot> {
        match self {
            Self::Asking(slot) => Some(*slot),
            Self::Idle | Self::NotStarted => None,
        }
    }

    /// Returns true while a booking sequence is active.
    ///
    /// An active sequence always wins over knowledge-base lookup.
    pub fn in_sequence(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
