//! Booking domain - flow state machine, rider profile, slot validators.

pub mod flow;
pub mod profile;
pub mod recognition;
pub mod validators;

pub use flow::{FlowState, Slot};
pub use profile::RiderProfile;
pub use recognition::{
    DateTimeCandidate, DateTimeResolution, Locale, NumberCandidate, RecognitionError,
};
pub use validators::ValidationOutcome;
