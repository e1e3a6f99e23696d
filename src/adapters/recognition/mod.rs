//! Recognition adapters.
//!
//! `literal` recognizers cover digits, common English number words, and
//! absolute or simple relative date expressions without any external
//! service. `scripted` recognizers are builder-configured test doubles
//! returning queued candidate lists or failures.

mod literal;
mod scripted;

pub use literal::{LiteralDateTimeRecognizer, LiteralNumberRecognizer};
pub use scripted::{ScriptedDateTimeRecognizer, ScriptedNumberRecognizer};
