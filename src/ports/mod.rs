//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - per-conversation flow state and per-rider profile,
//!   with get-or-create semantics
//! - `NumberRecognizer` / `DateTimeRecognizer` - free-text interpretation
//!   into ranked candidates
//! - `KnowledgeBase` - ranked answers for a free-text query

mod knowledge_base;
mod recognizer;
mod session_store;

pub use knowledge_base::{KnowledgeBase, KnowledgeBaseError, RankedAnswer};
pub use recognizer::{DateTimeRecognizer, NumberRecognizer};
pub use session_store::{SessionStore, SessionStoreError};
