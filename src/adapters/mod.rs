//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - in-memory session store
//! - `recognition` - literal recognizers plus scripted test doubles
//! - `knowledge` - static keyword-matched knowledge base plus a scripted
//!   test double

pub mod knowledge;
pub mod recognition;
pub mod storage;

pub use knowledge::{ScriptedKnowledgeBase, StaticKnowledgeBase};
pub use recognition::{
    LiteralDateTimeRecognizer, LiteralNumberRecognizer, ScriptedDateTimeRecognizer,
    ScriptedNumberRecognizer,
};
pub use storage::InMemorySessionStore;
