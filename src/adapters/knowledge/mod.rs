//! Knowledge-base adapters.

mod scripted;
mod static_kb;

pub use scripted::ScriptedKnowledgeBase;
pub use static_kb::StaticKnowledgeBase;
