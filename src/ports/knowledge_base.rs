//! Knowledge Base Port - Interface for answering free-form questions.
//!
//! An empty result is a normal "no answer" outcome, not an error. A hard
//! failure of the capability itself propagates to the host.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One ranked answer from the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAnswer {
    pub text: String,
    /// Relevance score, higher is better. Results arrive best-first.
    pub score: f32,
}

impl RankedAnswer {
    pub fn new(text: impl Into<String>, score: f32) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

/// Errors that can occur querying the knowledge base
#[derive(Debug, Clone, thiserror::Error)]
pub enum KnowledgeBaseError {
    #[error("knowledge base unavailable: {0}")]
    Unavailable(String),
}

/// Port for ranked knowledge-base lookup
#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// Returns ranked answers for `query`, best-first, possibly empty.
    async fn answers(&self, query: &str) -> Result<Vec<RankedAnswer>, KnowledgeBaseError>;
}
