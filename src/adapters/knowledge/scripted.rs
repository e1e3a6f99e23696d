//! Scripted knowledge base for testing.
//!
//! Queue answer lists or failures up front; an exhausted queue yields the
//! normal empty "no answer" outcome. Queries are recorded so tests can
//! assert the knowledge base was, or was not, consulted.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{KnowledgeBase, KnowledgeBaseError, RankedAnswer};

/// Scripted knowledge base.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKnowledgeBase {
    results: Arc<Mutex<VecDeque<Result<Vec<RankedAnswer>, KnowledgeBaseError>>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl ScriptedKnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful lookup returning `answers`.
    pub fn with_answers(self, answers: Vec<RankedAnswer>) -> Self {
        self.results.lock().unwrap().push_back(Ok(answers));
        self
    }

    /// Queues a hard capability failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.results
            .lock()
            .unwrap()
            .push_back(Err(KnowledgeBaseError::Unavailable(message.into())));
        self
    }

    /// Queries this knowledge base received, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl KnowledgeBase for ScriptedKnowledgeBase {
    async fn answers(&self, query: &str) -> Result<Vec<RankedAnswer>, KnowledgeBaseError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
