//! Static Knowledge Base Adapter
//!
//! Answers queries from a fixed set of entries by normalized keyword
//! overlap. Each entry pairs an answer with the question phrasings it
//! covers; a query scores against every phrasing and the best overlap
//! wins. Entries whose best score clears the threshold come back ranked
//! best-first.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::ports::{KnowledgeBase, KnowledgeBaseError, RankedAnswer};

const DEFAULT_MIN_SCORE: f32 = 0.5;

#[derive(Debug, Clone)]
struct Entry {
    phrasings: Vec<String>,
    answer: String,
}

/// Fixed in-process knowledge base.
#[derive(Debug, Clone, Default)]
pub struct StaticKnowledgeBase {
    entries: Vec<Entry>,
    min_score: f32,
}

impl StaticKnowledgeBase {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            min_score: DEFAULT_MIN_SCORE,
        }
    }

    /// Adds an entry answering any of the given question phrasings.
    pub fn with_entry<I, S>(mut self, answer: impl Into<String>, phrasings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.push(Entry {
            phrasings: phrasings.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        });
        self
    }

    /// Overrides the minimum overlap score an entry must reach.
    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = min_score;
        self
    }

    fn terms(text: &str) -> HashSet<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|term| !term.is_empty())
            .map(|term| term.to_lowercase())
            .collect()
    }

    /// Fraction of a phrasing's terms present in the query.
    fn overlap(query_terms: &HashSet<String>, phrasing: &str) -> f32 {
        let phrasing_terms = Self::terms(phrasing);
        if phrasing_terms.is_empty() {
            return 0.0;
        }
        let shared = phrasing_terms
            .iter()
            .filter(|term| query_terms.contains(*term))
            .count();
        shared as f32 / phrasing_terms.len() as f32
    }
}

#[async_trait]
impl KnowledgeBase for StaticKnowledgeBase {
    async fn answers(&self, query: &str) -> Result<Vec<RankedAnswer>, KnowledgeBaseError> {
        let query_terms = Self::terms(query);
        if query_terms.is_empty() {
            return Ok(Vec::new());
        }

        let mut ranked: Vec<RankedAnswer> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let best = entry
                    .phrasings
                    .iter()
                    .map(|phrasing| Self::overlap(&query_terms, phrasing))
                    .fold(0.0f32, f32::max);
                if best >= self.min_score {
                    Some(RankedAnswer::new(entry.answer.clone(), best))
                } else {
                    None
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> StaticKnowledgeBase {
        StaticKnowledgeBase::new()
            .with_entry("Booking", ["book a ride", "I want to book", "make a booking"])
            .with_entry(
                "We operate around the clock.",
                ["what are your hours", "when are you open"],
            )
    }

    #[tokio::test]
    async fn matching_query_returns_the_answer() {
        let answers = kb().answers("what are your hours?").await.unwrap();
        assert_eq!(answers[0].text, "We operate around the clock.");
    }

    #[tokio::test]
    async fn booking_phrasings_return_the_trigger_answer() {
        let answers = kb().answers("I want to book a ride").await.unwrap();
        assert_eq!(answers[0].text, "Booking");
    }

    #[tokio::test]
    async fn unrelated_query_returns_nothing() {
        let answers = kb().answers("tell me a joke").await.unwrap();
        assert!(answers.is_empty());
    }

    #[tokio::test]
    async fn empty_query_returns_nothing() {
        let answers = kb().answers("  ??  ").await.unwrap();
        assert!(answers.is_empty());
    }

    #[tokio::test]
    async fn results_come_back_best_first() {
        let kb = StaticKnowledgeBase::new()
            .with_min_score(0.1)
            .with_entry("partial", ["ride to town hall"])
            .with_entry("exact", ["ride home"]);

        let answers = kb.answers("ride home").await.unwrap();
        assert_eq!(answers[0].text, "exact");
        assert!(answers[0].score > answers[1].score);
    }

    #[tokio::test]
    async fn matching_is_case_insensitive() {
        let answers = kb().answers("WHAT ARE YOUR HOURS").await.unwrap();
        assert_eq!(answers.len(), 1);
    }
}
