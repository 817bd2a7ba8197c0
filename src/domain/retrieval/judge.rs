//! Chunk relevance judging trait and verdict types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::RetrieverError;

#[cfg(test)]
use mockall::automock;

/// A chunk with its binary relevance verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedChunk {
    pub chunk: String,
    pub relevant: bool,
}

impl ClassifiedChunk {
    pub fn new(chunk: impl Into<String>, relevant: bool) -> Self {
        Self {
            chunk: chunk.into(),
            relevant,
        }
    }
}

/// A chunk with its 1-10 relevance score.
///
/// Score 0 is the sentinel for model output that could not be parsed as an
/// integer; such chunks are treated as maximally irrelevant, never as errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk: String,
    pub score: i32,
}

impl ScoredChunk {
    pub fn new(chunk: impl Into<String>, score: i32) -> Self {
        Self {
            chunk: chunk.into(),
            score,
        }
    }

    /// Whether this chunk passes the threshold (inclusive boundary)
    pub fn meets_threshold(&self, threshold: i32) -> bool {
        self.score >= threshold
    }
}

/// The keep/drop decision seam used by the parallel filter
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChunkJudge: Send + Sync {
    /// Judge whether a chunk is relevant to the query
    async fn is_relevant(&self, query: &str, chunk: &str) -> Result<bool, RetrieverError>;

    /// Get the judge name
    fn judge_name(&self) -> &'static str;
}
