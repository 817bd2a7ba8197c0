//! Retrieval domain
//!
//! Configuration, verdict types, and the judging seam for LLM-based
//! chunk-relevance filtering.

mod config;
mod judge;

pub use config::{JudgeStrategy, RetrieverConfig};
pub use judge::{ChunkJudge, ClassifiedChunk, ScoredChunk};

#[cfg(test)]
pub use judge::MockChunkJudge;
