//! Retrieval infrastructure
//!
//! LLM-backed relevance judges, the fork-join filter, and answer synthesis.

mod classifier;
mod filter;
mod retriever;
mod scorer;
mod synthesizer;

pub use classifier::LlmChunkClassifier;
pub use filter::ParallelChunkFilter;
pub use retriever::Retriever;
pub use scorer::LlmChunkScorer;
pub use synthesizer::AnswerSynthesizer;
