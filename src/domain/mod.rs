//! Domain layer - Core types, traits, and configuration

pub mod error;
pub mod llm;
pub mod retrieval;

pub use error::RetrieverError;
pub use llm::{ChatModel, Message, MessageRole};
pub use retrieval::{ChunkJudge, ClassifiedChunk, JudgeStrategy, RetrieverConfig, ScoredChunk};
