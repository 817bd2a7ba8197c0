//! LLM Retriever
//!
//! A retrieval-augmented-generation helper library: given a user question and
//! a collection of text chunks, it filters the chunks for relevance using an
//! LLM as the judge and synthesizes a final answer from the relevant subset.
//!
//! Relevance judging fans out across a fixed-size worker pool. The chunk
//! collection is partitioned into contiguous slices, one per worker, and the
//! results are reassembled in worker-index order so the original chunk order
//! is always preserved. Two decision policies are supported: a binary yes/no
//! classification and a 1-10 score compared against a threshold.
//!
//! ```no_run
//! use std::sync::Arc;
//! use llm_retriever::{
//!     AzureOpenAiChatModel, AzureOpenAiConfig, HttpClient, Retriever, RetrieverConfig,
//! };
//!
//! # async fn example() -> Result<(), llm_retriever::RetrieverError> {
//! let config = AzureOpenAiConfig::new(
//!     "https://myresource.openai.azure.com",
//!     "api-key",
//!     "gpt-4",
//! );
//! let model = Arc::new(AzureOpenAiChatModel::new(HttpClient::new(), config));
//!
//! let retriever = Retriever::new(model, RetrieverConfig::scored(5).with_workers(4));
//! let chunks = vec!["some chunk".to_string(), "another chunk".to_string()];
//! let answer = retriever.answer("What is this about?", chunks).await?;
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{
    ChatModel, ChunkJudge, ClassifiedChunk, JudgeStrategy, Message, MessageRole, RetrieverConfig,
    RetrieverError, ScoredChunk,
};
pub use infrastructure::llm::{AzureOpenAiChatModel, AzureOpenAiConfig, HttpClient, HttpClientTrait};
pub use infrastructure::retrieval::{
    AnswerSynthesizer, LlmChunkClassifier, LlmChunkScorer, ParallelChunkFilter, Retriever,
};
