//! Retriever facade
//!
//! Ties relevance filtering and answer synthesis together behind one object.

use std::sync::Arc;

use tracing::info;

use crate::domain::{ChatModel, JudgeStrategy, RetrieverConfig, RetrieverError};

use super::{AnswerSynthesizer, LlmChunkClassifier, LlmChunkScorer, ParallelChunkFilter};

/// RAG helper that filters a chunk collection for relevance and synthesizes
/// a final answer from the relevant subset
#[derive(Debug)]
pub struct Retriever<P>
where
    P: ChatModel + 'static,
{
    model: Arc<P>,
    config: RetrieverConfig,
}

impl<P: ChatModel + 'static> Retriever<P> {
    /// Create a new retriever
    pub fn new(model: Arc<P>, config: RetrieverConfig) -> Self {
        Self { model, config }
    }

    /// Create with default configuration
    pub fn with_defaults(model: Arc<P>) -> Self {
        Self::new(model, RetrieverConfig::default())
    }

    /// Filter the chunk collection down to the chunks relevant to the question
    pub async fn retrieve_relevant(
        &self,
        question: &str,
        chunks: Vec<String>,
    ) -> Result<Vec<String>, RetrieverError> {
        let total = chunks.len();
        info!(
            "relevance filter: strategy={:?}, workers={}, chunks={}",
            self.config.strategy, self.config.workers, total
        );

        let relevant = match self.config.strategy {
            JudgeStrategy::Binary => {
                let judge = LlmChunkClassifier::new(Arc::clone(&self.model));
                ParallelChunkFilter::new(Arc::new(judge), self.config.workers)
                    .filter(question, chunks)
                    .await?
            }
            JudgeStrategy::Scored => {
                let judge =
                    LlmChunkScorer::new(Arc::clone(&self.model), self.config.relevance_threshold)
                        .with_log_scores(self.config.log_scores);
                ParallelChunkFilter::new(Arc::new(judge), self.config.workers)
                    .filter(question, chunks)
                    .await?
            }
        };

        info!("relevance filter complete: kept {}/{}", relevant.len(), total);

        Ok(relevant)
    }

    /// Filter then synthesize: the full retrieve-and-answer flow
    pub async fn answer(
        &self,
        question: &str,
        chunks: Vec<String>,
    ) -> Result<String, RetrieverError> {
        let relevant = self.retrieve_relevant(question, chunks).await?;

        AnswerSynthesizer::new(Arc::clone(&self.model))
            .synthesize(question, &relevant)
            .await
    }

    /// Get the configuration
    pub fn config(&self) -> &RetrieverConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::MockChatModel;

    fn chunks(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_binary_flow_keeps_yes_chunks() {
        let model = Arc::new(
            MockChatModel::new("mock")
                .with_reply("chunk about cats", "yes")
                .with_reply("chunk about dogs", "no")
                .with_reply("chunk about birds", "yes"),
        );
        let retriever = Retriever::new(model, RetrieverConfig::binary().with_workers(2));

        let relevant = retriever
            .retrieve_relevant(
                "pets?",
                chunks(&["chunk about cats", "chunk about dogs", "chunk about birds"]),
            )
            .await
            .unwrap();

        assert_eq!(
            relevant,
            vec!["chunk about cats".to_string(), "chunk about birds".to_string()]
        );
    }

    #[tokio::test]
    async fn test_scored_flow_applies_threshold() {
        let model = Arc::new(
            MockChatModel::new("mock")
                .with_reply("first", "8")
                .with_reply("second", "4")
                .with_reply("third", "5"),
        );
        let retriever = Retriever::new(model, RetrieverConfig::scored(5));

        let relevant = retriever
            .retrieve_relevant("q", chunks(&["first", "second", "third"]))
            .await
            .unwrap();

        assert_eq!(relevant, vec!["first".to_string(), "third".to_string()]);
    }

    #[tokio::test]
    async fn test_answer_filters_then_synthesizes() {
        let model = Arc::new(
            MockChatModel::new("mock")
                .with_reply("Using the following relevant chunks", "final answer")
                .with_reply("keep me", "yes")
                .with_reply("drop me", "no"),
        );
        let retriever = Retriever::new(
            Arc::clone(&model),
            RetrieverConfig::binary().with_workers(1),
        );

        let answer = retriever
            .answer("q", chunks(&["keep me", "drop me"]))
            .await
            .unwrap();

        assert_eq!(answer, "final answer");

        // 2 relevance calls + 1 synthesis call
        let invocations = model.invocations();
        assert_eq!(invocations.len(), 3);
        let synthesis = &invocations[2];
        assert!(synthesis[1].content.contains("keep me"));
        assert!(!synthesis[1].content.contains("drop me"));
    }

    #[tokio::test]
    async fn test_filter_failure_aborts_answer() {
        let model = Arc::new(MockChatModel::new("mock").with_error("transport down"));
        let retriever = Retriever::with_defaults(model);

        let err = retriever.answer("q", chunks(&["a"])).await.unwrap_err();
        assert!(err.to_string().contains("transport down"));
    }

    #[tokio::test]
    async fn test_empty_chunk_collection() {
        let model = Arc::new(MockChatModel::new("mock").with_default_reply("yes"));
        let retriever = Retriever::with_defaults(Arc::clone(&model));

        let relevant = retriever.retrieve_relevant("q", Vec::new()).await.unwrap();

        assert!(relevant.is_empty());
        assert_eq!(model.invocation_count(), 0);
    }
}
