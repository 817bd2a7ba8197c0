//! Numeric (1-10) relevance judge

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::{ChatModel, ChunkJudge, Message, RetrieverError, ScoredChunk};

/// Judge that asks the LLM to rate relevance 1-10 and keeps chunks whose
/// score meets the threshold (inclusive).
///
/// A reply that does not parse as an integer degrades to the sentinel score 0
/// rather than failing; one malformed response never aborts the batch.
#[derive(Debug)]
pub struct LlmChunkScorer<P>
where
    P: ChatModel,
{
    model: Arc<P>,
    threshold: i32,
    log_scores: bool,
}

impl<P: ChatModel> LlmChunkScorer<P> {
    pub fn new(model: Arc<P>, threshold: i32) -> Self {
        Self {
            model,
            threshold,
            log_scores: false,
        }
    }

    /// Emit each chunk's score at info level (operator insight only)
    pub fn with_log_scores(mut self, log_scores: bool) -> Self {
        self.log_scores = log_scores;
        self
    }

    fn build_prompt(query: &str, chunk: &str) -> Vec<Message> {
        vec![
            Message::system(
                "You are an assistant helping determine the relevance of a text to a user's question. Rate the relevance from 1 to 10, where 1 means 'not relevant at all' and 10 means 'highly relevant and useful.'",
            ),
            Message::user(format!(
                "Given the user question '{}', rate the relevance of the following text in answering the question.\n\n{}\n\nProvide a score from 1 to 10 based on how useful this text is in answering the question.",
                query, chunk
            )),
        ]
    }

    /// Score one chunk against the query
    pub async fn score(&self, query: &str, chunk: &str) -> Result<ScoredChunk, RetrieverError> {
        let messages = Self::build_prompt(query, chunk);
        let reply = self.model.invoke(&messages).await?;

        let score = match reply.trim().parse::<i32>() {
            Ok(score) => score,
            Err(_) => {
                warn!("unparseable score reply {:?}, defaulting to 0", reply);
                0
            }
        };

        if self.log_scores {
            info!("score: {} - {}", score, chunk);
        } else {
            debug!("scored chunk: score={}", score);
        }

        Ok(ScoredChunk::new(chunk, score))
    }
}

#[async_trait]
impl<P: ChatModel> ChunkJudge for LlmChunkScorer<P> {
    async fn is_relevant(&self, query: &str, chunk: &str) -> Result<bool, RetrieverError> {
        let scored = self.score(query, chunk).await?;
        Ok(scored.meets_threshold(self.threshold))
    }

    fn judge_name(&self) -> &'static str {
        "scored"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::MockChatModel;

    fn scorer_with_reply(reply: &str, threshold: i32) -> LlmChunkScorer<MockChatModel> {
        LlmChunkScorer::new(
            Arc::new(MockChatModel::new("mock").with_default_reply(reply)),
            threshold,
        )
    }

    #[tokio::test]
    async fn test_numeric_reply_is_parsed() {
        let scored = scorer_with_reply("7", 5).score("q", "c").await.unwrap();
        assert_eq!(scored.score, 7);
        assert_eq!(scored.chunk, "c");
    }

    #[tokio::test]
    async fn test_reply_is_trimmed_before_parsing() {
        let scored = scorer_with_reply(" 9 \n", 5).score("q", "c").await.unwrap();
        assert_eq!(scored.score, 9);
    }

    #[tokio::test]
    async fn test_unparseable_reply_defaults_to_zero() {
        for reply in ["high", "", "8/10", "score: 8"] {
            let scored = scorer_with_reply(reply, 5).score("q", "c").await.unwrap();
            assert_eq!(scored.score, 0, "reply {:?} should default to 0", reply);
        }
    }

    #[tokio::test]
    async fn test_threshold_boundary_is_inclusive() {
        assert!(scorer_with_reply("5", 5).is_relevant("q", "c").await.unwrap());
        assert!(!scorer_with_reply("4", 5).is_relevant("q", "c").await.unwrap());
    }

    #[tokio::test]
    async fn test_prompt_embeds_query_and_chunk() {
        let model = Arc::new(MockChatModel::new("mock").with_default_reply("8"));
        let scorer = LlmChunkScorer::new(Arc::clone(&model), 5);

        scorer.score("what is rust?", "rust is a language").await.unwrap();

        let invocations = model.invocations();
        assert_eq!(invocations.len(), 1);
        assert!(invocations[0][0].content.contains("Rate the relevance from 1 to 10"));
        assert!(invocations[0][1].content.contains("'what is rust?'"));
        assert!(invocations[0][1].content.contains("rust is a language"));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let scorer = LlmChunkScorer::new(
            Arc::new(MockChatModel::new("mock").with_error("network error")),
            5,
        );

        let err = scorer.score("q", "c").await.unwrap_err();
        assert!(err.to_string().contains("network error"));
    }

    #[tokio::test]
    async fn test_judge_name() {
        assert_eq!(scorer_with_reply("5", 5).judge_name(), "scored");
    }
}
