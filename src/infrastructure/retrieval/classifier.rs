//! Binary (yes/no) relevance judge

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{ChatModel, ChunkJudge, ClassifiedChunk, Message, RetrieverError};

/// Judge that asks the LLM for a yes/no relevance verdict per chunk.
///
/// Only the exact token "yes" (trimmed, case-insensitive) counts as relevant;
/// anything else, including empty or malformed replies, is not relevant and
/// never an error.
#[derive(Debug)]
pub struct LlmChunkClassifier<P>
where
    P: ChatModel,
{
    model: Arc<P>,
}

impl<P: ChatModel> LlmChunkClassifier<P> {
    pub fn new(model: Arc<P>) -> Self {
        Self { model }
    }

    fn build_prompt(query: &str, chunk: &str) -> Vec<Message> {
        vec![
            Message::system(
                "You are an assistant helping determine relevance of text to a user question.",
            ),
            Message::user(format!(
                "Given the user question '{}', is the following text relevant and can be useful to answer to the question?\n\n{}\n\nAnswer 'yes' or 'no'.",
                query, chunk
            )),
        ]
    }

    /// Classify one chunk against the query
    pub async fn classify(
        &self,
        query: &str,
        chunk: &str,
    ) -> Result<ClassifiedChunk, RetrieverError> {
        let messages = Self::build_prompt(query, chunk);
        let reply = self.model.invoke(&messages).await?;

        let relevant = reply.trim().eq_ignore_ascii_case("yes");
        debug!("classified chunk: relevant={}, reply={:?}", relevant, reply);

        Ok(ClassifiedChunk::new(chunk, relevant))
    }
}

#[async_trait]
impl<P: ChatModel> ChunkJudge for LlmChunkClassifier<P> {
    async fn is_relevant(&self, query: &str, chunk: &str) -> Result<bool, RetrieverError> {
        Ok(self.classify(query, chunk).await?.relevant)
    }

    fn judge_name(&self) -> &'static str {
        "binary"
    }
}
