//! Final answer generation from the relevant chunks

use std::sync::Arc;

use tracing::debug;

use crate::domain::{ChatModel, Message, RetrieverError};

/// Builds one combined prompt from the relevant chunks and asks the LLM for
/// the final answer. The reply text is returned verbatim.
#[derive(Debug)]
pub struct AnswerSynthesizer<P>
where
    P: ChatModel,
{
    model: Arc<P>,
}

impl<P: ChatModel> AnswerSynthesizer<P> {
    pub fn new(model: Arc<P>) -> Self {
        Self { model }
    }

    /// Generate the final answer from the relevant chunks
    pub async fn synthesize(
        &self,
        question: &str,
        relevant_chunks: &[String],
    ) -> Result<String, RetrieverError> {
        let combined = relevant_chunks.join("\n");

        debug!(
            "synthesizing answer from {} chunks ({} bytes)",
            relevant_chunks.len(),
            combined.len()
        );

        let messages = vec![
            Message::system(
                "You are an assistant providing comprehensive answers based on relevant information.",
            ),
            Message::user(format!(
                "Using the following relevant chunks, answer the user query '{}':\n\n{}\n\nProvide a comprehensive answer.",
                question, combined
            )),
        ];

        self.model.invoke(&messages).await
    }
}
