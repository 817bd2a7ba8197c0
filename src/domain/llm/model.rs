use async_trait::async_trait;
use std::fmt::Debug;

use super::Message;
use crate::domain::RetrieverError;

/// Trait for chat-capable LLMs (Azure OpenAI, etc.)
///
/// Implementations are shared via `Arc` across concurrent workers and must be
/// safe for concurrent invocation. The core never retries a failed call.
#[async_trait]
pub trait ChatModel: Send + Sync + Debug {
    /// Send a sequence of role-tagged messages, receive the reply text
    async fn invoke(&self, messages: &[Message]) -> Result<String, RetrieverError>;

    /// Get the model name
    fn model_name(&self) -> &'static str;
}
