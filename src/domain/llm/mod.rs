//! Chat model domain types and the injected LLM capability trait

mod message;
mod model;

pub use message::{Message, MessageRole};
pub use model::ChatModel;

#[cfg(test)]
pub use model::mock::MockChatModel;
