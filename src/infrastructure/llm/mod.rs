//! Chat model implementations

mod azure;
mod http_client;

pub use azure::{AzureOpenAiChatModel, AzureOpenAiConfig};
pub use http_client::{HttpClient, HttpClientTrait};
