use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::http_client::HttpClientTrait;
use crate::domain::{ChatModel, Message, MessageRole, RetrieverError};

/// Azure OpenAI API configuration
#[derive(Debug, Clone)]
pub struct AzureOpenAiConfig {
    pub endpoint: String,
    pub api_key: String,
    pub deployment: String,
    pub api_version: String,
    pub temperature: Option<f32>,
}

impl AzureOpenAiConfig {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        deployment: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            deployment: deployment.into(),
            api_version: "2024-02-01".to_string(),
            temperature: None,
        }
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature.clamp(0.0, 2.0));
        self
    }
}

/// Azure OpenAI chat-completions implementation of [`ChatModel`].
///
/// The deployment is bound at construction; each `invoke` performs exactly one
/// request. Retry, quota, and token accounting are the transport's concern.
#[derive(Debug)]
pub struct AzureOpenAiChatModel<C: HttpClientTrait> {
    client: C,
    config: AzureOpenAiConfig,
}

impl<C: HttpClientTrait> AzureOpenAiChatModel<C> {
    pub fn new(client: C, config: AzureOpenAiConfig) -> Self {
        Self { client, config }
    }

    fn build_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.deployment,
            self.config.api_version
        )
    }

    fn build_request(&self, messages: &[Message]) -> serde_json::Value {
        let messages: Vec<AzureMessage> = messages.iter().map(AzureMessage::from_domain).collect();

        let mut body = serde_json::json!({
            "messages": messages,
        });

        if let Some(temp) = self.config.temperature {
            body["temperature"] = serde_json::json!(temp);
        }

        body
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("api-key", self.config.api_key.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<String, RetrieverError> {
        let response: AzureResponse = serde_json::from_value(json).map_err(|e| {
            RetrieverError::provider("azure_openai", format!("Failed to parse response: {}", e))
        })?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| RetrieverError::provider("azure_openai", "No choices in response"))?;

        choice
            .message
            .content
            .ok_or_else(|| RetrieverError::provider("azure_openai", "No content in response"))
    }
}

#[async_trait]
impl<C: HttpClientTrait> ChatModel for AzureOpenAiChatModel<C> {
    async fn invoke(&self, messages: &[Message]) -> Result<String, RetrieverError> {
        let url = self.build_url();
        let body = self.build_request(messages);

        let response = self.client.post_json(&url, self.headers(), &body).await?;

        self.parse_response(response)
    }

    fn model_name(&self) -> &'static str {
        "azure_openai"
    }
}

// Azure OpenAI API types (same structure as OpenAI)

#[derive(Debug, Serialize)]
struct AzureMessage {
    role: String,
    content: String,
}

impl AzureMessage {
    fn from_domain(message: &Message) -> Self {
        let role = match message.role {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        };

        Self {
            role: role.to_string(),
            content: message.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AzureResponse {
    choices: Vec<AzureChoice>,
}

#[derive(Debug, Deserialize)]
struct AzureChoice {
    message: AzureResponseMessage,
}

#[derive(Debug, Deserialize)]
struct AzureResponseMessage {
    content: Option<String>,
}
