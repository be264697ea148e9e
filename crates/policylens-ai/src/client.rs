//! Chat-completions wire types and the HTTP backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::ClassifyError;

/// Reasoning-service connection settings.
///
/// Constructed once at process start and passed in explicitly; there is no
/// module-level client or credential state.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl AiConfig {
    pub const DEFAULT_MODEL: &'static str = "gpt-4o";
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: Self::DEFAULT_MODEL.to_string(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }
}

// ── Request wire types ──

/// One role-tagged message segment.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionSpec {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub function: FunctionSpec,
}

impl ToolSpec {
    pub fn function(name: &str, description: &str, parameters: Value) -> Self {
        Self {
            kind: "function",
            function: FunctionSpec {
                name: name.to_string(),
                description: description.to_string(),
                parameters,
            },
        }
    }
}

/// Outbound request: ordered message segments, one declared tool, and a
/// directive forcing its invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub tools: Vec<ToolSpec>,
    pub tool_choice: Value,
}

// ── Response wire types ──

/// Raw reply from the service; discarded once decoded into a verdict.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub tool_calls: Vec<ToolCall>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolCall {
    pub function: FunctionCall,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// JSON-encoded argument string, parsed and validated by the decoder.
    pub arguments: String,
}

// ── Backend ──

/// Transport seam for the reasoning service.
///
/// The pipeline is generic over this trait so tests can substitute a
/// scripted in-memory backend for the network.
pub trait ChatBackend {
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<ChatResponse, ClassifyError>> + Send;
}

/// HTTP backend for an OpenAI-compatible chat-completions endpoint.
pub struct OpenAiBackend {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiBackend {
    /// Create a backend for the configured endpoint.
    ///
    /// `base_url` should be like `https://api.openai.com/v1` (no trailing
    /// slash).
    pub fn new(config: &AiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl ChatBackend for OpenAiBackend {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, ClassifyError> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(url = %url, model = %request.model, "sending classification request");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(ClassifyError::unavailable)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClassifyError::ServiceUnavailable(format!(
                "server returned {}: {body}",
                status.as_u16()
            )));
        }

        resp.json::<ChatResponse>()
            .await
            .map_err(ClassifyError::unavailable)
    }
}
