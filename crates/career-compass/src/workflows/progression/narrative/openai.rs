use super::{coaching_prompt, NarrativeError, NarrativeGenerator};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

const MAX_TOKENS: u32 = 220;

/// Connection settings for an OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiNarratorConfig {
    /// Base URL such as `https://api.openai.com/v1` or `http://localhost:11434/v1`.
    pub base_url: String,
    /// Empty for local servers that do not authenticate.
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Narrative backend calling `{base_url}/chat/completions` with deterministic sampling.
pub struct OpenAiNarrator {
    config: OpenAiNarratorConfig,
    client: Client,
}

impl OpenAiNarrator {
    pub fn new(config: OpenAiNarratorConfig) -> Result<Self, NarrativeError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| NarrativeError::Transport(err.to_string()))?;

        info!(base_url = %config.base_url, model = %config.model, "narrative backend configured");

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl NarrativeGenerator for OpenAiNarrator {
    async fn generate(&self, profile_text: &str, industry: &str) -> Result<String, NarrativeError> {
        let prompt = coaching_prompt(profile_text, industry);
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: 0.0,
        };

        let mut request = self.client.post(self.endpoint()).json(&body);
        if !self.config.api_key.is_empty() {
            request = request.bearer_auth(&self.config.api_key);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(NarrativeError::Status(status.as_u16()));
        }

        let payload: ChatCompletionResponse = response.json().await.map_err(transport_error)?;
        let text = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(NarrativeError::EmptyResponse)?;

        debug!(industry, chars = text.len(), "narrative generated");
        Ok(text)
    }
}

fn transport_error(err: reqwest::Error) -> NarrativeError {
    if err.is_timeout() {
        NarrativeError::Timeout
    } else {
        NarrativeError::Transport(err.to_string())
    }
}
