/// LLM Client: the single point of entry for all model calls in GreenLoops.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// Flows reach the model through the `PromptBoundary` trait, which `LlmClient`
/// implements and tests replace with a stub.
///
/// Every call is a single attempt. Failures surface to the caller immediately.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::media::ImageDataUri;

pub mod prompts;
#[cfg(test)]
pub mod stub;

const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls in GreenLoops.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response for '{prompt}' does not match its schema: {source}")]
    Schema {
        prompt: &'static str,
        source: serde_json::Error,
    },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A rendered prompt ready for the boundary: named template, system prompt,
/// interpolated text and any attached images.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub name: &'static str,
    pub system: &'static str,
    pub text: String,
    pub images: Vec<ImageDataUri>,
}

/// The generative-model boundary. Returns the model's JSON output or fails.
///
/// Carried in `AppState` as `Arc<dyn PromptBoundary>`.
#[async_trait]
pub trait PromptBoundary: Send + Sync {
    async fn run(&self, prompt: &Prompt) -> Result<Value, LlmError>;
}

/// Runs a prompt and deserializes its output strictly into `T`.
/// A payload that does not fit `T` is a `LlmError::Schema` failure.
pub async fn run_typed<T: DeserializeOwned>(
    boundary: &dyn PromptBoundary,
    prompt: &Prompt,
) -> Result<T, LlmError> {
    let value = boundary.run(prompt).await?;
    serde_json::from_value(value).map_err(|source| LlmError::Schema {
        prompt: prompt.name,
        source,
    })
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Image { source: ImageSource<'a> },
    Text { text: &'a str },
}

#[derive(Debug, Serialize)]
struct ImageSource<'a> {
    #[serde(rename = "type")]
    source_type: &'a str,
    media_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// The LLM client used by both flows. Wraps the Anthropic Messages API.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    messages_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, api_url: &str, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            messages_url: format!("{}{MESSAGES_PATH}", api_url.trim_end_matches('/')),
        })
    }

    /// Makes one call to the Messages API, returning the full response object.
    /// Images are sent ahead of the prompt text in the single user message.
    pub async fn call(&self, prompt: &Prompt) -> Result<LlmResponse, LlmError> {
        let mut content: Vec<ContentPart<'_>> = prompt
            .images
            .iter()
            .map(|image| ContentPart::Image {
                source: ImageSource {
                    source_type: "base64",
                    media_type: &image.media_type,
                    data: &image.data,
                },
            })
            .collect();
        content.push(ContentPart::Text { text: &prompt.text });

        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system: prompt.system,
            messages: vec![AnthropicMessage {
                role: "user",
                content,
            }],
        };

        let response = self
            .client
            .post(&self.messages_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            prompt = prompt.name,
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens,
            llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }
}

#[async_trait]
impl PromptBoundary for LlmClient {
    async fn run(&self, prompt: &Prompt) -> Result<Value, LlmError> {
        let response = self.call(prompt).await?;

        let text = response.text().ok_or(LlmError::EmptyContent)?;

        // Strip markdown code fences if the model wraps JSON in them
        let text = strip_json_fences(text);
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }

        serde_json::from_str(text).map_err(LlmError::Parse)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
