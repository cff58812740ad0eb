//! `OpenAI` provider implementation.
//!
//! Speaks the Chat Completions API, which is also exposed by Gemini's
//! compatibility endpoint, Groq, Ollama and LM Studio.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use super::{next_sse_data, push_utf8};
use crate::core::llm::error::{LlmError, Result};
use crate::core::llm::provider::{
    CompletionEvent, CompletionRequest, CompletionStream, LlmProvider,
};
use crate::core::llm::types::{Message, StopReason};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// LLM provider for the `OpenAI` API and compatible endpoints.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenAiProvider {
    /// Create a new provider instance.
    ///
    /// # Errors
    ///
    /// Returns error if API key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::ApiKeyMissing);
        }

        Ok(Self {
            http: reqwest::Client::new(),
            api_key: Some(api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a provider with optional API key and base URL.
    ///
    /// Use this for OpenAI-compatible providers that may not require an API key
    /// (e.g., local Ollama) or use a different endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if configuration is invalid.
    pub fn with_config(api_key: Option<String>, base_url: Option<String>) -> Result<Self> {
        let base_url = base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            base_url,
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatChunk {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    delta: ChatDelta,
    finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ChatDelta {
    #[serde(default)]
    content: Option<String>,
}

/// Convert our messages to the chat completions format.
fn convert_messages(messages: &[Message], system: Option<&str>) -> Vec<ChatMessage> {
    let mut result = Vec::with_capacity(messages.len() + 1);

    if let Some(sys) = system {
        result.push(ChatMessage {
            role: "system",
            content: sys.to_string(),
        });
    }

    result.extend(messages.iter().map(|m| ChatMessage {
        role: m.role.as_str(),
        content: m.content.clone(),
    }));

    result
}

/// Convert finish reason to our stop reason.
fn convert_stop_reason(reason: &str) -> Option<StopReason> {
    match reason {
        "stop" => Some(StopReason::EndTurn),
        "length" => Some(StopReason::MaxTokens),
        _ => None,
    }
}

/// Convert one SSE payload into completion events.
fn convert_chunk(data: &str) -> Vec<CompletionEvent> {
    if data.trim() == "[DONE]" {
        return Vec::new();
    }

    let chunk = match serde_json::from_str::<ChatChunk>(data) {
        Ok(chunk) => chunk,
        Err(e) => {
            tracing::debug!(data = %data, error = %e, "failed to parse chat chunk");
            return Vec::new();
        }
    };

    let mut events = Vec::new();
    for choice in chunk.choices {
        if let Some(text) = choice.delta.content.filter(|t| !t.is_empty()) {
            events.push(CompletionEvent::TextDelta(text));
        }
        if let Some(reason) = choice.finish_reason {
            events.push(CompletionEvent::Done {
                stop_reason: convert_stop_reason(&reason),
                usage: None,
            });
        }
    }
    events
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn stream(&self, request: CompletionRequest) -> Result<CompletionStream> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(api_key) = &self.api_key {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {api_key}"))
                    .map_err(|_| LlmError::ApiKeyMissing)?,
            );
        }

        let body = ChatRequest {
            model: request.model,
            max_tokens: request.max_tokens,
            messages: convert_messages(&request.messages, request.system.as_deref()),
            stream: true,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(&url)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let byte_stream = response.bytes_stream();

        let stream = async_stream::stream! {
            let mut buffer = String::new();
            let mut pending = Vec::new();

            futures::pin_mut!(byte_stream);

            while let Some(chunk) = byte_stream.next().await {
                let chunk = chunk?;
                push_utf8(&mut buffer, &mut pending, &chunk);

                while let Some((data, remainder)) = next_sse_data(&buffer) {
                    buffer = remainder;

                    let Some(data) = data else {
                        continue;
                    };
                    for event in convert_chunk(&data) {
                        yield Ok(event);
                    }
                }
            }
        };

        Ok(Box::pin(stream))
    }
}
