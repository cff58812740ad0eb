//! Anthropic (Claude) provider implementation.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use super::{next_sse_data, push_utf8};
use crate::core::llm::error::{LlmError, Result};
use crate::core::llm::provider::{
    CompletionEvent, CompletionRequest, CompletionStream, LlmProvider,
};
use crate::core::llm::types::{Message, StopReason, Usage};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

/// Anthropic (Claude) LLM provider.
#[derive(Debug, Clone)]
pub struct AnthropicProvider {
    http: reqwest::Client,
    api_key: String,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider.
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
            api_key,
        })
    }
}

/// Request body for the Messages API.
#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    stream: bool,
}

/// Streaming event from Anthropic SSE.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum StreamEvent {
    ContentBlockDelta {
        delta: Delta,
    },
    MessageDelta {
        delta: MessageDelta,
        #[serde(default)]
        usage: Option<Usage>,
    },
    Error {
        error: ApiError,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Delta {
    TextDelta {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct MessageDelta {
    stop_reason: Option<StopReason>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Convert a raw SSE payload into a completion event, if it carries one.
fn convert_event(data: &str) -> Option<CompletionEvent> {
    let event = match serde_json::from_str::<StreamEvent>(data) {
        Ok(event) => event,
        Err(e) => {
            tracing::debug!(data = %data, error = %e, "failed to parse event");
            return None;
        }
    };

    match event {
        StreamEvent::ContentBlockDelta {
            delta: Delta::TextDelta { text },
        } => Some(CompletionEvent::TextDelta(text)),
        StreamEvent::MessageDelta { delta, usage } => Some(CompletionEvent::Done {
            stop_reason: delta.stop_reason,
            usage,
        }),
        StreamEvent::Error { error } => Some(CompletionEvent::Error(error.message)),
        StreamEvent::ContentBlockDelta { .. } | StreamEvent::Other => None,
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn stream(&self, request: CompletionRequest) -> Result<CompletionStream> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&self.api_key).map_err(|_| LlmError::ApiKeyMissing)?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static(API_VERSION));

        let body = MessagesRequest {
            model: request.model,
            max_tokens: request.max_tokens,
            messages: request.messages,
            system: request.system,
            stream: true,
        };

        let response = self
            .http
            .post(API_URL)
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

                    if let Some(event) = data.as_deref().and_then(convert_event) {
                        yield Ok(event);
                    }
                }
            }
        };

        Ok(Box::pin(stream))
    }
}
