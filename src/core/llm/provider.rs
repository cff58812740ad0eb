//! LLM provider abstraction.

use std::pin::Pin;

use async_trait::async_trait;
use futures::{Stream, StreamExt};

use super::error::{LlmError, Result};
use super::types::{Message, StopReason, Usage};

/// Configuration for an LLM request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model identifier.
    pub model: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Conversation messages.
    pub messages: Vec<Message>,
    /// System prompt.
    pub system: Option<String>,
}

/// A streaming event from the LLM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionEvent {
    /// A chunk of text content.
    TextDelta(String),
    /// The completion has finished.
    Done {
        stop_reason: Option<StopReason>,
        usage: Option<Usage>,
    },
    /// An error occurred.
    Error(String),
}

/// Stream of completion events.
pub type CompletionStream = Pin<Box<dyn Stream<Item = Result<CompletionEvent>> + Send>>;

/// Trait for LLM providers.
///
/// Implement this trait to add support for a new LLM provider.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &'static str;

    /// Stream a completion request.
    ///
    /// Returns a stream of completion events.
    async fn stream(&self, request: CompletionRequest) -> Result<CompletionStream>;
}

/// Drain a completion stream into a single string.
///
/// Fails on the first transport error or provider-reported error event.
pub async fn collect_text(stream: CompletionStream) -> Result<String> {
    futures::pin_mut!(stream);

    let mut text = String::new();
    while let Some(event) = stream.next().await {
        match event? {
            CompletionEvent::TextDelta(delta) => text.push_str(&delta),
            CompletionEvent::Error(message) => return Err(LlmError::Stream(message)),
            CompletionEvent::Done { stop_reason, .. } => {
                tracing::trace!(?stop_reason, "completion finished");
            }
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream_of(events: Vec<Result<CompletionEvent>>) -> CompletionStream {
        Box::pin(futures::stream::iter(events))
    }

    #[tokio::test]
    async fn collect_text_joins_deltas() {
        let stream = stream_of(vec![
            Ok(CompletionEvent::TextDelta("Turn off ".to_string())),
            Ok(CompletionEvent::TextDelta("lights".to_string())),
            Ok(CompletionEvent::Done {
                stop_reason: Some(StopReason::EndTurn),
                usage: None,
            }),
        ]);

        assert_eq!(collect_text(stream).await.unwrap(), "Turn off lights");
    }

    #[tokio::test]
    async fn collect_text_fails_on_error_event() {
        let stream = stream_of(vec![
            Ok(CompletionEvent::TextDelta("partial".to_string())),
            Ok(CompletionEvent::Error("overloaded".to_string())),
        ]);

        let err = collect_text(stream).await.unwrap_err();
        assert!(matches!(err, LlmError::Stream(ref m) if m == "overloaded"));
    }

    #[tokio::test]
    async fn collect_text_propagates_transport_error() {
        let stream = stream_of(vec![Err(LlmError::Empty)]);
        assert!(collect_text(stream).await.is_err());
    }
}
