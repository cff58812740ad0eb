//! Tips generated by a language model.

use async_trait::async_trait;

use super::EcoTipProvider;
use crate::core::error::Result;
use crate::core::llm::{CompletionRequest, LlmError, LlmProvider, Message, collect_text};

/// Maximum tip length shown in the toast.
pub const MAX_TIP_LENGTH: usize = 160;

const SYSTEM_PROMPT: &str =
    "You are a sustainability consultant who writes short, practical advice.";

/// Build the prompt asking for a single tip.
#[must_use]
pub fn tip_prompt() -> String {
    r"Give one short, actionable eco-friendly tip for daily life.
Keep it under 20 words. Return ONLY the tip, no quotes, numbering or explanation."
        .to_string()
}

/// Clean up a model response into a single displayable tip.
#[must_use]
pub fn extract_tip(response: &str) -> String {
    let line = response
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default();

    let tip = line
        .trim_start_matches(['-', '*', '•'])
        .trim()
        .trim_matches('"')
        .trim_matches('\'')
        .trim();

    if tip.chars().count() > MAX_TIP_LENGTH {
        let truncated: String = tip.chars().take(MAX_TIP_LENGTH - 3).collect();
        format!("{truncated}...")
    } else {
        tip.to_string()
    }
}

/// Asks an LLM for one tip.
pub struct LlmTipProvider {
    provider: Box<dyn LlmProvider>,
    model: String,
    max_tokens: u32,
}

impl LlmTipProvider {
    /// Create a tip provider on top of an LLM provider.
    #[must_use]
    pub fn new(provider: Box<dyn LlmProvider>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            provider,
            model: model.into(),
            max_tokens,
        }
    }
}

#[async_trait]
impl EcoTipProvider for LlmTipProvider {
    fn name(&self) -> &'static str {
        self.provider.name()
    }

    async fn tip(&self) -> Result<String> {
        let request = CompletionRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message::user(tip_prompt())],
            system: Some(SYSTEM_PROMPT.to_string()),
        };

        tracing::debug!(provider = self.provider.name(), model = %self.model, "requesting tip");

        let stream = self.provider.stream(request).await?;
        let tip = extract_tip(&collect_text(stream).await?);
        if tip.is_empty() {
            return Err(LlmError::Empty.into());
        }

        Ok(tip)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::core::llm::{CompletionEvent, CompletionStream};

    struct Scripted {
        chunks: Vec<&'static str>,
        seen: Arc<Mutex<Option<CompletionRequest>>>,
    }

    impl Scripted {
        fn new(chunks: Vec<&'static str>) -> Self {
            Self {
                chunks,
                seen: Arc::default(),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for Scripted {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn stream(
            &self,
            request: CompletionRequest,
        ) -> crate::core::llm::Result<CompletionStream> {
            *self.seen.lock().unwrap() = Some(request);
            let events: Vec<crate::core::llm::Result<CompletionEvent>> = self
                .chunks
                .iter()
                .map(|c| Ok(CompletionEvent::TextDelta((*c).to_string())))
                .collect();
            Ok(Box::pin(futures::stream::iter(events)))
        }
    }

    #[test]
    fn extract_tip_removes_quotes() {
        assert_eq!(extract_tip("\"Turn off lights\""), "Turn off lights");
        assert_eq!(extract_tip("'Turn off lights'"), "Turn off lights");
    }

    #[test]
    fn extract_tip_takes_first_non_empty_line() {
        assert_eq!(extract_tip("\n\n- Compost scraps\nSecond"), "Compost scraps");
    }

    #[test]
    fn extract_tip_truncates_long_responses() {
        let long = "a".repeat(MAX_TIP_LENGTH + 40);
        let tip = extract_tip(&long);
        assert_eq!(tip.chars().count(), MAX_TIP_LENGTH);
        assert!(tip.ends_with("..."));
    }

    #[test]
    fn extract_tip_of_blank_response_is_empty() {
        assert_eq!(extract_tip("   \n  "), "");
    }

    #[tokio::test]
    async fn llm_tip_joins_stream_and_cleans_it() {
        let provider = LlmTipProvider::new(
            Box::new(Scripted::new(vec!["\"Turn off ", "lights\""])),
            "gemini-2.0-flash",
            64,
        );

        assert_eq!(provider.tip().await.unwrap(), "Turn off lights");
    }

    #[tokio::test]
    async fn llm_tip_sends_model_and_budget() {
        let scripted = Scripted::new(vec!["Bike"]);
        let seen = Arc::clone(&scripted.seen);
        let provider = LlmTipProvider::new(Box::new(scripted), "tiny-model", 32);
        provider.tip().await.unwrap();

        let request = seen.lock().unwrap().take().expect("request recorded");
        assert_eq!(request.model, "tiny-model");
        assert_eq!(request.max_tokens, 32);
        assert_eq!(request.messages, vec![Message::user(tip_prompt())]);
        assert!(request.system.is_some());
    }

    #[tokio::test]
    async fn empty_completion_is_an_error() {
        let provider = LlmTipProvider::new(
            Box::new(Scripted::new(vec!["  ", "\n"])),
            "model",
            32,
        );

        assert!(provider.tip().await.is_err());
    }
}
