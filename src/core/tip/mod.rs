//! Eco tips: one short piece of sustainability advice per session.
//!
//! The TUI asks an [`EcoTipProvider`] for a tip exactly once at startup via
//! [`spawn_fetch`]. The fetch runs on its own task and reports back over a
//! channel, so a slow or hung provider never blocks the interface.

mod llm;
mod offline;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::error::Result;

pub use llm::{LlmTipProvider, extract_tip, tip_prompt};
pub use offline::{OFFLINE_TIPS, OfflineTips};

/// Source of eco tips.
#[async_trait]
pub trait EcoTipProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Produce one short advisory string.
    async fn tip(&self) -> Result<String>;
}

/// Tries a primary provider and resolves with the fallback's tip on failure.
pub struct FallbackTipProvider {
    primary: Box<dyn EcoTipProvider>,
    fallback: Box<dyn EcoTipProvider>,
}

impl FallbackTipProvider {
    /// Chain two providers.
    #[must_use]
    pub fn new(primary: Box<dyn EcoTipProvider>, fallback: Box<dyn EcoTipProvider>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl EcoTipProvider for FallbackTipProvider {
    fn name(&self) -> &'static str {
        self.primary.name()
    }

    async fn tip(&self) -> Result<String> {
        match self.primary.tip().await {
            Ok(tip) => Ok(tip),
            Err(e) => {
                tracing::warn!(
                    provider = self.primary.name(),
                    fallback = self.fallback.name(),
                    "tip generation failed, using fallback: {e}"
                );
                self.fallback.tip().await
            }
        }
    }
}

/// Outcome of the startup tip fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TipEvent {
    /// The provider produced a tip.
    Resolved(String),
    /// The provider failed; the tip stays empty for the session.
    Failed(String),
}

/// Fetch one tip in the background.
///
/// The returned receiver yields exactly one [`TipEvent`], or none at all if the
/// provider never completes.
#[must_use]
pub fn spawn_fetch(provider: Arc<dyn EcoTipProvider>) -> mpsc::UnboundedReceiver<TipEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let event = match provider.tip().await {
            Ok(tip) => {
                tracing::debug!(provider = provider.name(), "tip resolved");
                TipEvent::Resolved(tip)
            }
            Err(e) => {
                tracing::warn!(provider = provider.name(), "tip fetch failed: {e}");
                TipEvent::Failed(e.to_string())
            }
        };
        // The UI may already be gone.
        let _ = tx.send(event);
    });

    rx
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::Error;

    struct Fixed(&'static str);

    #[async_trait]
    impl EcoTipProvider for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn tip(&self) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Broken;

    #[async_trait]
    impl EcoTipProvider for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn tip(&self) -> Result<String> {
            Err(Error::Config("no provider".to_string()))
        }
    }

    #[tokio::test]
    async fn fallback_is_used_when_primary_fails() {
        let provider = FallbackTipProvider::new(Box::new(Broken), Box::new(Fixed("Walk more")));
        assert_eq!(provider.tip().await.unwrap(), "Walk more");
    }

    #[tokio::test]
    async fn fallback_is_skipped_when_primary_succeeds() {
        let provider =
            FallbackTipProvider::new(Box::new(Fixed("Unplug chargers")), Box::new(Broken));
        assert_eq!(provider.tip().await.unwrap(), "Unplug chargers");
    }

    #[tokio::test]
    async fn spawn_fetch_reports_resolved_tip() {
        let mut rx = spawn_fetch(Arc::new(Fixed("Turn off lights")));

        let event = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("timeout waiting for tip")
            .expect("channel closed");

        assert_eq!(event, TipEvent::Resolved("Turn off lights".to_string()));
    }

    #[tokio::test]
    async fn spawn_fetch_reports_failure() {
        let mut rx = spawn_fetch(Arc::new(Broken));

        let event = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("timeout waiting for tip")
            .expect("channel closed");

        assert!(matches!(event, TipEvent::Failed(reason) if reason.contains("no provider")));
    }

    #[tokio::test]
    async fn spawn_fetch_sends_exactly_one_event() {
        let mut rx = spawn_fetch(Arc::new(Fixed("Line-dry laundry")));

        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_none());
    }
}
