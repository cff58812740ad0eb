//! Streaming LLM client.
//!
//! Only plain-text completions are supported; the tip provider is the sole
//! consumer and never sends tools or multi-part content.

mod error;
mod provider;
pub mod providers;
mod types;

pub use error::{LlmError, Result};
pub use provider::{CompletionEvent, CompletionRequest, CompletionStream, LlmProvider, collect_text};
pub use providers::{AnthropicProvider, OpenAiProvider};
pub use types::{Message, Role, StopReason, Usage};
