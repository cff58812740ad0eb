//! Core logic shared by the CLI and the TUI.

mod error;
pub mod keychain;
pub mod llm;
pub mod tip;

pub use error::{Error, Result};
pub use tip::{EcoTipProvider, TipEvent};
