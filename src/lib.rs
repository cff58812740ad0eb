//! Eco CLI - sustainability dashboard for the terminal.
//!
//! This library provides the core functionality for the Eco CLI, including:
//! - CLI command parsing
//! - Terminal user interface (TUI) with a view router and the eco tip toast
//! - Tip providers backed by LLM APIs or a built-in list
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐  ┌─────────────┐
//! │     CLI     │  │     TUI     │
//! └──────┬──────┘  └──────┬──────┘
//!        │                │
//!        └───────┬────────┘
//!                │
//!         ┌──────┴──────┐
//!         │    Core     │  tips, LLM providers, keychain
//!         └─────────────┘
//! ```

pub mod build_info;
pub mod cli;
pub mod config;
pub mod core;
pub mod tui;

pub use config::Config;
pub use core::tip::{EcoTipProvider, TipEvent};
