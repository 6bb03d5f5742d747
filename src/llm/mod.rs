//! LLM integration module.
//!
//! Provides an OpenAI-compatible client for LLM API calls and
//! the prompts used for reference generation and comparison.

mod client;
mod prompts;

pub use client::{LlmClient, Message, Role};
pub use prompts::Prompts;
