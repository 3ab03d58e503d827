//! LLM module for note-ninja
//!
//! Handles AI-powered meeting summaries via a chat-completions API.

mod client;
mod openai;
mod prompts;

pub use client::{build_provider, Summarizer};
pub use openai::OpenAiClient;
pub use prompts::SUMMARY_SYSTEM_PROMPT;
