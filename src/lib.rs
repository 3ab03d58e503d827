//! note-ninja - AI meeting assistant
//!
//! Upload a meeting recording, get back a transcript (local Whisper model)
//! and a concise summary (remote chat-completions API) in one response.

pub mod config;
pub mod ingress;
pub mod llm;
pub mod pipeline;
pub mod server;
pub mod transcription;

use thiserror::Error;

/// Main error type for note-ninja
#[derive(Error, Debug)]
pub enum NoteNinjaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upload error: {0}")]
    Ingress(String),

    #[error("Transcription error: {0}")]
    Transcription(String),

    #[error("Summarization error: {0}")]
    Summarization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NoteNinjaError {
    /// The pipeline stage this error is reported under.
    pub fn stage(&self) -> &'static str {
        match self {
            NoteNinjaError::Ingress(_) => "ingress",
            NoteNinjaError::Transcription(_) => "transcription",
            NoteNinjaError::Summarization(_) => "summarization",
            NoteNinjaError::Config(_) => "config",
            NoteNinjaError::Io(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, NoteNinjaError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "note-ninja";
