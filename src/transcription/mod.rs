//! Transcription module for note-ninja
//!
//! Handles speech-to-text using whisper-rs.

mod whisper;

pub use whisper::{load_audio, WhisperTranscriber};

use anyhow::Result;
use std::path::Path;

/// Speech-to-text abstraction over a spooled audio file.
///
/// Implementations may be local (Whisper) or remote; the pipeline does not
/// care which. `transcribe` blocks for the duration of inference, so callers
/// on an async runtime should run it on the blocking thread pool.
pub trait Transcriber: Send + Sync {
    /// Transcribe one audio file to plain text.
    fn transcribe(&self, audio_path: &Path) -> Result<String>;
}
