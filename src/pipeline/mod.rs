//! Pipeline coordination: ingress → transcription → summarization.
//!
//! The one piece of orchestration in the system. Each request runs the three
//! stages strictly in order, fails fast on the first error, and always
//! releases the spooled audio (the guard drops on every exit path). No state
//! survives a request.

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::ingress::SpooledAudio;
use crate::llm::Summarizer;
use crate::transcription::Transcriber;
use crate::{NoteNinjaError, Result};

/// The reply payload for one processed upload.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResponse {
    pub transcript: String,
    pub summary: String,
}

/// Sequences one upload through transcription and summarization.
pub struct PipelineCoordinator {
    transcriber: Arc<dyn Transcriber>,
    summarizer: Arc<dyn Summarizer>,
    spool_dir: PathBuf,
}

impl PipelineCoordinator {
    pub fn new(
        transcriber: Arc<dyn Transcriber>,
        summarizer: Arc<dyn Summarizer>,
        spool_dir: PathBuf,
    ) -> Self {
        Self {
            transcriber,
            summarizer,
            spool_dir,
        }
    }

    /// Process one uploaded recording end to end.
    ///
    /// All-or-nothing: a failure in any stage aborts the rest and surfaces
    /// that stage's error alone. The spooled file is removed even then.
    pub async fn process(&self, file_name: &str, bytes: &[u8]) -> Result<PipelineResponse> {
        let spooled = SpooledAudio::write(&self.spool_dir, file_name, bytes)
            .map_err(|e| NoteNinjaError::Ingress(format!("{e:#}")))?;

        tracing::info!("Transcribing {}", spooled.path().display());

        // Whisper inference is CPU-bound and blocking; keep it off the
        // async workers.
        let transcriber = Arc::clone(&self.transcriber);
        let audio_path = spooled.path().to_path_buf();
        let transcript = tokio::task::spawn_blocking(move || transcriber.transcribe(&audio_path))
            .await
            .map_err(|e| NoteNinjaError::Transcription(format!("transcription task failed: {e}")))?
            .map_err(|e| NoteNinjaError::Transcription(format!("{e:#}")))?;

        tracing::info!("Transcript ready ({} chars), summarizing", transcript.len());

        let summary = self
            .summarizer
            .summarize(&transcript)
            .await
            .map_err(|e| NoteNinjaError::Summarization(format!("{e:#}")))?;

        Ok(PipelineResponse {
            transcript,
            summary,
        })
        // `spooled` drops here (and on every early return above), deleting
        // the scratch file.
    }
}
