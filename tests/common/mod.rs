//! Shared mock engines for integration tests.
#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use note_ninja::llm::Summarizer;
use note_ninja::transcription::Transcriber;

/// Transcriber stub returning a canned transcript (or failing).
pub struct MockTranscriber {
    response: Option<String>,
    calls: AtomicUsize,
}

impl MockTranscriber {
    pub fn returning(transcript: &str) -> Self {
        Self {
            response: Some(transcript.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transcriber for MockTranscriber {
    fn transcribe(&self, _audio_path: &Path) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => anyhow::bail!("could not decode audio"),
        }
    }
}

/// Summarizer stub recording what it was asked to summarize.
pub struct MockSummarizer {
    response: Option<String>,
    calls: AtomicUsize,
    last_transcript: Mutex<Option<String>>,
}

impl MockSummarizer {
    pub fn returning(summary: &str) -> Self {
        Self {
            response: Some(summary.to_string()),
            calls: AtomicUsize::new(0),
            last_transcript: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
            last_transcript: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_transcript(&self) -> Option<String> {
        self.last_transcript.lock().expect("lock").clone()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, transcript: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_transcript.lock().expect("lock") = Some(transcript.to_string());
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => anyhow::bail!("completion request failed"),
        }
    }
}

/// Number of entries currently in a directory.
pub fn dir_entry_count(path: &Path) -> usize {
    std::fs::read_dir(path)
        .map(|entries| entries.count())
        .unwrap_or(0)
}
