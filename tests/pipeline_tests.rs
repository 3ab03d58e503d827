//! Pipeline coordinator behavior: sequencing, failure tagging, cleanup.

mod common;

use std::sync::Arc;

use note_ninja::pipeline::PipelineCoordinator;
use note_ninja::NoteNinjaError;

use common::{dir_entry_count, MockSummarizer, MockTranscriber};

fn pipeline(
    transcriber: Arc<MockTranscriber>,
    summarizer: Arc<MockSummarizer>,
    spool_dir: &std::path::Path,
) -> PipelineCoordinator {
    PipelineCoordinator::new(transcriber, summarizer, spool_dir.to_path_buf())
}

#[tokio::test]
async fn successful_run_returns_both_texts_and_cleans_up() {
    let spool = tempfile::tempdir().expect("create spool dir");
    let transcriber = Arc::new(MockTranscriber::returning("hello team"));
    let summarizer = Arc::new(MockSummarizer::returning("Quick hello to the team."));
    let pipeline = pipeline(Arc::clone(&transcriber), Arc::clone(&summarizer), spool.path());

    let response = pipeline
        .process("meeting.wav", b"RIFF fake audio")
        .await
        .expect("pipeline should succeed");

    assert_eq!(response.transcript, "hello team");
    assert_eq!(response.summary, "Quick hello to the team.");

    // The transcript is forwarded to the summarizer verbatim.
    assert_eq!(summarizer.last_transcript().as_deref(), Some("hello team"));

    // The spooled audio does not survive the request.
    assert_eq!(dir_entry_count(spool.path()), 0);
}

#[tokio::test]
async fn empty_payload_fails_at_ingress_before_any_engine_runs() {
    let spool = tempfile::tempdir().expect("create spool dir");
    let transcriber = Arc::new(MockTranscriber::returning("hello team"));
    let summarizer = Arc::new(MockSummarizer::returning("summary"));
    let pipeline = pipeline(Arc::clone(&transcriber), Arc::clone(&summarizer), spool.path());

    let err = pipeline
        .process("meeting.wav", b"")
        .await
        .expect_err("empty upload should fail");

    assert!(matches!(err, NoteNinjaError::Ingress(_)), "got {err:?}");
    assert_eq!(err.stage(), "ingress");
    assert_eq!(transcriber.calls(), 0);
    assert_eq!(summarizer.calls(), 0);
}

#[tokio::test]
async fn transcription_failure_skips_summarizer_and_cleans_up() {
    let spool = tempfile::tempdir().expect("create spool dir");
    let transcriber = Arc::new(MockTranscriber::failing());
    let summarizer = Arc::new(MockSummarizer::returning("summary"));
    let pipeline = pipeline(Arc::clone(&transcriber), Arc::clone(&summarizer), spool.path());

    let err = pipeline
        .process("meeting.wav", b"not really audio")
        .await
        .expect_err("transcription should fail");

    assert!(matches!(err, NoteNinjaError::Transcription(_)), "got {err:?}");
    assert_eq!(err.stage(), "transcription");
    assert_eq!(summarizer.calls(), 0, "summarizer must never run");
    assert_eq!(dir_entry_count(spool.path()), 0);
}

#[tokio::test]
async fn summarization_failure_is_tagged_and_cleans_up() {
    let spool = tempfile::tempdir().expect("create spool dir");
    let transcriber = Arc::new(MockTranscriber::returning("hello team"));
    let summarizer = Arc::new(MockSummarizer::failing());
    let pipeline = pipeline(Arc::clone(&transcriber), Arc::clone(&summarizer), spool.path());

    let err = pipeline
        .process("meeting.wav", b"RIFF fake audio")
        .await
        .expect_err("summarization should fail");

    assert!(matches!(err, NoteNinjaError::Summarization(_)), "got {err:?}");
    assert_eq!(err.stage(), "summarization");
    assert_eq!(transcriber.calls(), 1);
    assert_eq!(dir_entry_count(spool.path()), 0);
}

#[tokio::test]
async fn repeated_submissions_are_independent() {
    let spool = tempfile::tempdir().expect("create spool dir");
    let transcriber = Arc::new(MockTranscriber::returning("hello team"));
    let summarizer = Arc::new(MockSummarizer::returning("Quick hello to the team."));
    let pipeline = pipeline(Arc::clone(&transcriber), Arc::clone(&summarizer), spool.path());

    let first = pipeline
        .process("meeting.wav", b"RIFF fake audio")
        .await
        .expect("first run");
    let second = pipeline
        .process("meeting.wav", b"RIFF fake audio")
        .await
        .expect("second run");

    assert_eq!(first.transcript, second.transcript);
    assert_eq!(first.summary, second.summary);
    assert_eq!(transcriber.calls(), 2);
    assert_eq!(summarizer.calls(), 2);
    assert_eq!(dir_entry_count(spool.path()), 0, "no state carries over");
}
