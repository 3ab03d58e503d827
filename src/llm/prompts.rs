/// Fixed system instruction for the summarization call.
///
/// The transcript itself is always sent verbatim as the user message; this
/// instruction is the only other content the remote model sees.
pub const SUMMARY_SYSTEM_PROMPT: &str =
    "Summarize this meeting transcript clearly and concisely.";
