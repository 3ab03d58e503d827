use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::openai::OpenAiClient;

/// Remote summarization abstraction.
///
/// One blocking request per transcript, exactly one completion back; no
/// retries and no streaming.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize a meeting transcript into a short plain-text summary.
    async fn summarize(&self, transcript: &str) -> Result<String>;
}

/// Build a summarization provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn Summarizer>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAiClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: openai",
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn unsupported_provider_returns_error() {
        let mut settings = Settings::default();
        settings.llm.provider = "unknown".to_string();
        settings.llm.api_key = "sk-test".to_string();

        let err = match build_provider(&settings) {
            Ok(_) => panic!("expected provider creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Unsupported llm.provider"));
    }

    #[test]
    fn openai_provider_requires_api_key() {
        let settings = Settings::default();

        let err = match build_provider(&settings) {
            Ok(_) => panic!("expected provider creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("API key is missing"));
    }
}
