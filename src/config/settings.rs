//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Whisper transcription settings
    #[serde(default)]
    pub whisper: WhisperSettings,

    /// LLM summarization settings
    #[serde(default)]
    pub llm: LlmSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Data directory for models and the upload spool
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address to bind the HTTP server to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum accepted upload size in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhisperSettings {
    /// Whisper model to use (tiny, base, small, medium, large)
    #[serde(default = "default_model")]
    pub model: String,

    /// Path to model files directory
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,

    /// Language for transcription (empty = auto-detect)
    #[serde(default)]
    pub language: String,

    /// Enable translation to English
    #[serde(default)]
    pub translate: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (openai)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key (loaded from config or environment)
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API endpoint (for proxies or compatible servers)
    #[serde(default)]
    pub endpoint: String,
}

// Default value functions

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "note-ninja", "note-ninja")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.local/share/note-ninja"))
}

fn default_models_dir() -> PathBuf {
    let mut dir = default_data_dir();
    dir.push("models");
    dir
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_upload_bytes() -> usize {
    // 100 MiB, roomy enough for hour-long WAV recordings
    100 * 1024 * 1024
}

fn default_model() -> String {
    "base".to_string()
}

fn default_llm_provider() -> String {
    "openai".to_string()
}

fn default_llm_model() -> String {
    "gpt-4o-mini".to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for WhisperSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            models_dir: default_models_dir(),
            language: String::new(),
            translate: false,
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            server: ServerSettings::default(),
            whisper: WhisperSettings::default(),
            llm: LlmSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load settings from a specific file path
    pub fn load_from(config_path: &PathBuf) -> Result<Self> {
        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.llm.api_key.trim().is_empty() {
            for var in ["NOTE_NINJA_OPENAI_API_KEY", "OPENAI_API_KEY"] {
                if let Ok(key) = std::env::var(var) {
                    if !key.trim().is_empty() {
                        self.llm.api_key = key;
                        break;
                    }
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "note-ninja", "note-ninja")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the upload spool directory
    pub fn spool_dir(&self) -> PathBuf {
        self.general.data_dir.join("spool")
    }

    /// Get the path to the whisper model file
    pub fn model_path(&self) -> PathBuf {
        self.whisper
            .models_dir
            .join(format!("ggml-{}.bin", self.whisper.model))
    }

    /// Ensure all required directories exist
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.general.data_dir)?;
        std::fs::create_dir_all(self.spool_dir())?;
        std::fs::create_dir_all(&self.whisper.models_dir)?;
        Ok(())
    }
}
