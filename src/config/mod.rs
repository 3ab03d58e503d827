//! Configuration module for note-ninja
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::Settings;
