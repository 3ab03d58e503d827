//! Audio ingress: materialize one uploaded payload as a scratch file.
//!
//! Each upload lands in the spool directory under a unique name and lives
//! exactly as long as the request that produced it. The file is removed when
//! the [`SpooledAudio`] guard drops, on success and failure alike; a failed
//! removal is logged and never surfaced to the caller.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// One uploaded recording, spooled to disk for the duration of a request.
///
/// Dropping the guard deletes the file.
#[derive(Debug)]
pub struct SpooledAudio {
    path: PathBuf,
}

impl SpooledAudio {
    /// Write an uploaded payload into `spool_dir` under a unique name.
    ///
    /// The name combines a fresh UUID with the sanitized display name, so
    /// concurrent uploads of identically named files cannot collide and a
    /// hostile filename cannot escape the spool directory.
    pub fn write(spool_dir: &Path, display_name: &str, bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            anyhow::bail!("Uploaded file is empty");
        }

        std::fs::create_dir_all(spool_dir)
            .with_context(|| format!("Failed to create spool dir: {}", spool_dir.display()))?;

        let file_name = format!("{}_{}", Uuid::new_v4(), sanitize_file_name(display_name));
        let path = spool_dir.join(file_name);

        std::fs::write(&path, bytes)
            .with_context(|| format!("Failed to spool upload to {}", path.display()))?;

        tracing::debug!("Spooled {} bytes to {}", bytes.len(), path.display());

        Ok(Self { path })
    }

    /// Path of the spooled file, valid until the guard drops.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SpooledAudio {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            // Best effort: a leftover spool file must never mask the
            // request's actual outcome.
            tracing::warn!("Failed to remove spooled audio {}: {}", self.path.display(), e);
        }
    }
}

/// Reduce an uploaded display name to a safe file-name fragment.
///
/// Takes the final path component and keeps only `[A-Za-z0-9._-]`; everything
/// else becomes `_`. Empty results fall back to `upload`.
pub fn sanitize_file_name(display_name: &str) -> String {
    let base = display_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(display_name);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = cleaned.trim_matches('.').to_string();
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed
    }
}
