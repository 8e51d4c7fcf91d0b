use std::io;
use std::path::{Path, PathBuf};

/// Owns a temporary canonical waveform and removes it on drop.
#[derive(Debug)]
pub struct TempWaveform {
    path: PathBuf,
}

impl TempWaveform {
    /// Canonical waveform location for an uploaded file: `<stem>.converted.wav`
    /// in the same directory.
    pub fn beside(upload_path: &Path) -> Self {
        let stem = upload_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("upload");
        let path = upload_path.with_file_name(format!("{}.converted.wav", stem));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempWaveform {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Removed temporary waveform");
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::error!(
                    error = %e,
                    path = %self.path.display(),
                    "Failed to delete temporary waveform"
                );
            }
        }
    }
}
