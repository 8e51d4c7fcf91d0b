use std::fmt;

use uuid::Uuid;

pub const ALLOWED_EXTENSIONS_MESSAGE: &str =
    "Invalid file type. Only .wav, .mp3, or .m4a files are allowed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadId(Uuid);

impl UploadId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UploadId {
    fn default() -> Self {
        Self::new()
    }
}

/// Audio containers accepted by the upload endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioExtension {
    Wav,
    Mp3,
    M4a,
}

impl AudioExtension {
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".wav") {
            Some(Self::Wav)
        } else if lower.ends_with(".mp3") {
            Some(Self::Mp3)
        } else if lower.ends_with(".m4a") {
            Some(Self::M4a)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::M4a => "m4a",
        }
    }
}

impl fmt::Display for AudioExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadValidationError {
    #[error("No file part in the request")]
    MissingFilePart,
    #[error("No selected file")]
    EmptyFilename,
    #[error("{}", ALLOWED_EXTENSIONS_MESSAGE)]
    UnsupportedExtension(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub id: UploadId,
    pub filename: String,
    pub extension: AudioExtension,
}

impl UploadedFile {
    /// Validates a client-supplied filename and assigns a fresh upload id.
    pub fn accept(filename: &str) -> Result<Self, UploadValidationError> {
        if filename.is_empty() {
            return Err(UploadValidationError::EmptyFilename);
        }

        let extension = AudioExtension::from_filename(filename)
            .ok_or_else(|| UploadValidationError::UnsupportedExtension(filename.to_string()))?;

        Ok(Self {
            id: UploadId::new(),
            filename: filename.to_string(),
            extension,
        })
    }
}
