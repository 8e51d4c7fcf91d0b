use std::fmt;

pub const UNCLEAR_AUDIO_MESSAGE: &str = "Audio not clear enough to transcribe";
pub const TRANSCRIPTION_ERROR_MESSAGE: &str = "Error occurred during transcription";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionStatus {
    Ok,
    Unclear,
    ServiceUnavailable,
    Error,
}

impl TranscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Unclear => "unclear",
            Self::ServiceUnavailable => "service_unavailable",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for TranscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the speech transcription stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptionResult {
    Transcribed(String),
    Unclear,
    ServiceUnavailable { service: String },
    Failed,
}

impl TranscriptionResult {
    pub fn status(&self) -> TranscriptionStatus {
        match self {
            Self::Transcribed(_) => TranscriptionStatus::Ok,
            Self::Unclear => TranscriptionStatus::Unclear,
            Self::ServiceUnavailable { .. } => TranscriptionStatus::ServiceUnavailable,
            Self::Failed => TranscriptionStatus::Error,
        }
    }

    pub fn transcript(&self) -> Option<&str> {
        match self {
            Self::Transcribed(text) => Some(text),
            _ => None,
        }
    }

    /// Text shown to the client: the transcript, or a status message.
    pub fn display_text(&self) -> String {
        match self {
            Self::Transcribed(text) => text.clone(),
            Self::Unclear => UNCLEAR_AUDIO_MESSAGE.to_string(),
            Self::ServiceUnavailable { service } => {
                format!("Could not request results from {} service", service)
            }
            Self::Failed => TRANSCRIPTION_ERROR_MESSAGE.to_string(),
        }
    }
}
