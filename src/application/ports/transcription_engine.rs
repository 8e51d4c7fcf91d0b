use async_trait::async_trait;

/// A remote speech-to-text backend. Input is a canonical 16-bit PCM WAV.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, wav_data: &[u8]) -> Result<String, TranscriptionError>;

    /// Human-readable backend name used in status messages.
    fn service_name(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("no speech could be recognized")]
    NoSpeechDetected,
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("audio unreadable: {0}")]
    AudioUnreadable(String),
    #[error("engine configuration failed: {0}")]
    Configuration(String),
}
