use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    AudioConverter, ConversionError, TranscriptionEngine, TranscriptionError,
};
use crate::domain::{PipelineStage, TranscriptionResult};

use super::temp_waveform::TempWaveform;

/// Converts an upload to the canonical waveform and submits it to the
/// configured speech-to-text engine.
pub struct SpeechTranscriber {
    converter: Arc<dyn AudioConverter>,
    engine: Arc<dyn TranscriptionEngine>,
    timeout: Duration,
}

impl SpeechTranscriber {
    pub fn new(
        converter: Arc<dyn AudioConverter>,
        engine: Arc<dyn TranscriptionEngine>,
        timeout: Duration,
    ) -> Self {
        Self {
            converter,
            engine,
            timeout,
        }
    }

    pub async fn transcribe_file(&self, upload_path: &Path) -> TranscriptionResult {
        let waveform = TempWaveform::beside(upload_path);

        match self.convert_and_transcribe(upload_path, waveform).await {
            Ok(text) if text.trim().is_empty() => {
                tracing::info!("Transcription returned no text");
                TranscriptionResult::Unclear
            }
            Ok(text) => TranscriptionResult::Transcribed(text),
            Err(TranscribeStageError::Transcription(TranscriptionError::NoSpeechDetected)) => {
                tracing::info!("Audio not clear enough to transcribe");
                TranscriptionResult::Unclear
            }
            Err(
                e @ (TranscribeStageError::Transcription(TranscriptionError::ServiceUnavailable(_))
                | TranscribeStageError::Timeout(_)),
            ) => {
                tracing::warn!(
                    error = %e,
                    service = self.engine.service_name(),
                    "Speech recognition service unavailable"
                );
                TranscriptionResult::ServiceUnavailable {
                    service: self.engine.service_name().to_string(),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Error during transcription");
                TranscriptionResult::Failed
            }
        }
    }

    async fn convert_and_transcribe(
        &self,
        input: &Path,
        waveform: TempWaveform,
    ) -> Result<String, TranscribeStageError> {
        let converter = Arc::clone(&self.converter);
        let src = input.to_path_buf();

        // The blocking task owns the waveform until the write has finished.
        let (waveform, converted) = tokio::task::spawn_blocking(move || {
            let converted = converter.convert(&src, waveform.path());
            (waveform, converted)
        })
        .await
        .map_err(|e| TranscribeStageError::Worker(e.to_string()))?;
        let summary = converted?;

        tracing::debug!(
            stage = %PipelineStage::Converted,
            samples = summary.samples,
            duration_secs = summary.duration_secs(),
            "Pipeline stage transition"
        );

        let wav_data = tokio::fs::read(waveform.path()).await?;

        tokio::time::timeout(self.timeout, self.engine.transcribe(&wav_data))
            .await
            .map_err(|_| TranscribeStageError::Timeout(self.timeout))?
            .map_err(TranscribeStageError::Transcription)
    }
}

#[derive(Debug, thiserror::Error)]
enum TranscribeStageError {
    #[error("conversion: {0}")]
    Conversion(#[from] ConversionError),
    #[error("transcription: {0}")]
    Transcription(TranscriptionError),
    #[error("transcription timed out after {0:?}")]
    Timeout(Duration),
    #[error("reading waveform: {0}")]
    Io(#[from] std::io::Error),
    #[error("conversion worker failed: {0}")]
    Worker(String),
}
