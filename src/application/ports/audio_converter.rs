use std::path::Path;

/// Re-encodes an audio container into the canonical waveform.
pub trait AudioConverter: Send + Sync {
    fn convert(&self, input: &Path, output: &Path) -> Result<ConversionSummary, ConversionError>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionSummary {
    pub sample_rate: u32,
    pub samples: usize,
}

impl ConversionSummary {
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples as f32 / self.sample_rate as f32
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("source unreadable: {0}")]
    SourceUnreadable(String),
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("resampling failed: {0}")]
    ResamplingFailed(String),
    #[error("waveform write failed: {0}")]
    WriteFailed(String),
}
