mod analysis_service;
mod classification_service;
mod speech_transcriber;
mod temp_waveform;

pub use analysis_service::{AnalysisError, AnalysisService};
pub use classification_service::ClassificationService;
pub use speech_transcriber::SpeechTranscriber;
pub use temp_waveform::TempWaveform;
