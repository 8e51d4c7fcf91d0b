mod analysis;
mod classification;
mod storage_path;
mod transcription;
mod upload;

pub use analysis::{AnalysisReport, PipelineStage};
pub use classification::{Classification, ClassificationLabel, FRAUD_THRESHOLD};
pub use storage_path::{StoragePath, sanitize_filename};
pub use transcription::{
    TRANSCRIPTION_ERROR_MESSAGE, TranscriptionResult, TranscriptionStatus, UNCLEAR_AUDIO_MESSAGE,
};
pub use upload::{
    ALLOWED_EXTENSIONS_MESSAGE, AudioExtension, UploadId, UploadValidationError, UploadedFile,
};
