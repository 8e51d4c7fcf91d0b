mod audio_converter;
mod text_classifier;
mod transcription_engine;
mod upload_store;

pub use audio_converter::{AudioConverter, ConversionError, ConversionSummary};
pub use text_classifier::{ClassifierError, TextClassifier};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use upload_store::{UploadStore, UploadStoreError};
