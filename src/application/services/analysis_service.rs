use std::io;
use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;
use tracing::Instrument;

use crate::application::ports::{UploadStore, UploadStoreError};
use crate::domain::{AnalysisReport, PipelineStage, StoragePath, UploadedFile};

use super::classification_service::ClassificationService;
use super::speech_transcriber::SpeechTranscriber;

/// Runs one upload through conversion, transcription and classification.
pub struct AnalysisService {
    upload_store: Arc<dyn UploadStore>,
    transcriber: SpeechTranscriber,
    classification: ClassificationService,
    retain_originals: bool,
}

impl AnalysisService {
    pub fn new(
        upload_store: Arc<dyn UploadStore>,
        transcriber: SpeechTranscriber,
        classification: ClassificationService,
        retain_originals: bool,
    ) -> Self {
        Self {
            upload_store,
            transcriber,
            classification,
            retain_originals,
        }
    }

    /// Stores the upload, then runs the pipeline on a spawned task that
    /// finishes (including cleanup) even if the caller is dropped.
    pub async fn analyze_upload(
        self: &Arc<Self>,
        upload: &UploadedFile,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let storage_path = StoragePath::new(&upload.id, &upload.filename);

        let size = self.upload_store.store(&storage_path, stream).await?;
        let local_path = self.upload_store.local_path(&storage_path)?;

        tracing::info!(
            stage = %PipelineStage::Received,
            path = %local_path.display(),
            bytes = size,
            "File saved"
        );

        let service = Arc::clone(self);
        let pipeline = tokio::spawn(
            async move {
                let report = service.analyze_file(&local_path).await;
                service.discard_original(&storage_path).await;
                report
            }
            .in_current_span(),
        );

        pipeline
            .await
            .map_err(|e| AnalysisError::Worker(e.to_string()))
    }

    async fn discard_original(&self, storage_path: &StoragePath) {
        if self.retain_originals {
            return;
        }
        if let Err(e) = self.upload_store.delete(storage_path).await {
            tracing::warn!(
                error = %e,
                path = %storage_path,
                "Failed to delete uploaded file after processing"
            );
        }
    }

    /// Pipeline over a file already on disk. Stage failures short-circuit to
    /// the documented fallback values rather than erroring.
    pub async fn analyze_file(&self, path: &Path) -> AnalysisReport {
        let transcription = self.transcriber.transcribe_file(path).await;
        tracing::debug!(
            stage = %PipelineStage::Transcribed,
            status = %transcription.status(),
            "Pipeline stage transition"
        );

        let classification = match transcription.transcript() {
            Some(text) => {
                let classification = self.classification.classify(text).await;
                tracing::debug!(
                    stage = %PipelineStage::Classified,
                    label = %classification.label,
                    probability = ?classification.probability,
                    "Pipeline stage transition"
                );
                Some(classification)
            }
            None => None,
        };

        tracing::debug!(stage = %PipelineStage::Responded, "Pipeline stage transition");

        AnalysisReport {
            transcription,
            classification,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("{0}")]
    Storage(#[from] UploadStoreError),
    #[error("analysis task failed: {0}")]
    Worker(String),
}
