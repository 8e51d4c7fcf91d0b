/// A pretrained binary text model.
///
/// `predict` returns `Ok(None)` when the model produced no usable output.
pub trait TextClassifier: Send + Sync {
    fn predict(&self, text: &str) -> Result<Option<f32>, ClassifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("artifact loading failed: {0}")]
    ArtifactLoadFailed(String),
    #[error("tokenization failed: {0}")]
    TokenizationFailed(String),
    #[error("inference failed: {0}")]
    InferenceFailed(String),
}
