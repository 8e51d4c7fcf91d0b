use std::sync::Arc;

use crate::application::ports::TextClassifier;
use crate::domain::{Classification, ClassificationLabel};

pub struct ClassificationService {
    classifier: Arc<dyn TextClassifier>,
    threshold: f32,
}

impl ClassificationService {
    pub fn new(classifier: Arc<dyn TextClassifier>, threshold: f32) -> Self {
        Self {
            classifier,
            threshold,
        }
    }

    /// Never fails: inference problems are reported through the label.
    pub async fn classify(&self, text: &str) -> Classification {
        let classifier = Arc::clone(&self.classifier);
        let input = text.to_string();

        match tokio::task::spawn_blocking(move || classifier.predict(&input)).await {
            Ok(Ok(Some(probability))) => {
                let classification = Classification::from_probability(probability, self.threshold);
                if classification.label == ClassificationLabel::Unknown {
                    tracing::warn!(probability, "Model produced an out-of-range probability");
                }
                classification
            }
            Ok(Ok(None)) => {
                tracing::warn!("Unexpected prediction output shape");
                Classification::unknown()
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Error during classification");
                Classification::error()
            }
            Err(e) => {
                tracing::error!(error = %e, "Classification worker failed");
                Classification::error()
            }
        }
    }
}
