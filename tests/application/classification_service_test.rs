use std::sync::Arc;

use callguard::application::services::ClassificationService;
use callguard::domain::{Classification, ClassificationLabel, FRAUD_THRESHOLD};

use crate::helpers::MockClassifier;

#[tokio::test]
async fn given_high_probability_when_classifying_then_fraud() {
    let service = ClassificationService::new(
        Arc::new(MockClassifier::returning(0.97)),
        FRAUD_THRESHOLD,
    );

    let classification = service.classify("send the gift card codes now").await;

    assert_eq!(classification.label, ClassificationLabel::Fraud);
    assert_eq!(classification.probability, Some(0.97));
}

#[tokio::test]
async fn given_low_probability_when_classifying_then_normal() {
    let service = ClassificationService::new(
        Arc::new(MockClassifier::returning(0.03)),
        FRAUD_THRESHOLD,
    );

    let classification = service.classify("running late, see you soon").await;

    assert_eq!(classification.label, ClassificationLabel::Normal);
}

#[tokio::test]
async fn given_custom_threshold_when_classifying_then_threshold_is_applied() {
    let service = ClassificationService::new(Arc::new(MockClassifier::returning(0.6)), 0.75);

    let classification = service.classify("hello").await;

    assert_eq!(classification.label, ClassificationLabel::Normal);
}

#[tokio::test]
async fn given_model_without_output_when_classifying_then_unknown() {
    let service = ClassificationService::new(
        Arc::new(MockClassifier::empty_output()),
        FRAUD_THRESHOLD,
    );

    let classification = service.classify("hello").await;

    assert_eq!(classification, Classification::unknown());
}

#[tokio::test]
async fn given_out_of_range_output_when_classifying_then_unknown() {
    let service = ClassificationService::new(
        Arc::new(MockClassifier::returning(f32::NAN)),
        FRAUD_THRESHOLD,
    );

    let classification = service.classify("hello").await;

    assert_eq!(classification, Classification::unknown());
}

#[tokio::test]
async fn given_inference_failure_when_classifying_then_error_label() {
    let service = ClassificationService::new(
        Arc::new(MockClassifier::failing()),
        FRAUD_THRESHOLD,
    );

    let classification = service.classify("hello").await;

    assert_eq!(classification, Classification::error());
}
