use std::io;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use futures::stream;

use callguard::domain::{ClassificationLabel, TranscriptionResult, UploadedFile};

use crate::helpers::{self, MockClassifier, MockConverter, MockTranscription, SlowConverter};

fn audio_stream(
    content: &'static [u8],
) -> futures::stream::BoxStream<'static, Result<Bytes, io::Error>> {
    Box::pin(stream::iter(vec![Ok(Bytes::from_static(content))]))
}

#[tokio::test]
async fn given_clear_upload_when_analyzing_then_classifier_runs_once() {
    let dir = tempfile::TempDir::new().unwrap();
    let classifier = Arc::new(MockClassifier::returning(0.8));
    let service = helpers::analysis_service(
        dir.path(),
        Arc::new(MockConverter::default()),
        MockTranscription::Text("verify your bank details"),
        Arc::clone(&classifier),
        true,
    );
    let upload = UploadedFile::accept("call.wav").unwrap();

    let report = service
        .analyze_upload(&upload, audio_stream(b"RIFF"))
        .await
        .unwrap();

    assert_eq!(
        report.transcription,
        TranscriptionResult::Transcribed("verify your bank details".to_string())
    );
    let classification = report.classification.unwrap();
    assert_eq!(classification.label, ClassificationLabel::Fraud);
    assert_eq!(classifier.calls(), 1);
}

#[tokio::test]
async fn given_unclear_upload_when_analyzing_then_classifier_is_skipped() {
    let dir = tempfile::TempDir::new().unwrap();
    let classifier = Arc::new(MockClassifier::returning(0.8));
    let service = helpers::analysis_service(
        dir.path(),
        Arc::new(MockConverter::default()),
        MockTranscription::Unclear,
        Arc::clone(&classifier),
        true,
    );
    let upload = UploadedFile::accept("call.mp3").unwrap();

    let report = service
        .analyze_upload(&upload, audio_stream(b"ID3"))
        .await
        .unwrap();

    assert_eq!(report.transcription, TranscriptionResult::Unclear);
    assert!(report.classification.is_none());
    assert_eq!(classifier.calls(), 0);
}

#[tokio::test]
async fn given_retained_originals_when_analyzing_then_upload_stays_on_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let service = helpers::analysis_service(
        dir.path(),
        Arc::new(MockConverter::default()),
        MockTranscription::Text("hello"),
        Arc::new(MockClassifier::returning(0.1)),
        true,
    );
    let upload = UploadedFile::accept("call.wav").unwrap();

    service
        .analyze_upload(&upload, audio_stream(b"RIFF"))
        .await
        .unwrap();

    let files = helpers::files_under(dir.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("call.wav"));
    assert_eq!(std::fs::read(&files[0]).unwrap(), b"RIFF");
}

#[tokio::test]
async fn given_discarded_originals_when_analyzing_then_upload_is_deleted() {
    let dir = tempfile::TempDir::new().unwrap();
    let service = helpers::analysis_service(
        dir.path(),
        Arc::new(MockConverter::default()),
        MockTranscription::Text("hello"),
        Arc::new(MockClassifier::returning(0.1)),
        false,
    );
    let upload = UploadedFile::accept("call.wav").unwrap();

    service
        .analyze_upload(&upload, audio_stream(b"RIFF"))
        .await
        .unwrap();

    assert!(helpers::files_under(dir.path()).is_empty());
}

#[tokio::test]
async fn given_broken_upload_stream_when_analyzing_then_storage_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let converter = Arc::new(MockConverter::default());
    let service = helpers::analysis_service(
        dir.path(),
        converter.clone(),
        MockTranscription::Text("hello"),
        Arc::new(MockClassifier::returning(0.1)),
        true,
    );
    let upload = UploadedFile::accept("call.wav").unwrap();
    let chunks: Vec<Result<Bytes, io::Error>> = vec![
        Ok(Bytes::from_static(b"RIFF")),
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "client went away")),
    ];

    let result = service
        .analyze_upload(&upload, Box::pin(stream::iter(chunks)))
        .await;

    assert!(result.is_err());
    assert_eq!(converter.calls(), 0);
}

#[tokio::test]
async fn given_file_on_disk_when_analyzing_file_then_runs_full_pipeline() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("local.m4a");
    std::fs::write(&path, b"m4a").unwrap();
    let service = helpers::analysis_service(
        dir.path(),
        Arc::new(MockConverter::default()),
        MockTranscription::Text("lunch tomorrow?"),
        Arc::new(MockClassifier::returning(0.05)),
        true,
    );

    let report = service.analyze_file(&path).await;

    assert_eq!(report.transcription_text(), "lunch tomorrow?");
    assert_eq!(
        report.classification.unwrap().label,
        ClassificationLabel::Normal
    );
    assert!(path.exists());
}

#[tokio::test]
async fn given_caller_dropped_mid_pipeline_when_pipeline_finishes_then_upload_is_removed() {
    let dir = tempfile::TempDir::new().unwrap();
    let classifier = Arc::new(MockClassifier::returning(0.4));
    let service = helpers::analysis_service(
        dir.path(),
        Arc::new(SlowConverter {
            delay: Duration::from_millis(400),
        }),
        MockTranscription::Text("hello"),
        Arc::clone(&classifier),
        false,
    );
    let upload = UploadedFile::accept("call.wav").unwrap();

    let cancelled = tokio::time::timeout(
        Duration::from_millis(150),
        service.analyze_upload(&upload, audio_stream(b"RIFF")),
    )
    .await;
    assert!(cancelled.is_err());

    tokio::time::sleep(Duration::from_millis(1000)).await;

    assert!(helpers::files_under(dir.path()).is_empty());
    assert_eq!(classifier.calls(), 1);
}
