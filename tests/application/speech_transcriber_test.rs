use std::sync::Arc;
use std::time::Duration;

use callguard::domain::TranscriptionResult;

use crate::helpers::{self, MOCK_SERVICE_NAME, MockConverter, MockTranscription, SlowConverter};

fn upload_in(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("call.wav");
    std::fs::write(&path, b"original").unwrap();
    path
}

#[tokio::test]
async fn given_recognized_speech_when_transcribing_then_returns_text_and_cleans_up() {
    let dir = tempfile::TempDir::new().unwrap();
    let upload = upload_in(&dir);
    let converter = Arc::new(MockConverter::default());
    let transcriber = helpers::transcriber(
        converter.clone(),
        MockTranscription::Text("please confirm your pin"),
    );

    let result = transcriber.transcribe_file(&upload).await;

    assert_eq!(
        result,
        TranscriptionResult::Transcribed("please confirm your pin".to_string())
    );
    assert_eq!(converter.calls(), 1);
    assert!(helpers::converted_waveforms_under(dir.path()).is_empty());
    assert!(upload.exists());
}

#[tokio::test]
async fn given_empty_transcript_when_transcribing_then_unclear() {
    let dir = tempfile::TempDir::new().unwrap();
    let upload = upload_in(&dir);
    let transcriber =
        helpers::transcriber(Arc::new(MockConverter::default()), MockTranscription::Empty);

    let result = transcriber.transcribe_file(&upload).await;

    assert_eq!(result, TranscriptionResult::Unclear);
    assert!(helpers::converted_waveforms_under(dir.path()).is_empty());
}

#[tokio::test]
async fn given_no_speech_detected_when_transcribing_then_unclear() {
    let dir = tempfile::TempDir::new().unwrap();
    let upload = upload_in(&dir);
    let transcriber =
        helpers::transcriber(Arc::new(MockConverter::default()), MockTranscription::Unclear);

    let result = transcriber.transcribe_file(&upload).await;

    assert_eq!(result, TranscriptionResult::Unclear);
}

#[tokio::test]
async fn given_service_down_when_transcribing_then_service_unavailable_with_name() {
    let dir = tempfile::TempDir::new().unwrap();
    let upload = upload_in(&dir);
    let transcriber = helpers::transcriber(
        Arc::new(MockConverter::default()),
        MockTranscription::Unavailable,
    );

    let result = transcriber.transcribe_file(&upload).await;

    assert_eq!(
        result,
        TranscriptionResult::ServiceUnavailable {
            service: MOCK_SERVICE_NAME.to_string()
        }
    );
    assert!(helpers::converted_waveforms_under(dir.path()).is_empty());
}

#[tokio::test]
async fn given_engine_hangs_when_transcribing_then_times_out_as_service_unavailable() {
    let dir = tempfile::TempDir::new().unwrap();
    let upload = upload_in(&dir);
    let transcriber =
        helpers::transcriber(Arc::new(MockConverter::default()), MockTranscription::Hang);

    let result = transcriber.transcribe_file(&upload).await;

    assert_eq!(
        result,
        TranscriptionResult::ServiceUnavailable {
            service: MOCK_SERVICE_NAME.to_string()
        }
    );
    assert!(helpers::converted_waveforms_under(dir.path()).is_empty());
}

#[tokio::test]
async fn given_garbled_response_when_transcribing_then_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let upload = upload_in(&dir);
    let transcriber =
        helpers::transcriber(Arc::new(MockConverter::default()), MockTranscription::Invalid);

    let result = transcriber.transcribe_file(&upload).await;

    assert_eq!(result, TranscriptionResult::Failed);
}

#[tokio::test]
async fn given_conversion_fails_when_transcribing_then_failed_and_partial_output_removed() {
    let dir = tempfile::TempDir::new().unwrap();
    let upload = upload_in(&dir);
    let transcriber = helpers::transcriber(
        Arc::new(MockConverter::failing()),
        MockTranscription::Text("unused"),
    );

    let result = transcriber.transcribe_file(&upload).await;

    assert_eq!(result, TranscriptionResult::Failed);
    assert!(helpers::converted_waveforms_under(dir.path()).is_empty());
}

#[tokio::test]
async fn given_request_dropped_mid_conversion_when_conversion_finishes_then_no_waveform_remains() {
    let dir = tempfile::TempDir::new().unwrap();
    let upload = upload_in(&dir);
    let transcriber = helpers::transcriber(
        Arc::new(SlowConverter {
            delay: Duration::from_millis(300),
        }),
        MockTranscription::Text("unused"),
    );

    let cancelled =
        tokio::time::timeout(Duration::from_millis(50), transcriber.transcribe_file(&upload))
            .await;
    assert!(cancelled.is_err());

    tokio::time::sleep(Duration::from_millis(700)).await;

    assert!(helpers::converted_waveforms_under(dir.path()).is_empty());
    assert!(upload.exists());
}
