use callguard::domain::{
    TRANSCRIPTION_ERROR_MESSAGE, TranscriptionResult, TranscriptionStatus, UNCLEAR_AUDIO_MESSAGE,
};

#[test]
fn given_transcribed_text_when_displayed_then_text_is_returned_verbatim() {
    let result = TranscriptionResult::Transcribed("your account is locked".to_string());

    assert_eq!(result.status(), TranscriptionStatus::Ok);
    assert_eq!(result.transcript(), Some("your account is locked"));
    assert_eq!(result.display_text(), "your account is locked");
}

#[test]
fn given_unclear_audio_when_displayed_then_unclear_message() {
    let result = TranscriptionResult::Unclear;

    assert_eq!(result.status(), TranscriptionStatus::Unclear);
    assert_eq!(result.transcript(), None);
    assert_eq!(result.display_text(), UNCLEAR_AUDIO_MESSAGE);
}

#[test]
fn given_service_unavailable_when_displayed_then_names_the_service() {
    let result = TranscriptionResult::ServiceUnavailable {
        service: "Google Speech Recognition".to_string(),
    };

    assert_eq!(result.status(), TranscriptionStatus::ServiceUnavailable);
    assert_eq!(result.transcript(), None);
    assert_eq!(
        result.display_text(),
        "Could not request results from Google Speech Recognition service"
    );
}

#[test]
fn given_failure_when_displayed_then_generic_error_message() {
    let result = TranscriptionResult::Failed;

    assert_eq!(result.status(), TranscriptionStatus::Error);
    assert_eq!(result.display_text(), TRANSCRIPTION_ERROR_MESSAGE);
}

#[test]
fn given_statuses_when_formatted_then_snake_case_names() {
    assert_eq!(TranscriptionStatus::Ok.to_string(), "ok");
    assert_eq!(
        TranscriptionStatus::ServiceUnavailable.to_string(),
        "service_unavailable"
    );
}
