mod analysis_service_test;
mod classification_service_test;
mod speech_transcriber_test;
