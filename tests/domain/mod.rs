mod transcription_test;
