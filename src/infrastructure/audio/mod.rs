pub mod audio_decoder;
mod google_speech_engine;
mod openai_whisper_engine;
mod transcription_engine_factory;
mod wav_converter;

pub use google_speech_engine::{DEFAULT_GOOGLE_SPEECH_URL, DEFAULT_LANGUAGE, GoogleSpeechEngine};
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use transcription_engine_factory::{TranscriptionEngineFactory, TranscriptionProvider};
pub use wav_converter::WavConverter;
