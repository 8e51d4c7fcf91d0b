use std::sync::Arc;

use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

use super::google_speech_engine::GoogleSpeechEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProvider {
    Google,
    #[serde(rename = "openai")]
    OpenAi,
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        provider: TranscriptionProvider,
        language: Option<String>,
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        let api_key = api_key.filter(|k| !k.is_empty());

        match provider {
            TranscriptionProvider::Google => {
                let key = api_key.ok_or_else(|| {
                    TranscriptionError::Configuration(
                        "API key required for Google Speech Recognition".to_string(),
                    )
                })?;
                Ok(Arc::new(GoogleSpeechEngine::new(key, base_url, language)))
            }
            TranscriptionProvider::OpenAi => {
                let key = api_key.ok_or_else(|| {
                    TranscriptionError::Configuration(
                        "API key required for OpenAI Whisper".to_string(),
                    )
                })?;
                Ok(Arc::new(OpenAiWhisperEngine::new(
                    key, base_url, model, language,
                )))
            }
        }
    }
}
