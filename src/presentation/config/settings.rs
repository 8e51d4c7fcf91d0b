use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::infrastructure::audio::TranscriptionProvider;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub uploads: UploadSettings,
    pub transcription: TranscriptionSettings,
    pub classifier: ClassifierSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub directory: PathBuf,
    pub max_file_size_mb: usize,
    /// Keep the uploaded original after the request completes.
    pub retain_originals: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProvider,
    pub language: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierSettings {
    pub vocabulary_path: PathBuf,
    pub config_path: PathBuf,
    pub weights_path: PathBuf,
    pub sequence_length: usize,
    pub threshold: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.<Environment>`, then `APP__`-prefixed
    /// environment variables (`APP__SERVER__PORT=8080`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("uploads.directory", "static/uploads")?
            .set_default("uploads.max_file_size_mb", 25)?
            .set_default("uploads.retain_originals", true)?
            .set_default("transcription.provider", "google")?
            .set_default("transcription.language", "en-US")?
            .set_default("transcription.timeout_secs", 30)?
            .set_default(
                "classifier.vocabulary_path",
                "pretrained_models/fraud_words_tokenizer.json",
            )?
            .set_default(
                "classifier.config_path",
                "pretrained_models/fraud_words_rnn_config.json",
            )?
            .set_default(
                "classifier.weights_path",
                "pretrained_models/fraud_words_rnn_model.safetensors",
            )?
            .set_default("classifier.sequence_length", 100)?
            .set_default("classifier.threshold", 0.5)?
            .set_default("logging.level", "info,callguard=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.uploads.max_file_size_mb * 1024 * 1024
    }
}
