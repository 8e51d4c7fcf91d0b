mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    ClassifierSettings, LoggingSettings, ServerSettings, Settings, TranscriptionSettings,
    UploadSettings,
};
