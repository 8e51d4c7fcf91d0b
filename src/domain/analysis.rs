use std::fmt;

use super::classification::Classification;
use super::transcription::TranscriptionResult;

/// Per-request pipeline stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineStage {
    Received,
    Converted,
    Transcribed,
    Classified,
    Responded,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Converted => "converted",
            Self::Transcribed => "transcribed",
            Self::Classified => "classified",
            Self::Responded => "responded",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub transcription: TranscriptionResult,
    pub classification: Option<Classification>,
}

impl AnalysisReport {
    pub fn transcription_text(&self) -> String {
        self.transcription.display_text()
    }
}
