use std::io::Cursor;

use async_trait::async_trait;
use hound::{SampleFormat, WavReader};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

pub const DEFAULT_GOOGLE_SPEECH_URL: &str = "http://www.google.com/speech-api/v2";
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Client for the Google Speech Recognition v2 `recognize` endpoint.
pub struct GoogleSpeechEngine {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    language: String,
}

impl GoogleSpeechEngine {
    pub fn new(api_key: String, base_url: Option<String>, language: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_GOOGLE_SPEECH_URL.to_string());
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/recognize", base_url.trim_end_matches('/')),
            api_key,
            language: language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        }
    }
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    result: Vec<RecognitionResult>,
}

#[derive(Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternative: Vec<Alternative>,
}

#[derive(Deserialize)]
struct Alternative {
    transcript: Option<String>,
    confidence: Option<f64>,
}

#[async_trait]
impl TranscriptionEngine for GoogleSpeechEngine {
    async fn transcribe(&self, wav_data: &[u8]) -> Result<String, TranscriptionError> {
        let (body, sample_rate) = wav_to_l16(wav_data)?;

        tracing::debug!(
            endpoint = %self.endpoint,
            language = %self.language,
            bytes = body.len(),
            "Sending audio to Google Speech Recognition"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[
                ("client", "chromium"),
                ("lang", self.language.as_str()),
                ("key", self.api_key.as_str()),
                ("pFilter", "0"),
            ])
            .header(CONTENT_TYPE, format!("audio/l16; rate={}", sample_rate))
            .body(body)
            .send()
            .await
            .map_err(|e| TranscriptionError::ServiceUnavailable(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ServiceUnavailable(format!(
                "status {}: {}",
                status, body
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| TranscriptionError::ServiceUnavailable(format!("body: {}", e)))?;

        let transcript = best_transcript(&text)?;

        tracing::info!(
            chars = transcript.len(),
            "Google Speech Recognition transcription completed"
        );

        Ok(transcript.trim().to_string())
    }

    fn service_name(&self) -> &str {
        "Google Speech Recognition"
    }
}

/// The endpoint streams one JSON object per line; the first one with a
/// non-empty `result` carries the hypotheses.
fn best_transcript(body: &str) -> Result<String, TranscriptionError> {
    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let parsed: RecognizeResponse = serde_json::from_str(line)
            .map_err(|e| TranscriptionError::InvalidResponse(format!("parse: {}", e)))?;

        let Some(result) = parsed.result.into_iter().next() else {
            continue;
        };

        let best = if result.alternative.iter().any(|a| a.confidence.is_some()) {
            result
                .alternative
                .into_iter()
                .filter(|a| a.confidence.is_some())
                .max_by(|a, b| {
                    a.confidence
                        .unwrap_or(0.0)
                        .total_cmp(&b.confidence.unwrap_or(0.0))
                })
        } else {
            result.alternative.into_iter().next()
        };

        return best
            .and_then(|a| a.transcript)
            .ok_or(TranscriptionError::NoSpeechDetected);
    }

    Err(TranscriptionError::NoSpeechDetected)
}

/// Linear PCM, 16-bit signed big-endian, as `audio/l16` requires.
fn wav_to_l16(wav_data: &[u8]) -> Result<(Vec<u8>, u32), TranscriptionError> {
    let reader = WavReader::new(Cursor::new(wav_data))
        .map_err(|e| TranscriptionError::AudioUnreadable(format!("wav header: {}", e)))?;
    let spec = reader.spec();

    if spec.bits_per_sample != 16 || spec.sample_format != SampleFormat::Int {
        return Err(TranscriptionError::AudioUnreadable(format!(
            "expected 16-bit PCM, got {}-bit {:?}",
            spec.bits_per_sample, spec.sample_format
        )));
    }

    let mut body = Vec::with_capacity(reader.len() as usize * 2);
    for sample in reader.into_samples::<i16>() {
        let sample =
            sample.map_err(|e| TranscriptionError::AudioUnreadable(format!("samples: {}", e)))?;
        body.extend_from_slice(&sample.to_be_bytes());
    }

    Ok((body, spec.sample_rate))
}
