use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::application::ports::{AudioConverter, ConversionError, ConversionSummary};

use super::audio_decoder::{TARGET_SAMPLE_RATE, decode_file_to_pcm};

/// Writes the canonical waveform: 16 kHz, mono, 16-bit PCM WAV.
#[derive(Debug, Default, Clone, Copy)]
pub struct WavConverter;

impl WavConverter {
    pub fn canonical_spec() -> WavSpec {
        WavSpec {
            channels: 1,
            sample_rate: TARGET_SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        }
    }
}

impl AudioConverter for WavConverter {
    fn convert(&self, input: &Path, output: &Path) -> Result<ConversionSummary, ConversionError> {
        let pcm = decode_file_to_pcm(input)?;

        let mut writer = WavWriter::create(output, Self::canonical_spec())
            .map_err(|e| ConversionError::WriteFailed(format!("create: {}", e)))?;

        for sample in &pcm {
            let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer
                .write_sample(value)
                .map_err(|e| ConversionError::WriteFailed(e.to_string()))?;
        }

        writer
            .finalize()
            .map_err(|e| ConversionError::WriteFailed(format!("finalize: {}", e)))?;

        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            samples = pcm.len(),
            "Converted audio to canonical waveform"
        );

        Ok(ConversionSummary {
            sample_rate: TARGET_SAMPLE_RATE,
            samples: pcm.len(),
        })
    }
}
