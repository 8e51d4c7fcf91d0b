use std::path::Path;

use candle_core::{DType, Device, Module, Tensor};
use candle_nn::rnn::{LSTM, LSTMConfig, RNN};
use candle_nn::{Embedding, Linear, VarBuilder};
use serde::Deserialize;

use crate::application::ports::{ClassifierError, TextClassifier};

use super::vocabulary::{Vocabulary, pad_sequence};

/// Shape of the embedding → LSTM → dense network.
#[derive(Debug, Clone, Deserialize)]
pub struct RnnConfig {
    pub vocab_size: usize,
    pub embedding_dim: usize,
    pub hidden_size: usize,
}

/// Locations of the artifacts exported from the trained model.
#[derive(Debug, Clone)]
pub struct ClassifierArtifacts<'a> {
    pub vocabulary: &'a Path,
    pub config: &'a Path,
    pub weights: &'a Path,
}

/// Fraud/normal text classifier: embedding, single-layer LSTM, sigmoid head.
///
/// Weights are read-only after loading, so one instance is shared by all
/// requests without locking.
pub struct RecurrentTextClassifier {
    embedding: Embedding,
    lstm: LSTM,
    dense: Linear,
    vocabulary: Vocabulary,
    vocab_size: usize,
    sequence_length: usize,
    device: Device,
}

impl RecurrentTextClassifier {
    pub fn load(
        artifacts: &ClassifierArtifacts<'_>,
        sequence_length: usize,
    ) -> Result<Self, ClassifierError> {
        let device = Device::Cpu;

        tracing::info!(
            vocabulary = %artifacts.vocabulary.display(),
            weights = %artifacts.weights.display(),
            sequence_length,
            "Loading text classifier"
        );

        let vocabulary = Vocabulary::from_file(artifacts.vocabulary)?;

        let config_contents = std::fs::read_to_string(artifacts.config)
            .map_err(|e| ClassifierError::ArtifactLoadFailed(format!("read config: {}", e)))?;
        let config: RnnConfig = serde_json::from_str(&config_contents)
            .map_err(|e| ClassifierError::ArtifactLoadFailed(format!("parse config: {}", e)))?;

        // SAFETY: safetensors files are memory-mapped read-only
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[artifacts.weights], DType::F32, &device)
                .map_err(|e| ClassifierError::ArtifactLoadFailed(format!("weights: {}", e)))?
        };

        let classifier = Self::from_var_builder(vocabulary, &config, vb, sequence_length, device)?;

        tracing::info!(
            words = classifier.vocabulary.len(),
            hidden_size = config.hidden_size,
            "Text classifier loaded successfully"
        );

        Ok(classifier)
    }

    pub fn from_var_builder(
        vocabulary: Vocabulary,
        config: &RnnConfig,
        vb: VarBuilder,
        sequence_length: usize,
        device: Device,
    ) -> Result<Self, ClassifierError> {
        let embedding =
            candle_nn::embedding(config.vocab_size, config.embedding_dim, vb.pp("embedding"))
                .map_err(|e| ClassifierError::ArtifactLoadFailed(format!("embedding: {}", e)))?;
        let lstm = candle_nn::lstm(
            config.embedding_dim,
            config.hidden_size,
            LSTMConfig::default(),
            vb.pp("lstm"),
        )
        .map_err(|e| ClassifierError::ArtifactLoadFailed(format!("lstm: {}", e)))?;
        let dense = candle_nn::linear(config.hidden_size, 1, vb.pp("dense"))
            .map_err(|e| ClassifierError::ArtifactLoadFailed(format!("dense: {}", e)))?;

        Ok(Self {
            embedding,
            lstm,
            dense,
            vocabulary,
            vocab_size: config.vocab_size,
            sequence_length,
            device,
        })
    }

    pub fn encode(&self, text: &str) -> Vec<u32> {
        let mut ids = self.vocabulary.text_to_sequence(text);
        ids.retain(|&id| (id as usize) < self.vocab_size);
        pad_sequence(&ids, self.sequence_length)
    }

    fn forward(&self, ids: Vec<u32>) -> candle_core::Result<Vec<f32>> {
        let input = Tensor::from_vec(ids, (1, self.sequence_length), &self.device)?;
        let embedded = self.embedding.forward(&input)?;
        let states = self.lstm.seq(&embedded)?;

        let Some(last) = states.last() else {
            return Ok(Vec::new());
        };

        let logits = self.dense.forward(last.h())?;
        candle_nn::ops::sigmoid(&logits)?
            .flatten_all()?
            .to_vec1::<f32>()
    }
}

impl TextClassifier for RecurrentTextClassifier {
    fn predict(&self, text: &str) -> Result<Option<f32>, ClassifierError> {
        let ids = self.encode(text);

        tracing::debug!(
            known_tokens = ids.iter().filter(|&&id| id != 0).count(),
            "Text encoded for classification"
        );

        let output = self
            .forward(ids)
            .map_err(|e| ClassifierError::InferenceFailed(e.to_string()))?;

        Ok(output.first().copied())
    }
}
