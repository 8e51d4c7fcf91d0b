use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::application::ports::ClassifierError;

/// Characters a Keras `Tokenizer` strips by default.
pub const DEFAULT_FILTERS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n";

/// Word → id mapping with the tokenization policy it was trained with.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    word_index: HashMap<String, u32>,
    num_words: Option<u32>,
    filters: Option<String>,
    lower: bool,
    split: String,
    char_level: bool,
    oov_index: Option<u32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TokenizerDocument {
    Wrapped { config: TokenizerConfig },
    Bare(TokenizerConfig),
}

#[derive(Deserialize)]
struct TokenizerConfig {
    #[serde(default)]
    num_words: Option<u32>,
    #[serde(default = "default_filters")]
    filters: Option<String>,
    #[serde(default = "default_lower")]
    lower: bool,
    #[serde(default = "default_split")]
    split: String,
    #[serde(default)]
    char_level: bool,
    #[serde(default)]
    oov_token: Option<String>,
    word_index: WordIndex,
}

/// `Tokenizer.to_json()` stores `word_index` as an embedded JSON string.
#[derive(Deserialize)]
#[serde(untagged)]
enum WordIndex {
    Encoded(String),
    Map(HashMap<String, u32>),
}

fn default_filters() -> Option<String> {
    Some(DEFAULT_FILTERS.to_string())
}

fn default_lower() -> bool {
    true
}

fn default_split() -> String {
    " ".to_string()
}

impl Vocabulary {
    pub fn from_word_index(word_index: HashMap<String, u32>) -> Self {
        Self {
            word_index,
            num_words: None,
            filters: default_filters(),
            lower: true,
            split: default_split(),
            char_level: false,
            oov_index: None,
        }
    }

    pub fn with_num_words(mut self, num_words: u32) -> Self {
        self.num_words = Some(num_words);
        self
    }

    pub fn with_oov_token(mut self, token: &str) -> Self {
        self.oov_index = self.word_index.get(token).copied();
        self
    }

    pub fn from_file(path: &Path) -> Result<Self, ClassifierError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClassifierError::ArtifactLoadFailed(format!("vocabulary {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ClassifierError> {
        let document: TokenizerDocument = serde_json::from_str(json)
            .map_err(|e| ClassifierError::ArtifactLoadFailed(format!("vocabulary: {}", e)))?;

        let config = match document {
            TokenizerDocument::Wrapped { config } | TokenizerDocument::Bare(config) => config,
        };

        let word_index = match config.word_index {
            WordIndex::Map(map) => map,
            WordIndex::Encoded(raw) => serde_json::from_str(&raw).map_err(|e| {
                ClassifierError::ArtifactLoadFailed(format!("word_index: {}", e))
            })?,
        };

        let oov_index = config
            .oov_token
            .as_ref()
            .and_then(|token| word_index.get(token).copied());

        Ok(Self {
            word_index,
            num_words: config.num_words,
            filters: config.filters,
            lower: config.lower,
            split: config.split,
            char_level: config.char_level,
            oov_index,
        })
    }

    pub fn len(&self) -> usize {
        self.word_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_index.is_empty()
    }

    /// Splits text into tokens the same way the vocabulary was built.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let text = if self.lower {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        if self.char_level {
            return text.chars().map(String::from).collect();
        }

        let filtered: String = match &self.filters {
            Some(filters) => {
                let mut out = String::with_capacity(text.len());
                for c in text.chars() {
                    if filters.contains(c) {
                        out.push_str(&self.split);
                    } else {
                        out.push(c);
                    }
                }
                out
            }
            None => text,
        };

        if self.split.is_empty() {
            return vec![filtered];
        }

        filtered
            .split(self.split.as_str())
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    }

    /// Maps text to ids. Unknown or out-of-range words become the OOV id when
    /// one is configured and are dropped otherwise.
    pub fn text_to_sequence(&self, text: &str) -> Vec<u32> {
        self.tokens(text)
            .iter()
            .filter_map(|token| match self.word_index.get(token) {
                Some(&id) if self.num_words.is_some_and(|limit| id >= limit) => self.oov_index,
                Some(&id) => Some(id),
                None => self.oov_index,
            })
            .collect()
    }
}

/// Left-pads with zeros, or keeps the trailing `length` ids when too long.
pub fn pad_sequence(ids: &[u32], length: usize) -> Vec<u32> {
    if ids.len() >= length {
        return ids[ids.len() - length..].to_vec();
    }

    let mut padded = vec![0u32; length - ids.len()];
    padded.extend_from_slice(ids);
    padded
}
