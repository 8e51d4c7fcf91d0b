mod recurrent_classifier;
mod vocabulary;

pub use recurrent_classifier::{ClassifierArtifacts, RecurrentTextClassifier, RnnConfig};
pub use vocabulary::{DEFAULT_FILTERS, Vocabulary, pad_sequence};
