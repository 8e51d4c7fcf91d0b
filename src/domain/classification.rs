use std::fmt;

pub const FRAUD_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationLabel {
    Fraud,
    Normal,
    Unknown,
    Error,
}

impl ClassificationLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fraud => "fraud",
            Self::Normal => "normal",
            Self::Unknown => "unknown",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ClassificationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: ClassificationLabel,
    pub probability: Option<f32>,
}

impl Classification {
    /// Labels a model probability against `threshold`. Values outside
    /// `[0, 1]` or non-finite values are treated as degenerate output.
    pub fn from_probability(probability: f32, threshold: f32) -> Self {
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Self::unknown();
        }

        let label = if probability >= threshold {
            ClassificationLabel::Fraud
        } else {
            ClassificationLabel::Normal
        };

        Self {
            label,
            probability: Some(probability),
        }
    }

    pub fn unknown() -> Self {
        Self {
            label: ClassificationLabel::Unknown,
            probability: None,
        }
    }

    pub fn error() -> Self {
        Self {
            label: ClassificationLabel::Error,
            probability: None,
        }
    }
}
