//! Classifier types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ClassifierError;

/// Message class
///
/// Serialized as the integer `0` (ham) or `1` (spam).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Label {
    /// Legitimate message
    Ham,
    /// Unsolicited message
    Spam,
}

impl Label {
    pub fn is_spam(self) -> bool {
        self == Label::Spam
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        match label {
            Label::Ham => 0,
            Label::Spam => 1,
        }
    }
}

impl TryFrom<u8> for Label {
    type Error = ClassifierError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Ham),
            1 => Ok(Label::Spam),
            other => Err(ClassifierError::InvalidLabel(other)),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Ham => write!(f, "ham"),
            Label::Spam => write!(f, "spam"),
        }
    }
}

/// A labeled training example
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Message body
    pub text: String,
    /// Class of the message
    pub label: Label,
}

impl TrainingExample {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }

    pub fn spam(text: impl Into<String>) -> Self {
        Self::new(text, Label::Spam)
    }

    pub fn ham(text: impl Into<String>) -> Self {
        Self::new(text, Label::Ham)
    }
}

/// Classification result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Winning class
    pub prediction: Label,
    /// Normalized probability of the winning class, in [0.5, 1.0]
    pub confidence: f64,
    /// Normalized probability that the text is spam
    pub spam_probability: f64,
}

impl Prediction {
    /// Build a prediction from P(spam | text). Ties resolve to ham.
    pub fn from_spam_probability(spam_probability: f64) -> Self {
        if spam_probability > 0.5 {
            Self {
                prediction: Label::Spam,
                confidence: spam_probability,
                spam_probability,
            }
        } else {
            Self {
                prediction: Label::Ham,
                confidence: 1.0 - spam_probability,
                spam_probability,
            }
        }
    }

    pub fn is_spam(&self) -> bool {
        self.prediction.is_spam()
    }
}

/// Snapshot of the model's training statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifierStats {
    /// Distinct tokens seen across both classes
    pub vocabulary_size: usize,
    /// Token occurrences seen in spam examples
    pub spam_total: u64,
    /// Token occurrences seen in ham examples
    pub ham_total: u64,
    /// Distinct tokens seen in spam examples
    pub spam_distinct: usize,
    /// Distinct tokens seen in ham examples
    pub ham_distinct: usize,
}

/// Detector statistics
#[derive(Debug, Clone, Serialize)]
pub struct DetectorStats {
    /// Messages classified
    pub messages_scanned: u64,
    /// Messages classified as spam
    pub spam_detected: u64,
    /// Messages classified as ham
    pub ham_detected: u64,
    /// Inputs rejected before classification
    pub rejected: u64,
    /// Model statistics
    pub model: ClassifierStats,
}
