//! Spam detector service
//!
//! Shares one classifier between concurrent callers. Training takes the
//! write lock so that a frequency table and its class total are always
//! updated together; classification only takes the read lock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::bayes::NaiveBayesClassifier;
use super::types::*;
use crate::config::Config;
use crate::error::{ClassifierError, Result};

#[derive(Debug, Default)]
struct Counters {
    messages_scanned: AtomicU64,
    spam_detected: AtomicU64,
    ham_detected: AtomicU64,
    rejected: AtomicU64,
}

/// Shared spam detector
#[derive(Clone)]
pub struct SpamDetector {
    config: Arc<Config>,
    classifier: Arc<RwLock<NaiveBayesClassifier>>,
    counters: Arc<Counters>,
}

impl SpamDetector {
    /// Create a detector with an untrained classifier
    pub fn new(config: Config) -> Self {
        Self::with_classifier(config, NaiveBayesClassifier::new())
    }

    /// Create a detector around an existing classifier
    pub fn with_classifier(config: Config, classifier: NaiveBayesClassifier) -> Self {
        Self {
            config: Arc::new(config),
            classifier: Arc::new(RwLock::new(classifier)),
            counters: Arc::new(Counters::default()),
        }
    }

    /// Get current config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Train on a batch of labeled examples
    pub async fn train(&self, examples: &[TrainingExample]) {
        let mut classifier = self.classifier.write().await;
        classifier.train(examples);
        info!(
            "Trained on {} examples (vocabulary: {})",
            examples.len(),
            classifier.vocabulary_size()
        );
    }

    /// Learn from a spam message
    pub async fn learn_spam(&self, text: &str) {
        self.classifier.write().await.learn(text, Label::Spam);
    }

    /// Learn from a ham message
    pub async fn learn_ham(&self, text: &str) {
        self.classifier.write().await.learn(text, Label::Ham);
    }

    /// Classify a message
    pub async fn classify(&self, text: &str) -> Result<Prediction> {
        let len = text.trim().chars().count();
        let min = self.config.classifier.min_input_length;
        if len < min {
            self.counters.rejected.fetch_add(1, Ordering::Relaxed);
            debug!(len, min, "Input rejected");
            return Err(ClassifierError::InputTooShort { len, min });
        }

        let prediction = self.classifier.read().await.predict(text)?;

        self.counters.messages_scanned.fetch_add(1, Ordering::Relaxed);
        let counter = match prediction.prediction {
            Label::Spam => &self.counters.spam_detected,
            Label::Ham => &self.counters.ham_detected,
        };
        counter.fetch_add(1, Ordering::Relaxed);

        Ok(prediction)
    }

    /// Get detector statistics
    pub async fn stats(&self) -> DetectorStats {
        let model = self.classifier.read().await.stats();

        DetectorStats {
            messages_scanned: self.counters.messages_scanned.load(Ordering::Relaxed),
            spam_detected: self.counters.spam_detected.load(Ordering::Relaxed),
            ham_detected: self.counters.ham_detected.load(Ordering::Relaxed),
            rejected: self.counters.rejected.load(Ordering::Relaxed),
            model,
        }
    }
}

impl Default for SpamDetector {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
