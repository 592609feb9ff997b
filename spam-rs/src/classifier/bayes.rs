//! Multinomial Naive Bayes classifier
//!
//! Word-frequency statistics per class with add-one smoothing. Class priors
//! are estimated from training volume (token occurrences per class), and
//! scores are accumulated in the log domain.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::tokenizer::tokenize;
use super::types::*;
use crate::error::{ClassifierError, Result};

/// Naive Bayes spam/ham classifier
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NaiveBayesClassifier {
    vocabulary: HashSet<String>,
    spam_tokens: HashMap<String, u64>,
    ham_tokens: HashMap<String, u64>,
    spam_total: u64,
    ham_total: u64,
}

impl NaiveBayesClassifier {
    /// Create an untrained classifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate statistics from labeled examples
    pub fn train<I, E>(&mut self, examples: I)
    where
        I: IntoIterator<Item = E>,
        E: Borrow<TrainingExample>,
    {
        let mut trained = 0usize;
        for example in examples {
            let example = example.borrow();
            self.learn(&example.text, example.label);
            trained += 1;
        }

        debug!(
            examples = trained,
            vocabulary = self.vocabulary.len(),
            spam_total = self.spam_total,
            ham_total = self.ham_total,
            "Training batch applied"
        );
    }

    /// Learn from a single message
    pub fn learn(&mut self, text: &str, label: Label) {
        let (tokens, total) = match label {
            Label::Spam => (&mut self.spam_tokens, &mut self.spam_total),
            Label::Ham => (&mut self.ham_tokens, &mut self.ham_total),
        };

        for token in tokenize(text) {
            if !self.vocabulary.contains(&token) {
                self.vocabulary.insert(token.clone());
            }
            *tokens.entry(token).or_insert(0) += 1;
            *total += 1;
        }
    }

    /// Classify a message
    ///
    /// Tokens never seen during training are skipped. Text without any known
    /// token is classified from the class priors alone.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        if !self.is_trained() {
            return Err(ClassifierError::Untrained);
        }

        let grand_total = (self.spam_total + self.ham_total) as f64;
        // ln(0) is -inf for a class with no data, which pins its probability to 0
        let mut spam_score = (self.spam_total as f64 / grand_total).ln();
        let mut ham_score = (self.ham_total as f64 / grand_total).ln();
        let mut evidence = 0usize;

        for token in tokenize(text) {
            if self.vocabulary.contains(&token) {
                spam_score += self.word_probability(&token, Label::Spam).ln();
                ham_score += self.word_probability(&token, Label::Ham).ln();
                evidence += 1;
            }
        }

        // exp(s) / (exp(s) + exp(h)) without underflowing both terms to zero
        let spam_probability = 1.0 / (1.0 + (ham_score - spam_score).exp());

        debug!(evidence, spam_probability, "Message classified");

        Ok(Prediction::from_spam_probability(spam_probability))
    }

    /// Laplace-smoothed probability of a token given a class
    pub fn word_probability(&self, token: &str, label: Label) -> f64 {
        let count = self.count(token, label) as f64;
        let denominator = (self.total(label) + self.vocabulary.len() as u64).max(1);

        (count + 1.0) / denominator as f64
    }

    /// Occurrences of a token in a class
    pub fn count(&self, token: &str, label: Label) -> u64 {
        self.tokens(label).get(token).copied().unwrap_or(0)
    }

    /// Total token occurrences in a class
    pub fn total(&self, label: Label) -> u64 {
        match label {
            Label::Spam => self.spam_total,
            Label::Ham => self.ham_total,
        }
    }

    /// Number of distinct tokens seen across both classes
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Whether any token has been learned
    pub fn is_trained(&self) -> bool {
        self.spam_total > 0 || self.ham_total > 0
    }

    /// Get training statistics
    pub fn stats(&self) -> ClassifierStats {
        ClassifierStats {
            vocabulary_size: self.vocabulary.len(),
            spam_total: self.spam_total,
            ham_total: self.ham_total,
            spam_distinct: self.spam_tokens.len(),
            ham_distinct: self.ham_tokens.len(),
        }
    }

    /// Get every vocabulary token with its (spam, ham) counts
    pub fn token_counts(&self) -> Vec<(String, u64, u64)> {
        let mut result: Vec<_> = self
            .vocabulary
            .iter()
            .map(|token| {
                (
                    token.clone(),
                    self.count(token, Label::Spam),
                    self.count(token, Label::Ham),
                )
            })
            .collect();

        result.sort_by(|a, b| a.0.cmp(&b.0));
        result
    }

    fn tokens(&self, label: Label) -> &HashMap<String, u64> {
        match label {
            Label::Spam => &self.spam_tokens,
            Label::Ham => &self.ham_tokens,
        }
    }
}
