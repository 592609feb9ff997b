//! spam-rs: Naive Bayes spam classifier
//!
//! Labels short email bodies as spam or legitimate (ham) using a multinomial
//! Naive Bayes model trained on word frequencies.
//!
//! # Features
//!
//! - **Tokenizer**: lowercase word tokens, punctuation stripped
//! - **Classifier**: add-one smoothing, volume-based priors, log-domain scoring
//! - **Detector**: shared classifier behind a single-writer lock
//! - **Corpus**: JSON / JSON Lines training sets
//!
//! # Example
//!
//! ```
//! use spam_rs::classifier::{Label, NaiveBayesClassifier, TrainingExample};
//!
//! let mut classifier = NaiveBayesClassifier::new();
//! classifier.train([
//!     TrainingExample::spam("buy now free money"),
//!     TrainingExample::ham("meeting tomorrow project"),
//! ]);
//!
//! let result = classifier.predict("free money now").unwrap();
//! assert_eq!(result.prediction, Label::Spam);
//! assert!(result.confidence > 0.5);
//! ```
//!
//! # Modules
//!
//! - [`classifier`]: Tokenizer, model, corpus loading and detector service
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling

pub mod classifier;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use classifier::{Label, NaiveBayesClassifier, Prediction, SpamDetector, TrainingExample};
pub use config::Config;
pub use error::{ClassifierError, Result};
