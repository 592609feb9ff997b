//! Spam classification module
//!
//! Provides word tokenization, a multinomial Naive Bayes classifier and a
//! lock-guarded detector service for concurrent callers.

pub mod bayes;
pub mod corpus;
pub mod detector;
pub mod tokenizer;
pub mod types;

pub use bayes::NaiveBayesClassifier;
pub use corpus::{default_corpus, load_corpus};
pub use detector::SpamDetector;
pub use tokenizer::tokenize;
pub use types::*;
