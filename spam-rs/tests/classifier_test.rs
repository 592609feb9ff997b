//! Integration tests for the Naive Bayes classifier

use spam_rs::classifier::{tokenize, Label, NaiveBayesClassifier, TrainingExample};
use spam_rs::ClassifierError;

fn sample_training() -> Vec<TrainingExample> {
    vec![
        TrainingExample::spam("buy now free money"),
        TrainingExample::ham("meeting tomorrow project"),
    ]
}

fn trained() -> NaiveBayesClassifier {
    let mut classifier = NaiveBayesClassifier::new();
    classifier.train(sample_training());
    classifier
}

/// Helper to build a classifier with equal training volume per class
fn balanced() -> NaiveBayesClassifier {
    let mut classifier = NaiveBayesClassifier::new();
    classifier.train([
        TrainingExample::spam("buy free money"),
        TrainingExample::ham("meeting tomorrow project"),
    ]);
    classifier
}

#[test]
fn test_spam_scenario() {
    let result = trained().predict("free money now").unwrap();
    assert_eq!(result.prediction, Label::Spam);
    assert!(result.confidence > 0.5);
}

#[test]
fn test_ham_scenario() {
    let result = trained().predict("meeting project").unwrap();
    assert_eq!(result.prediction, Label::Ham);
    assert!(result.confidence > 0.5);
}

#[test]
fn test_empty_input_uses_priors() {
    let classifier = balanced();
    let result = classifier.predict("").unwrap();
    assert_eq!(result.prediction, Label::Ham);
    assert_eq!(result.confidence, 0.5);
    assert_eq!(result.spam_probability, 0.5);

    // 4 spam tokens vs 3 ham tokens
    let result = trained().predict("").unwrap();
    assert_eq!(result.prediction, Label::Spam);
    assert!((result.spam_probability - 4.0 / 7.0).abs() < 1e-12);
}

#[test]
fn test_unseen_token_matches_empty_input() {
    for classifier in [trained(), balanced()] {
        assert_eq!(
            classifier.predict("xyzzyqux").unwrap(),
            classifier.predict("").unwrap()
        );
    }
}

#[test]
fn test_unknown_words_are_neutral() {
    let classifier = trained();
    let known = classifier.predict("free money now").unwrap();
    let padded = classifier
        .predict("free zorblax money now quux frobnicate")
        .unwrap();
    assert_eq!(known, padded);
}

#[test]
fn test_prediction_is_deterministic() {
    let classifier = trained();
    let first = classifier.predict("Buy the project now!").unwrap();
    let second = classifier.predict("Buy the project now!").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_training_order_independence() {
    let examples = sample_training();

    let mut forward = NaiveBayesClassifier::new();
    forward.train(&examples);

    let mut backward = NaiveBayesClassifier::new();
    backward.train(examples.iter().rev());

    assert_eq!(forward, backward);
    assert_eq!(
        forward.predict("free project").unwrap(),
        backward.predict("free project").unwrap()
    );
}

#[test]
fn test_split_batch_equivalence() {
    let examples = sample_training();

    let mut single = NaiveBayesClassifier::new();
    single.train(&examples);

    let mut split = NaiveBayesClassifier::new();
    split.train(&examples[..1]);
    split.train(&examples[1..]);

    assert_eq!(single, split);
}

#[test]
fn test_smoothing_positivity() {
    let classifier = trained();
    let mut tokens: Vec<String> = classifier
        .token_counts()
        .into_iter()
        .map(|(token, _, _)| token)
        .collect();
    tokens.push("neverseen".to_string());

    for token in &tokens {
        for label in [Label::Spam, Label::Ham] {
            let p = classifier.word_probability(token, label);
            assert!(p > 0.0 && p < 1.0, "{} / {}: {}", token, label, p);
        }
    }
}

#[test]
fn test_confidence_bounds() {
    let classifier = trained();
    for text in [
        "free money now",
        "meeting project",
        "buy buy buy",
        "tomorrow free",
        "",
        "hello world",
    ] {
        let result = classifier.predict(text).unwrap();
        let p = result.spam_probability;
        assert!(result.confidence >= 0.5 && result.confidence <= 1.0);
        assert_eq!(result.confidence, p.max(1.0 - p));
        assert_eq!(result.is_spam(), p > 0.5);
    }
}

#[test]
fn test_state_invariants() {
    let mut classifier = NaiveBayesClassifier::new();
    classifier.train([
        TrainingExample::spam("Get rich quick! Buy now!"),
        TrainingExample::spam("CONGRATULATIONS! You've won a prize!"),
        TrainingExample::ham("Meeting scheduled for tomorrow"),
        TrainingExample::ham("Please review the attached document, now"),
    ]);

    let counts = classifier.token_counts();
    let spam_sum: u64 = counts.iter().map(|(_, s, _)| s).sum();
    let ham_sum: u64 = counts.iter().map(|(_, _, h)| h).sum();

    assert_eq!(classifier.total(Label::Spam), spam_sum);
    assert_eq!(classifier.total(Label::Ham), ham_sum);
    assert_eq!(classifier.vocabulary_size(), counts.len());
    assert!(counts.iter().all(|(_, s, h)| s + h > 0));

    // "now" appears in both classes but once in the vocabulary
    assert_eq!(classifier.count("now", Label::Spam), 1);
    assert_eq!(classifier.count("now", Label::Ham), 1);
}

#[test]
fn test_vocabulary_grows_monotonically() {
    let mut classifier = trained();
    let before = classifier.vocabulary_size();

    classifier.train([TrainingExample::ham("meeting")]);
    assert_eq!(classifier.vocabulary_size(), before);

    classifier.train([TrainingExample::ham("quarterly report")]);
    assert_eq!(classifier.vocabulary_size(), before + 2);
}

#[test]
fn test_predict_before_training() {
    let classifier = NaiveBayesClassifier::new();
    assert!(matches!(
        classifier.predict(""),
        Err(ClassifierError::Untrained)
    ));
}

#[test]
fn test_tokenizer_feeds_classifier() {
    let mut classifier = NaiveBayesClassifier::new();
    classifier.learn("FREE!!! Money...", Label::Spam);
    assert_eq!(tokenize("FREE!!! Money..."), vec!["free", "money"]);
    assert_eq!(classifier.count("free", Label::Spam), 1);
    assert_eq!(classifier.count("money", Label::Spam), 1);
}
