//! Training corpus loading
//!
//! A corpus is either a JSON array of `{"text": ..., "label": 0|1}` objects
//! or, for files with a `.jsonl` extension, one such object per line.

use std::path::Path;
use tracing::info;

use super::types::TrainingExample;
use crate::error::{ClassifierError, Result};

/// Built-in sample training set
pub fn default_corpus() -> Vec<TrainingExample> {
    vec![
        TrainingExample::spam("Get rich quick! Buy now!"),
        TrainingExample::spam("CONGRATULATIONS! You've won a prize!"),
        TrainingExample::ham("Meeting scheduled for tomorrow"),
        TrainingExample::ham("Please review the attached document"),
    ]
}

/// Load a corpus file, picking the format from its extension
pub fn load_corpus(path: &Path) -> Result<Vec<TrainingExample>> {
    let content = std::fs::read_to_string(path)?;

    let examples = match path.extension().and_then(|ext| ext.to_str()) {
        Some("jsonl") => parse_json_lines(&content)?,
        _ => serde_json::from_str(&content)?,
    };

    info!("Loaded {} training examples from {}", examples.len(), path.display());

    Ok(examples)
}

/// Parse JSON Lines, skipping blank lines
pub fn parse_json_lines(content: &str) -> Result<Vec<TrainingExample>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| ClassifierError::Corpus {
                line: index + 1,
                message: e.to_string(),
            })
        })
        .collect()
}
