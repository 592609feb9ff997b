//! Word tokenizer
//!
//! Lowercases the text, drops every character that is not a word character
//! (alphanumeric or underscore) or whitespace, then splits on whitespace.
//! Repeated words are kept so that they contribute repeated counts.

/// Tokenize text into lowercase words
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
