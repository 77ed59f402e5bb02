//! Prompt construction for the generation calls.
//!
//! The summarisation prompt scales its requested length with the input:
//! ten percent of the sentence count, held between two and five sentences
//! so short notes still get a usable summary and long documents stay
//! skimmable.

use crate::text;

/// Minimum number of sentences to ask for in a summary.
pub const SUMMARY_MIN_SENTENCES: usize = 2;
/// Maximum number of sentences to ask for in a summary.
pub const SUMMARY_MAX_SENTENCES: usize = 5;

/// Fraction of the input's sentences a summary should keep.
const SUMMARY_RATIO: f64 = 0.10;

/// Target summary length for an input with `sentence_count` sentences.
pub fn summary_sentence_target(sentence_count: usize) -> usize {
    let scaled = (sentence_count as f64 * SUMMARY_RATIO) as usize;
    scaled.clamp(SUMMARY_MIN_SENTENCES, SUMMARY_MAX_SENTENCES)
}

/// Build the summarisation prompt, sizing the summary to the input.
pub fn summary_prompt(text: &str) -> String {
    let target = summary_sentence_target(text::split_sentences(text).len());
    format!("Summarise the following text in approximately {target} sentences:\n\n{text}")
}

/// Build the analysis prompt asking for the four labelled fields.
pub fn analysis_prompt(text: &str) -> String {
    format!(
        "Analyse the following text. \
         Return sentiment (positive, negative, or neutral), topics, word count, \
         and readability score, each introduced by its bolded label.\n\n{text}"
    )
}

/// Build the abstract prompt for roughly `word_target` words.
pub fn abstract_prompt(text: &str, word_target: usize) -> String {
    format!(
        "Analyse the following text. \
         Return an abstract for the text in approximately {word_target} words.\n\n{text}"
    )
}

/// Build the keyword extraction prompt for `keyword_count` entries.
pub fn keywords_prompt(text: &str, keyword_count: usize) -> String {
    format!(
        "Analyse the following text. \
         Return {keyword_count} keywords or key phrases for the text, separated by a comma.\n\n{text}"
    )
}
