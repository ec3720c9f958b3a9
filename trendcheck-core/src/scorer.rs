//! Scorer
//!
//! `score = Σ (len(keyword) mod mod_base) + (len(text) mod extra_mod_from_text_len)`
//!
//! Lengths are counted in characters. The score depends on the three
//! arguments only.

use crate::PipelineConfig;

/// Length of `text` in characters (Unicode scalar values)
pub fn text_length(text: &str) -> usize {
    text.chars().count()
}

/// Score `keywords` against the original, untokenized `text`
pub fn score(keywords: &[String], text: &str, config: &PipelineConfig) -> u64 {
    let keyword_part: u64 = keywords
        .iter()
        .map(|keyword| text_length(keyword) as u64 % config.mod_base())
        .sum();

    keyword_part + text_length(text) as u64 % config.extra_mod_from_text_len()
}
