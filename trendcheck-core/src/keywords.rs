//! Keyword selection.

use crate::constants::EMPTY_SENTINEL;
use crate::PipelineConfig;

/// Number of keywords to keep for a text that produced `token_count` tokens.
///
/// Texts with strictly more than `long_text_token_threshold` tokens count as
/// long.
pub fn keyword_limit(token_count: usize, config: &PipelineConfig) -> usize {
    if token_count > config.long_text_token_threshold() {
        config.max_keywords_long()
    } else {
        config.max_keywords_short()
    }
}

/// Keep the first [`keyword_limit`] tokens, in order.
///
/// An empty token list yields `["empty"]`. Shorter lists are returned as-is;
/// there is no padding.
pub fn select_keywords(mut tokens: Vec<String>, config: &PipelineConfig) -> Vec<String> {
    if tokens.is_empty() {
        return vec![EMPTY_SENTINEL.to_string()];
    }

    let limit = keyword_limit(tokens.len(), config);
    tokens.truncate(limit);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("w{i}")).collect()
    }

    #[test]
    fn test_empty_tokens_give_sentinel() {
        let config = PipelineConfig::default();
        assert_eq!(select_keywords(Vec::new(), &config), vec!["empty"]);
    }

    #[test]
    fn test_short_text_limit() {
        let config = PipelineConfig::default();
        assert_eq!(select_keywords(words(17), &config), vec!["w0", "w1"]);
        assert_eq!(select_keywords(words(1), &config), vec!["w0"]);
    }

    #[test]
    fn test_long_text_limit_is_strictly_greater() {
        let config = PipelineConfig::default();
        assert_eq!(keyword_limit(17, &config), 2);
        assert_eq!(keyword_limit(18, &config), 3);
        assert_eq!(select_keywords(words(18), &config), vec!["w0", "w1", "w2"]);
    }

    #[test]
    fn test_custom_limits() {
        let config = PipelineConfig::builder()
            .max_keywords_short(4)
            .max_keywords_long(1)
            .long_text_token_threshold(3)
            .build()
            .unwrap();
        assert_eq!(select_keywords(words(3), &config), vec!["w0", "w1", "w2"]);
        assert_eq!(select_keywords(words(4), &config), vec!["w0"]);
    }

    proptest! {
        #[test]
        fn keyword_count_is_bounded(
            n in 1usize..60,
            short in 1usize..6,
            long in 1usize..6,
            threshold in 1usize..30,
        ) {
            let config = PipelineConfig::builder()
                .max_keywords_short(short)
                .max_keywords_long(long)
                .long_text_token_threshold(threshold)
                .build()
                .unwrap();
            let tokens = words(n);
            let selected = select_keywords(tokens.clone(), &config);

            let k = if n > threshold { long } else { short };
            prop_assert_eq!(selected.len(), k.min(n));
            prop_assert!(selected.len() <= config.max_keywords());
            prop_assert_eq!(&selected[..], &tokens[..selected.len()]);
        }
    }
}
