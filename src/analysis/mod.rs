//! # Analysis
//!
//! Deterministic feedback analysis. Nothing here allocates shared state or
//! fails: every function is total over its input.
//!
//! - `tokenizer`: ASCII word tokens
//! - `sentiment`: Positive / Negative keyword classifier
//! - `themes`: Comfort / Durability / Appearance detection
//! - `stats`: per-product counts
//! - `insights`: ordered recommendation rules

pub mod insights;
pub mod lexicon;
pub mod sentiment;
pub mod stats;
pub mod themes;
pub mod tokenizer;

pub use insights::{generate_insights, InsightRule, FALLBACK_INSIGHT, RULES};
pub use sentiment::SentimentClassifier;
pub use stats::aggregate;
pub use themes::ThemeDetector;
pub use tokenizer::tokenize;

use crate::domain::model::Classification;

/// Tokenizes once and runs both the sentiment and theme stages.
pub fn classify(text: &str) -> Classification {
    let tokens = tokenize(text);
    Classification {
        sentiment: SentimentClassifier::new().classify(&tokens),
        themes: ThemeDetector::new().detect(&tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Sentiment, ThemeLabel};
    use std::collections::BTreeSet;

    #[test]
    fn test_classify_shiny_ring() {
        let result = classify("This ring is shiny and beautiful");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.themes, BTreeSet::from([ThemeLabel::Appearance]));
    }

    #[test]
    fn test_classify_broken_necklace() {
        let result = classify("The necklace broke and feels heavy");
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(
            result.themes,
            BTreeSet::from([ThemeLabel::Durability, ThemeLabel::Comfort])
        );
    }

    #[test]
    fn test_classify_empty_text() {
        let result = classify("");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert!(result.themes.is_empty());
    }

    #[test]
    fn test_classify_is_pure() {
        let samples = [
            "",
            "!!!",
            "Dull, heavy and it broke. Beautiful box though.",
            "It's comfortable; premium QUALITY design",
            "ünïcödé 1234 \u{1F48D}",
        ];
        for text in samples {
            assert_eq!(classify(text), classify(text));
        }
    }

    #[test]
    fn test_classify_is_thread_safe() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| classify("shiny but fragile")))
            .collect();
        for handle in handles {
            let result = handle.join().unwrap();
            assert_eq!(result.sentiment, Sentiment::Positive);
            assert_eq!(
                result.themes,
                BTreeSet::from([ThemeLabel::Appearance, ThemeLabel::Durability])
            );
        }
    }
}
