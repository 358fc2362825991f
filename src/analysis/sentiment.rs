use crate::analysis::lexicon::{Lexicon, LEXICON};
use crate::domain::model::Sentiment;

/// Keyword-count polarity classifier.
pub struct SentimentClassifier {
    lexicon: &'static Lexicon,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self { lexicon: &LEXICON }
    }

    /// Counts every token occurrence found in the positive and negative sets.
    pub fn keyword_counts<S: AsRef<str>>(&self, tokens: &[S]) -> (usize, usize) {
        tokens.iter().fold((0, 0), |(pos, neg), token| {
            let token = token.as_ref();
            (
                pos + usize::from(self.lexicon.positive.contains(token)),
                neg + usize::from(self.lexicon.negative.contains(token)),
            )
        })
    }

    /// Positive unless negative hits strictly outnumber positive ones, so
    /// ties and keyword-free input are Positive.
    pub fn classify<S: AsRef<str>>(&self, tokens: &[S]) -> Sentiment {
        let (positive, negative) = self.keyword_counts(tokens);
        if positive >= negative {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::tokenize;

    fn classify(text: &str) -> Sentiment {
        SentimentClassifier::new().classify(&tokenize(text))
    }

    #[test]
    fn test_positive_keywords_win() {
        assert_eq!(classify("This ring is shiny and beautiful"), Sentiment::Positive);
    }

    #[test]
    fn test_negative_keywords_win() {
        assert_eq!(classify("The necklace broke and feels heavy"), Sentiment::Negative);
    }

    #[test]
    fn test_tie_is_positive() {
        assert_eq!(classify("shiny but heavy"), Sentiment::Positive);
        assert_eq!(classify("elegant premium, dull and broke"), Sentiment::Positive);
    }

    #[test]
    fn test_no_keywords_is_positive() {
        assert_eq!(classify(""), Sentiment::Positive);
        assert_eq!(classify("arrived on tuesday"), Sentiment::Positive);
    }

    #[test]
    fn test_repeated_keywords_each_count() {
        assert_eq!(classify("dull dull shiny"), Sentiment::Negative);
        let counts = SentimentClassifier::new().keyword_counts(&tokenize("dull dull shiny"));
        assert_eq!(counts, (1, 2));
    }

    #[test]
    fn test_matching_is_exact_not_stemmed() {
        // "tarnished" and "shinier" are not in either set
        assert_eq!(classify("tarnished tarnished shinier"), Sentiment::Positive);
        assert_eq!(classify("Uncomfortable"), Sentiment::Negative);
    }
}
