use crate::analysis::lexicon::{Lexicon, LEXICON};
use crate::domain::model::ThemeLabel;
use std::collections::{BTreeSet, HashSet};

pub struct ThemeDetector {
    lexicon: &'static Lexicon,
}

impl Default for ThemeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeDetector {
    pub fn new() -> Self {
        Self { lexicon: &LEXICON }
    }

    /// Attaches every theme whose keyword set shares at least one word with
    /// the tokens. Themes are detected independently of each other.
    pub fn detect<S: AsRef<str>>(&self, tokens: &[S]) -> BTreeSet<ThemeLabel> {
        let words: HashSet<&str> = tokens.iter().map(|token| token.as_ref()).collect();

        self.lexicon
            .themes
            .iter()
            .filter(|(_, keywords)| !words.is_disjoint(keywords))
            .map(|(theme, _)| *theme)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::tokenize;

    fn detect(text: &str) -> BTreeSet<ThemeLabel> {
        ThemeDetector::new().detect(&tokenize(text))
    }

    #[test]
    fn test_single_theme() {
        let themes = detect("This ring is shiny and beautiful");
        assert_eq!(themes, BTreeSet::from([ThemeLabel::Appearance]));
    }

    #[test]
    fn test_multiple_themes_co_occur() {
        let themes = detect("The necklace broke and feels heavy");
        assert_eq!(
            themes,
            BTreeSet::from([ThemeLabel::Durability, ThemeLabel::Comfort])
        );
    }

    #[test]
    fn test_all_three_themes() {
        let themes = detect("Great design, strong clasp and a light fit");
        assert_eq!(themes.len(), 3);
    }

    #[test]
    fn test_no_theme() {
        assert!(detect("").is_empty());
        assert!(detect("Delivered quickly, thanks").is_empty());
    }

    #[test]
    fn test_repeats_do_not_duplicate_labels() {
        let themes = detect("fit fit fit");
        assert_eq!(themes, BTreeSet::from([ThemeLabel::Comfort]));
    }
}
