//! Fixed keyword tables. Built once on first use and never mutated.

use crate::domain::model::ThemeLabel;
use std::collections::HashSet;
use std::sync::LazyLock;

const POSITIVE_WORDS: &[&str] = &["shiny", "elegant", "premium", "beautiful", "comfortable"];
const NEGATIVE_WORDS: &[&str] = &["tarnish", "dull", "heavy", "broke", "uncomfortable"];

const COMFORT_WORDS: &[&str] = &[
    "light",
    "heavy",
    "fit",
    "wearable",
    "comfortable",
    "uncomfortable",
];
const DURABILITY_WORDS: &[&str] = &["broke", "strong", "quality", "fragile", "tarnish"];
const APPEARANCE_WORDS: &[&str] = &["shiny", "dull", "design", "polish", "beautiful"];

pub struct Lexicon {
    pub positive: HashSet<&'static str>,
    pub negative: HashSet<&'static str>,
    /// One keyword set per theme, in `ThemeLabel::ALL` order.
    pub themes: Vec<(ThemeLabel, HashSet<&'static str>)>,
}

impl Lexicon {
    fn build() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
            themes: ThemeLabel::ALL
                .iter()
                .map(|theme| (*theme, Self::theme_words(*theme).iter().copied().collect()))
                .collect(),
        }
    }

    fn theme_words(theme: ThemeLabel) -> &'static [&'static str] {
        match theme {
            ThemeLabel::Comfort => COMFORT_WORDS,
            ThemeLabel::Durability => DURABILITY_WORDS,
            ThemeLabel::Appearance => APPEARANCE_WORDS,
        }
    }
}

pub static LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::build);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_sets_are_disjoint() {
        assert!(LEXICON.positive.is_disjoint(&LEXICON.negative));
    }

    #[test]
    fn test_every_theme_has_keywords() {
        assert_eq!(LEXICON.themes.len(), ThemeLabel::ALL.len());
        for (theme, words) in &LEXICON.themes {
            assert!(!words.is_empty(), "{} has no keywords", theme);
        }
    }
}
