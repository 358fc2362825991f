//! Priority-ordered insight rules over aggregate stats.

use crate::domain::model::{AggregateStats, ThemeLabel};

pub const FALLBACK_INSIGHT: &str =
    "Feedback is balanced. No strong actionable insight at this time.";

pub struct InsightRule {
    pub name: &'static str,
    pub applies: fn(&AggregateStats) -> bool,
    pub message: &'static str,
}

fn negative_dominates(stats: &AggregateStats) -> bool {
    stats.sentiments.negative > stats.sentiments.positive
}

fn negative_at_least_positive(stats: &AggregateStats) -> bool {
    stats.sentiments.negative >= stats.sentiments.positive
}

fn mentions(stats: &AggregateStats, theme: ThemeLabel) -> bool {
    stats.theme_count(theme) > 0
}

fn durability_complaints(stats: &AggregateStats) -> bool {
    mentions(stats, ThemeLabel::Durability) && negative_at_least_positive(stats)
}

fn comfort_issues(stats: &AggregateStats) -> bool {
    mentions(stats, ThemeLabel::Comfort) && negative_at_least_positive(stats)
}

fn appearance_praise(stats: &AggregateStats) -> bool {
    mentions(stats, ThemeLabel::Appearance) && stats.sentiments.positive > stats.sentiments.negative
}

/// Evaluated top to bottom; every matching rule contributes its message.
pub static RULES: &[InsightRule] = &[
    InsightRule {
        name: "negative_sentiment",
        applies: negative_dominates,
        message: "Overall customer sentiment is negative. Key issues should be investigated urgently.",
    },
    InsightRule {
        name: "durability_complaints",
        applies: durability_complaints,
        message: "Multiple durability-related complaints detected. Improve material strength and build quality.",
    },
    InsightRule {
        name: "comfort_issues",
        applies: comfort_issues,
        message: "Comfort issues are frequently mentioned. Consider lighter and more wearable designs.",
    },
    InsightRule {
        name: "appearance_praise",
        applies: appearance_praise,
        message: "Appearance is positively received. Highlight design and finish in marketing.",
    },
];

pub fn generate_insights(stats: &AggregateStats) -> Vec<String> {
    let mut insights: Vec<String> = RULES
        .iter()
        .filter(|rule| (rule.applies)(stats))
        .inspect(|rule| {
            tracing::debug!(
                "Insight rule '{}' fired for product {}",
                rule.name,
                stats.product_id
            )
        })
        .map(|rule| rule.message.to_string())
        .collect();

    if insights.is_empty() {
        insights.push(FALLBACK_INSIGHT.to_string());
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SentimentCounts;

    fn stats(positive: usize, negative: usize, comfort: usize, durability: usize, appearance: usize) -> AggregateStats {
        let mut stats = AggregateStats::empty(1);
        stats.sentiments = SentimentCounts { positive, negative };
        stats.themes.insert(ThemeLabel::Comfort, comfort);
        stats.themes.insert(ThemeLabel::Durability, durability);
        stats.themes.insert(ThemeLabel::Appearance, appearance);
        stats
    }

    fn rule(name: &str) -> &'static InsightRule {
        RULES.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_negative_with_durability() {
        let insights = generate_insights(&stats(1, 3, 0, 2, 0));
        assert_eq!(
            insights,
            vec![rule("negative_sentiment").message, rule("durability_complaints").message]
        );
    }

    #[test]
    fn test_all_zero_falls_back() {
        assert_eq!(generate_insights(&stats(0, 0, 0, 0, 0)), vec![FALLBACK_INSIGHT]);
    }

    #[test]
    fn test_tie_triggers_theme_complaints_but_not_warning() {
        let insights = generate_insights(&stats(2, 2, 1, 1, 1));
        assert_eq!(
            insights,
            vec![rule("durability_complaints").message, rule("comfort_issues").message]
        );
    }

    #[test]
    fn test_positive_appearance_praise() {
        let insights = generate_insights(&stats(5, 1, 3, 0, 2));
        assert_eq!(insights, vec![rule("appearance_praise").message]);
    }

    #[test]
    fn test_positive_without_appearance_falls_back() {
        assert_eq!(generate_insights(&stats(4, 1, 2, 2, 0)), vec![FALLBACK_INSIGHT]);
    }

    #[test]
    fn test_rules_keep_priority_order() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["negative_sentiment", "durability_complaints", "comfort_issues", "appearance_praise"]
        );

        let insights = generate_insights(&stats(0, 4, 1, 1, 1));
        assert_eq!(insights.len(), 3);
        assert_eq!(insights[0], rule("negative_sentiment").message);
        assert_eq!(insights[2], rule("comfort_issues").message);
    }

    #[test]
    fn test_rules_are_independently_testable() {
        let tie = stats(1, 1, 0, 1, 0);
        assert!(!(rule("negative_sentiment").applies)(&tie));
        assert!((rule("durability_complaints").applies)(&tie));
        assert!(!(rule("appearance_praise").applies)(&tie));
    }
}
