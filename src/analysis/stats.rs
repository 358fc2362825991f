use crate::domain::model::{AggregateStats, FeedbackRecord, Sentiment};

/// Reduces a product's feedback records to sentiment and theme counts.
///
/// Theme counts use set membership on each record, so a record is counted at
/// most once per label. Records that belong to a different product are
/// skipped.
pub fn aggregate<'a, I>(product_id: u32, records: I) -> AggregateStats
where
    I: IntoIterator<Item = &'a FeedbackRecord>,
{
    let mut stats = AggregateStats::empty(product_id);

    for record in records {
        if record.product_id != product_id {
            tracing::debug!(
                "Skipping feedback {} of product {} while aggregating product {}",
                record.id,
                record.product_id,
                product_id
            );
            continue;
        }

        match record.sentiment {
            Sentiment::Positive => stats.sentiments.positive += 1,
            Sentiment::Negative => stats.sentiments.negative += 1,
        }

        for (theme, count) in stats.themes.iter_mut() {
            if record.themes.contains(theme) {
                *count += 1;
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ThemeLabel;
    use chrono::Utc;
    use std::collections::BTreeSet;

    fn record(id: u64, product_id: u32, sentiment: Sentiment, themes: &[ThemeLabel]) -> FeedbackRecord {
        FeedbackRecord {
            id,
            product_id,
            rating: 3,
            text: String::new(),
            sentiment,
            themes: themes.iter().copied().collect::<BTreeSet<_>>(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_counts_sentiments_and_themes() {
        let records = vec![
            record(1, 1, Sentiment::Negative, &[ThemeLabel::Durability, ThemeLabel::Comfort]),
            record(2, 1, Sentiment::Negative, &[ThemeLabel::Durability]),
            record(3, 1, Sentiment::Positive, &[ThemeLabel::Appearance]),
            record(4, 1, Sentiment::Negative, &[]),
        ];

        let stats = aggregate(1, &records);

        assert_eq!(stats.sentiments.positive, 1);
        assert_eq!(stats.sentiments.negative, 3);
        assert_eq!(stats.sentiments.get(Sentiment::Negative), 3);
        assert_eq!(stats.theme_count(ThemeLabel::Durability), 2);
        assert_eq!(stats.theme_count(ThemeLabel::Comfort), 1);
        assert_eq!(stats.theme_count(ThemeLabel::Appearance), 1);
    }

    #[test]
    fn test_empty_input_yields_zero_counts() {
        let stats = aggregate(9, &Vec::new());
        assert_eq!(stats, AggregateStats::empty(9));
    }

    #[test]
    fn test_other_products_are_ignored() {
        let records = vec![
            record(1, 1, Sentiment::Positive, &[ThemeLabel::Comfort]),
            record(2, 2, Sentiment::Negative, &[ThemeLabel::Comfort]),
        ];

        let stats = aggregate(1, &records);
        assert_eq!(stats.total(), 1);
        assert_eq!(stats.theme_count(ThemeLabel::Comfort), 1);
    }

    #[test]
    fn test_label_names_in_stored_text_do_not_count() {
        let stored = [
            r#"{"id":1,"product_id":1,"rating":2,"text":"Comfort Appearance","sentiment":"Negative",
                "themes":["Durability"],"created_at":"2024-01-01T00:00:00Z"}"#,
            r#"{"id":2,"product_id":1,"rating":3,"text":"Durability, Comfort and Appearance","sentiment":"Positive",
                "themes":[],"created_at":"2024-01-01T00:00:00Z"}"#,
        ];
        let parsed: Vec<FeedbackRecord> = stored
            .iter()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        let stats = aggregate(1, &parsed);
        assert_eq!(stats.theme_count(ThemeLabel::Durability), 1);
        assert_eq!(stats.theme_count(ThemeLabel::Comfort), 0);
        assert_eq!(stats.theme_count(ThemeLabel::Appearance), 0);
    }
}
