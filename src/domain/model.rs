use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub sku: String,
    pub name: String,
}

/// Binary polarity, no neutral value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ThemeLabel {
    Comfort,
    Durability,
    Appearance,
}

impl ThemeLabel {
    pub const ALL: [ThemeLabel; 3] = [
        ThemeLabel::Comfort,
        ThemeLabel::Durability,
        ThemeLabel::Appearance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ThemeLabel::Comfort => "Comfort",
            ThemeLabel::Durability => "Durability",
            ThemeLabel::Appearance => "Appearance",
        }
    }
}

impl fmt::Display for ThemeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output of the analysis core for a single piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub sentiment: Sentiment,
    pub themes: BTreeSet<ThemeLabel>,
}

/// A submission as received from a caller. Every field is optional here so
/// that missing fields surface as validation errors instead of parse errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackInput {
    #[serde(default)]
    pub product_sku: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub text: Option<String>,
}

impl FeedbackInput {
    pub fn new(product_sku: impl Into<String>, rating: i32, text: impl Into<String>) -> Self {
        Self {
            product_sku: Some(product_sku.into()),
            rating: Some(rating),
            text: Some(text.into()),
        }
    }
}

/// A validated, classified submission waiting for the store to assign
/// an id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub product_id: u32,
    pub rating: i32,
    pub text: String,
    pub classification: Classification,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: u64,
    pub product_id: u32,
    pub rating: i32,
    pub text: String,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub themes: BTreeSet<ThemeLabel>,
    pub created_at: DateTime<Utc>,
}

/// Row shape returned when listing a product's feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackView {
    pub rating: i32,
    pub sentiment: Sentiment,
    pub text: String,
}

impl From<&FeedbackRecord> for FeedbackView {
    fn from(record: &FeedbackRecord) -> Self {
        Self {
            rating: record.rating,
            sentiment: record.sentiment,
            text: record.text.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub product_id: u32,
    pub sentiments: SentimentCounts,
    pub themes: BTreeMap<ThemeLabel, usize>,
}

impl AggregateStats {
    /// Zero counts with every theme label present.
    pub fn empty(product_id: u32) -> Self {
        Self {
            product_id,
            sentiments: SentimentCounts::default(),
            themes: ThemeLabel::ALL.iter().map(|theme| (*theme, 0)).collect(),
        }
    }

    pub fn theme_count(&self, theme: ThemeLabel) -> usize {
        self.themes.get(&theme).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.sentiments.positive + self.sentiments.negative
    }
}

/// Stats and insights for one product, as emitted by the report writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductReport {
    pub product: Product,
    pub stats: AggregateStats,
    pub insights: Vec<String>,
}

/// One submission read during ingest, tagged with where it came from.
/// `row` is 1-based within `source`: the data row for CSV (header not
/// counted) or the array position for JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestRow {
    pub source: String,
    pub row: usize,
    pub input: FeedbackInput,
}

/// An input row that failed validation during ingest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRow {
    pub source: String,
    pub row: usize,
    pub product_sku: String,
    pub rating: String,
    pub text: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub accepted: Vec<NewFeedback>,
    pub rejected: Vec<RejectedRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub rejects_file: Option<String>,
}
