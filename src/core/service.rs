use crate::analysis;
use crate::core::catalog::Catalog;
use crate::core::FeedbackStore;
use crate::domain::model::{
    AggregateStats, FeedbackInput, FeedbackRecord, FeedbackView, NewFeedback, ProductReport,
};
use crate::utils::error::{FeedbackError, Result};

/// Validates feedback submissions against the catalog before handing them
/// to the analysis core, and serves per-product queries.
pub struct FeedbackService<F: FeedbackStore> {
    catalog: Catalog,
    store: F,
    rating_range: (i32, i32),
}

impl<F: FeedbackStore> FeedbackService<F> {
    pub fn new(catalog: Catalog, store: F, rating_range: (i32, i32)) -> Self {
        Self {
            catalog,
            store,
            rating_range,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &F {
        &self.store
    }

    /// Checks the required fields and classifies the text. Nothing is
    /// persisted.
    pub fn prepare(&self, input: &FeedbackInput) -> Result<NewFeedback> {
        let sku = required("product_sku", input.product_sku.as_deref())?.trim();
        if sku.is_empty() {
            return Err(FeedbackError::invalid_feedback(
                "product_sku",
                sku,
                "must not be blank",
            ));
        }
        let product = self.catalog.find_by_sku(sku)?;

        let rating = required("rating", input.rating)?;
        let (min, max) = self.rating_range;
        if rating < min || rating > max {
            return Err(FeedbackError::invalid_feedback(
                "rating",
                rating,
                format!("must be between {} and {}", min, max),
            ));
        }

        let text = required("text", input.text.as_deref())?;

        Ok(NewFeedback {
            product_id: product.id,
            rating,
            text: text.to_string(),
            classification: analysis::classify(text),
        })
    }

    pub async fn submit(&self, input: FeedbackInput) -> Result<FeedbackRecord> {
        let feedback = self.prepare(&input)?;
        let record = self.store.append(feedback).await?;
        tracing::info!(
            "Recorded feedback {} for product {}: {} {:?}",
            record.id,
            record.product_id,
            record.sentiment,
            record.themes
        );
        Ok(record)
    }

    pub async fn feedback_for(&self, sku: &str) -> Result<Vec<FeedbackView>> {
        let product = self.catalog.find_by_sku(sku)?;
        let records = self.store.records_for(product.id).await?;
        Ok(records.iter().map(FeedbackView::from).collect())
    }

    pub async fn stats_for(&self, sku: &str) -> Result<AggregateStats> {
        let product = self.catalog.find_by_sku(sku)?;
        let records = self.store.records_for(product.id).await?;
        tracing::debug!(
            "Aggregating {} feedback records for {}",
            records.len(),
            product.sku
        );
        Ok(analysis::aggregate(product.id, &records))
    }

    pub async fn insights_for(&self, sku: &str) -> Result<Vec<String>> {
        let stats = self.stats_for(sku).await?;
        Ok(analysis::generate_insights(&stats))
    }

    /// Stats and insights for every product in the catalog, in catalog order.
    pub async fn report(&self) -> Result<Vec<ProductReport>> {
        let records = self.store.all_records().await?;

        Ok(self
            .catalog
            .list()
            .iter()
            .map(|product| {
                let stats = analysis::aggregate(
                    product.id,
                    records.iter().filter(|r| r.product_id == product.id),
                );
                let insights = analysis::generate_insights(&stats);
                ProductReport {
                    product: product.clone(),
                    stats,
                    insights,
                }
            })
            .collect())
    }
}

fn required<T>(field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| FeedbackError::invalid_feedback(field, "<missing>", "field is required"))
}
