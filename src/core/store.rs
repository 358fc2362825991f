use crate::core::{FeedbackStore, Storage};
use crate::domain::model::{FeedbackRecord, NewFeedback};
use crate::utils::error::{FeedbackError, Result};
use chrono::Utc;
use tokio::sync::Mutex;

/// Feedback store that keeps one JSON object per line in a single file.
///
/// Themes are written as a JSON array of labels, so reading them back gives
/// an exact set and never depends on substring matching. Records are only
/// ever appended; ids come from the highest id on disk at append time.
pub struct JsonlFeedbackStore<S: Storage> {
    storage: S,
    filename: String,
    append_lock: Mutex<()>,
}

impl<S: Storage> JsonlFeedbackStore<S> {
    pub fn new(storage: S, filename: impl Into<String>) -> Self {
        Self {
            storage,
            filename: filename.into(),
            append_lock: Mutex::new(()),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    async fn read_raw(&self) -> Result<Vec<u8>> {
        if self.storage.exists(&self.filename).await? {
            self.storage.read_file(&self.filename).await
        } else {
            Ok(Vec::new())
        }
    }

    fn parse(&self, raw: &[u8]) -> Result<Vec<FeedbackRecord>> {
        let content = std::str::from_utf8(raw).map_err(|e| FeedbackError::StoreError {
            message: format!("{} is not valid UTF-8: {}", self.filename, e),
        })?;

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| FeedbackError::StoreError {
                    message: format!("{} line {}: {}", self.filename, index + 1, e),
                })
            })
            .collect()
    }
}

impl<S: Storage> FeedbackStore for JsonlFeedbackStore<S> {
    async fn append(&self, feedback: NewFeedback) -> Result<FeedbackRecord> {
        self.append_all(vec![feedback])
            .await?
            .pop()
            .ok_or_else(|| FeedbackError::StoreError {
                message: format!("{}: append produced no record", self.filename),
            })
    }

    async fn append_all(&self, feedback: Vec<NewFeedback>) -> Result<Vec<FeedbackRecord>> {
        if feedback.is_empty() {
            return Ok(Vec::new());
        }

        let _guard = self.append_lock.lock().await;

        let raw = self.read_raw().await?;
        let first_id = self.parse(&raw)?.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let created_at = Utc::now();

        let records: Vec<FeedbackRecord> = feedback
            .into_iter()
            .zip(first_id..)
            .map(|(feedback, id)| FeedbackRecord {
                id,
                product_id: feedback.product_id,
                rating: feedback.rating,
                text: feedback.text,
                sentiment: feedback.classification.sentiment,
                themes: feedback.classification.themes,
                created_at,
            })
            .collect();

        let mut lines = Vec::new();
        if !raw.is_empty() && !raw.ends_with(b"\n") {
            lines.push(b'\n');
        }
        for record in &records {
            serde_json::to_writer(&mut lines, record)?;
            lines.push(b'\n');
        }

        self.storage.append_file(&self.filename, &lines).await?;

        tracing::debug!(
            "Stored {} feedback records in {} (ids {}..={})",
            records.len(),
            self.filename,
            first_id,
            first_id + records.len() as u64 - 1
        );
        Ok(records)
    }

    async fn records_for(&self, product_id: u32) -> Result<Vec<FeedbackRecord>> {
        Ok(self
            .all_records()
            .await?
            .into_iter()
            .filter(|r| r.product_id == product_id)
            .collect())
    }

    async fn all_records(&self) -> Result<Vec<FeedbackRecord>> {
        let raw = self.read_raw().await?;
        self.parse(&raw)
    }
}
