use crate::core::service::FeedbackService;
use crate::core::{ConfigProvider, FeedbackStore, Pipeline, Storage};
use crate::domain::model::{
    FeedbackInput, IngestRow, IngestSummary, RejectedRow, TransformResult,
};
use crate::utils::error::{ErrorCategory, FeedbackError, Result};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// CSV row shape. A rating that is not an integer is read as missing and
/// rejected by validation instead of failing the whole file. An empty text
/// cell is accepted as empty text.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    product_sku: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    rating: Option<i32>,
    #[serde(default)]
    text: String,
}

impl From<CsvRow> for FeedbackInput {
    fn from(row: CsvRow) -> Self {
        Self {
            product_sku: row.product_sku,
            rating: row.rating,
            text: Some(row.text),
        }
    }
}

/// Batch ingest: reads feedback files, validates and classifies each row,
/// then persists the accepted ones.
pub struct IngestPipeline<S: Storage, F: FeedbackStore, C: ConfigProvider> {
    storage: S,
    service: Arc<FeedbackService<F>>,
    config: C,
}

impl<S: Storage, F: FeedbackStore, C: ConfigProvider> IngestPipeline<S, F, C> {
    pub fn new(storage: S, service: Arc<FeedbackService<F>>, config: C) -> Self {
        Self {
            storage,
            service,
            config,
        }
    }

    fn parse_file(path: &str, data: &[u8]) -> Result<Vec<IngestRow>> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => {
                let mut reader = csv::ReaderBuilder::new()
                    .trim(csv::Trim::Headers)
                    .from_reader(data);
                let mut inputs: Vec<FeedbackInput> = Vec::new();
                for row in reader.deserialize::<CsvRow>() {
                    inputs.push(row?.into());
                }
                Ok(Self::number_rows(path, inputs))
            }
            Some("json") => {
                let inputs: Vec<FeedbackInput> = serde_json::from_slice(data)?;
                Ok(Self::number_rows(path, inputs))
            }
            other => Err(FeedbackError::InvalidConfigValueError {
                field: "input".to_string(),
                value: path.to_string(),
                reason: format!("Unsupported input format: {}", other.unwrap_or("<none>")),
            }),
        }
    }

    fn number_rows(path: &str, inputs: Vec<FeedbackInput>) -> Vec<IngestRow> {
        inputs
            .into_iter()
            .enumerate()
            .map(|(index, input)| IngestRow {
                source: path.to_string(),
                row: index + 1,
                input,
            })
            .collect()
    }

    fn write_rejects(rejected: &[RejectedRow]) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in rejected {
            writer.serialize(row)?;
        }
        writer.into_inner().map_err(|e| FeedbackError::IoError(e.into_error()))
    }
}

#[async_trait::async_trait]
impl<S: Storage, F: FeedbackStore, C: ConfigProvider> Pipeline for IngestPipeline<S, F, C> {
    async fn extract(&self) -> Result<Vec<IngestRow>> {
        let mut inputs = Vec::new();

        for path in self.config.input_files() {
            tracing::debug!("Reading feedback from {}", path);
            let data = self.storage.read_file(path).await?;
            let parsed = Self::parse_file(path, &data)?;
            tracing::debug!("Read {} rows from {}", parsed.len(), path);
            inputs.extend(parsed);
        }

        Ok(inputs)
    }

    async fn transform(&self, data: Vec<IngestRow>) -> Result<TransformResult> {
        let mut result = TransformResult::default();

        for IngestRow { source, row, input } in data {
            match self.service.prepare(&input) {
                Ok(feedback) => result.accepted.push(feedback),
                Err(e) if e.category() == ErrorCategory::Validation => {
                    tracing::warn!("Rejected {} row {}: {}", source, row, e);
                    result.rejected.push(RejectedRow {
                        source,
                        row,
                        product_sku: input.product_sku.unwrap_or_default(),
                        rating: input.rating.map(|r| r.to_string()).unwrap_or_default(),
                        text: input.text.unwrap_or_default(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(result)
    }

    async fn load(&self, result: TransformResult) -> Result<IngestSummary> {
        let accepted = self.service.store().append_all(result.accepted).await?.len();

        let rejects_file = if result.rejected.is_empty() {
            None
        } else {
            let data = Self::write_rejects(&result.rejected)?;
            let path = self.config.rejects_path();
            tracing::debug!("Writing {} rejected rows to {}", result.rejected.len(), path);
            self.storage.write_file(path, &data).await?;
            Some(path.to_string())
        };

        Ok(IngestSummary {
            accepted,
            rejected: result.rejected.len(),
            rejects_file,
        })
    }
}
