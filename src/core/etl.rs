use crate::core::Pipeline;
use crate::domain::model::IngestSummary;
use crate::utils::error::Result;
use std::time::Instant;

pub struct IngestEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> IngestEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<IngestSummary> {
        let started = Instant::now();
        tracing::info!("Starting feedback ingest");

        let inputs = self.pipeline.extract().await?;
        tracing::info!("Extracted {} feedback rows", inputs.len());

        let transformed = self.pipeline.transform(inputs).await?;
        tracing::info!(
            "Classified {} rows, rejected {}",
            transformed.accepted.len(),
            transformed.rejected.len()
        );

        let summary = self.pipeline.load(transformed).await?;
        tracing::info!(
            "Ingest finished in {:?}: {} stored, {} rejected",
            started.elapsed(),
            summary.accepted,
            summary.rejected
        );

        Ok(summary)
    }
}
