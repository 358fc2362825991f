use crate::domain::model::{
    FeedbackRecord, IngestRow, IngestSummary, NewFeedback, TransformResult,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn exists(&self, path: &str) -> impl std::future::Future<Output = Result<bool>> + Send;
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Appends to the end of the file, creating it when missing. Existing
    /// content is never rewritten.
    fn append_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Persistence collaborator for feedback records.
pub trait FeedbackStore: Send + Sync {
    /// Persists the record and returns it with its id and timestamp. The
    /// record must be visible to `records_for` once this resolves.
    fn append(
        &self,
        feedback: NewFeedback,
    ) -> impl std::future::Future<Output = Result<FeedbackRecord>> + Send;

    /// Persists every record in one write, with consecutive ids in input
    /// order.
    fn append_all(
        &self,
        feedback: Vec<NewFeedback>,
    ) -> impl std::future::Future<Output = Result<Vec<FeedbackRecord>>> + Send;

    fn records_for(
        &self,
        product_id: u32,
    ) -> impl std::future::Future<Output = Result<Vec<FeedbackRecord>>> + Send;

    fn all_records(&self) -> impl std::future::Future<Output = Result<Vec<FeedbackRecord>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_files(&self) -> &[String];
    fn rejects_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<IngestRow>>;
    async fn transform(&self, data: Vec<IngestRow>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<IngestSummary>;
}
